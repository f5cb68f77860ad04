mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let uri = database_uri();

    log::info!("🚀 Starting Foodie Service...");

    let db = database::MongoDB::connect(&uri, "foodie")
        .await
        .expect("Invalid MongoDB connection string");

    // One connectivity check at startup. A down database is logged but does
    // not keep the listener from starting.
    match db.ping().await {
        Ok(_) => log::info!("✅ Pinged your deployment. Successfully connected to MongoDB!"),
        Err(e) => log::error!("⚠️ MongoDB ping failed, starting in degraded mode: {}", e),
    }

    let db_data = web::Data::new(db);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
            )
            // Liveness
            .route("/", web::get().to(api::health::liveness))
            // Token issuance
            .route("/jwt", web::post().to(api::auth::issue_token))
            // Users
            .route("/users", web::post().to(api::users::create_user))
            .route("/users", web::get().to(api::users::get_users))
            .service(
                web::resource("/users/admin/{email}")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route(web::get().to(api::users::check_admin)),
            )
            // Foods
            .route("/allFoods", web::post().to(api::foods::add_food))
            .route("/allFoods", web::get().to(api::foods::get_foods))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

/// Credentials come from the environment; without them the URI falls back to
/// an unauthenticated local instance.
fn database_uri() -> String {
    let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost:27017".to_string());

    match (env::var("DB_USER"), env::var("DB_PASS")) {
        (Ok(user), Ok(pass)) => format!(
            "mongodb://{}:{}@{}/?retryWrites=true&w=majority",
            user, pass, db_host
        ),
        _ => format!("mongodb://{}", db_host),
    }
}
