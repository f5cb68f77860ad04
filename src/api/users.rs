use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::database::MongoDB;
use crate::models::User;
use crate::services::token_service::Claims;
use crate::services::user_service::{self, RegisterOutcome};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdminResponse {
    pub admin: bool,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Insertion result, or a message when the email is already registered"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, user: web::Json<User>) -> HttpResponse {
    log::info!("📝 POST /users - email: {}", user.email);

    match user_service::register(&db, &user).await {
        Ok(RegisterOutcome::AlreadyExists) => {
            log::info!("⚠️ User already exists: {}", user.email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "user already exists"
            }))
        }
        Ok(RegisterOutcome::Created { inserted_id }) => {
            log::info!("✅ User created: {}", user.email);
            HttpResponse::Ok().json(serde_json::json!({
                "acknowledged": true,
                "insertedId": inserted_id
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to save user {}: {}", user.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /users - listing all users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email whose role is being checked")
    ),
    responses(
        (status = 200, description = "Whether the user's stored role is admin", body = AdminResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Database failure")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn check_admin(
    claims: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🛡️ GET /users/admin/{}", email);

    // Identity mismatch answers before any lookup: a caller can never learn
    // another user's role through this endpoint.
    if claims.email() != Some(email.as_str()) {
        return HttpResponse::Ok().json(AdminResponse { admin: false });
    }

    match user_service::is_admin(&db, &email).await {
        Ok(admin) => HttpResponse::Ok().json(AdminResponse { admin }),
        Err(e) => {
            log::error!("❌ Failed to check role for {}: {}", email, e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::AuthMiddleware;
    use crate::services::token_service::{self, TokenPayload};
    use actix_web::{http::StatusCode, test, App};

    // Parsing a plain mongodb:// URI does no I/O, so handlers whose paths
    // never reach the database can be exercised without a server.
    async fn offline_db() -> web::Data<MongoDB> {
        let db = MongoDB::connect("mongodb://localhost:27017", "foodie")
            .await
            .unwrap();
        web::Data::new(db)
    }

    #[actix_web::test]
    async fn admin_check_short_circuits_on_identity_mismatch() {
        let app = test::init_service(
            App::new().app_data(offline_db().await).service(
                web::resource("/users/admin/{email}")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(check_admin)),
            ),
        )
        .await;

        let mut payload = TokenPayload::new();
        payload.insert("email".to_string(), "alice@example.com".into());
        let token = token_service::issue(&payload).unwrap();

        let req = test::TestRequest::get()
            .uri("/users/admin/bob@example.com")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["admin"], false);
    }
}
