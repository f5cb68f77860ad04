use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodie Service API",
        version = "1.0.0",
        description = "HTTP backend for the Foodie food-ordering app.\n\n**Authentication:** the admin role check requires a JWT Bearer token obtained from POST /jwt.",
    ),
    paths(
        // Health
        crate::api::health::liveness,

        // Auth
        crate::api::auth::issue_token,

        // Users
        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::check_admin,

        // Foods
        crate::api::foods::add_food,
        crate::api::foods::get_foods,
    ),
    components(
        schemas(
            crate::api::auth::TokenResponse,
            crate::api::users::AdminResponse,
            crate::services::food_service::FoodPage,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe."),
        (name = "Auth", description = "Bearer token issuance. Tokens embed the posted payload and expire after 2 hours."),
        (name = "Users", description = "User registration, listing, and admin role check."),
        (name = "Foods", description = "Food item insertion and (optionally paginated) listing."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
