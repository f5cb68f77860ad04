use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::services::token_service::{self, TokenPayload};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Signed bearer token embedding the posted payload", body = TokenResponse),
        (status = 500, description = "Token signing failed")
    )
)]
pub async fn issue_token(payload: web::Json<TokenPayload>) -> HttpResponse {
    log::info!("🔑 POST /jwt - issuing token");

    match token_service::issue(&payload) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => {
            log::error!("❌ Failed to issue token: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to issue token"
            }))
        }
    }
}
