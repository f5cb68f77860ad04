use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    TokenInvalidOrExpired,
    InvalidPage,
    Database(mongodb::error::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized access"),
            AppError::TokenInvalidOrExpired => write!(f, "token invalid or expired"),
            AppError::InvalidPage => write!(f, "invalid page number"),
            AppError::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Database(e)
    }
}

/// Uniform HTTP translation: handlers and the auth middleware surface
/// failures through this impl, so no data-access error escapes without a
/// structured JSON response.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::TokenInvalidOrExpired => StatusCode::UNAUTHORIZED,
            AppError::InvalidPage => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized | AppError::TokenInvalidOrExpired => {
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": true,
                    "message": "unauthorized access"
                }))
            }
            AppError::InvalidPage => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Invalid page number"
            })),
            AppError::Database(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_401() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::TokenInvalidOrExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn invalid_page_maps_to_400() {
        assert_eq!(AppError::InvalidPage.status_code(), StatusCode::BAD_REQUEST);
    }
}
