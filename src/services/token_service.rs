use crate::utils::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens embed whatever JSON object the caller supplies; the service adds
/// only the expiry claim.
pub type TokenPayload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub exp: usize,
    #[serde(flatten)]
    pub payload: TokenPayload,
}

impl Claims {
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(|v| v.as_str())
    }
}

fn signing_secret() -> String {
    std::env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

/// Sign a token carrying `payload`, valid for 2 hours.
pub fn issue(payload: &TokenPayload) -> Result<String, jsonwebtoken::errors::Error> {
    issue_with_ttl(payload, Duration::hours(2))
}

fn issue_with_ttl(
    payload: &TokenPayload,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + ttl).timestamp() as usize;
    let claims = Claims {
        exp,
        payload: payload.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(signing_secret().as_ref()),
    )
}

/// Validity is purely signature + expiry; nothing is looked up server-side.
pub fn verify(token: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(signing_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        log::debug!("Token rejected: {}", e);
        AppError::TokenInvalidOrExpired
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> TokenPayload {
        let mut payload = TokenPayload::new();
        payload.insert("email".to_string(), "alice@example.com".into());
        payload.insert("name".to_string(), "Alice".into());
        payload
    }

    #[test]
    fn issue_then_verify_preserves_the_payload() {
        let payload = sample_payload();
        let token = issue(&payload).unwrap();

        let claims = verify(&token).unwrap();
        assert_eq!(claims.payload, payload);
        assert_eq!(claims.email(), Some("alice@example.com"));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the decoder's default leeway.
        let token = issue_with_ttl(&sample_payload(), Duration::hours(-3)).unwrap();

        assert!(matches!(
            verify(&token),
            Err(AppError::TokenInvalidOrExpired)
        ));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let claims = Claims {
            exp: (Utc::now() + Duration::hours(2)).timestamp() as usize,
            payload: sample_payload(),
        };
        let forged = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        assert!(matches!(
            verify(&forged),
            Err(AppError::TokenInvalidOrExpired)
        ));
    }

    #[test]
    fn token_without_expiry_is_rejected() {
        let forged = encode(
            &Header::default(),
            &sample_payload(),
            &EncodingKey::from_secret(signing_secret().as_ref()),
        )
        .unwrap();

        assert!(verify(&forged).is_err());
    }
}
