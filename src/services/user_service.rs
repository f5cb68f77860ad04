use crate::database::MongoDB;
use crate::models::User;
use crate::utils::error::AppError;
use mongodb::bson::{doc, Bson};

pub enum RegisterOutcome {
    AlreadyExists,
    Created { inserted_id: String },
}

/// Save a user unless the email is already taken. Uniqueness is a pre-insert
/// lookup on `email`, not a database constraint.
pub async fn register(db: &MongoDB, user: &User) -> Result<RegisterOutcome, AppError> {
    let existing = db
        .find_one::<User>("users", doc! { "email": &user.email })
        .await?;

    if existing.is_some() {
        return Ok(RegisterOutcome::AlreadyExists);
    }

    let result = db.insert_one("users", user).await?;
    let inserted_id = match result.inserted_id {
        Bson::ObjectId(id) => id.to_hex(),
        other => other.to_string(),
    };

    Ok(RegisterOutcome::Created { inserted_id })
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    Ok(db.find_all::<User>("users", None, None, None).await?)
}

/// Whether the stored record for `email` carries the exact role `"admin"`.
pub async fn is_admin(db: &MongoDB, email: &str) -> Result<bool, AppError> {
    let user = db
        .find_one::<User>("users", doc! { "email": email })
        .await?;

    Ok(user.map(|u| u.is_admin()).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn duplicate_registration_returns_early() {
        dotenv::dotenv().ok();

        let db = MongoDB::connect("mongodb://localhost:27017", "foodie_test")
            .await
            .unwrap();

        let email = format!(
            "dup-{}@example.com",
            chrono::Utc::now().timestamp_nanos_opt().unwrap()
        );
        let user = User {
            id: None,
            email: email.clone(),
            role: None,
            profile: serde_json::Map::new(),
        };

        let first = register(&db, &user).await.unwrap();
        assert!(matches!(first, RegisterOutcome::Created { .. }));

        let second = register(&db, &user).await.unwrap();
        assert!(matches!(second, RegisterOutcome::AlreadyExists));

        assert!(!is_admin(&db, &email).await.unwrap());
    }
}
