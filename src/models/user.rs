use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A registered user. `email` is the lookup key (uniqueness is enforced by a
/// pre-insert lookup, not a database index) and `role` is only ever compared
/// against `"admin"`. Everything else the client sends at registration is
/// kept as-is in `profile`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_must_be_exactly_admin() {
        let mut user = User {
            id: None,
            email: "a@b.com".to_string(),
            role: None,
            profile: serde_json::Map::new(),
        };
        assert!(!user.is_admin());

        user.role = Some("moderator".to_string());
        assert!(!user.is_admin());

        user.role = Some("admin".to_string());
        assert!(user.is_admin());
    }

    #[test]
    fn extra_profile_fields_survive_a_round_trip() {
        let json = serde_json::json!({
            "email": "a@b.com",
            "name": "Alice",
            "photoUrl": "https://example.com/a.png"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.role.is_none());
        assert_eq!(user.profile["name"], "Alice");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["photoUrl"], "https://example.com/a.png");
        assert!(back.get("_id").is_none());
    }
}
