use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String, // argon2 hash, never exposed in JSON
    pub disabled: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Sparse patch for PUT /users/me. `None` means "leave unchanged"; the
/// distinction from an explicit value is carried by the type, not a map.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub disabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_hides_password_hash() {
        let user = User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            hashed_password: "$argon2id$v=19$secret".into(),
            disabled: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn patch_distinguishes_absent_from_present() {
        let patch: UserPatch = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(patch.email.as_deref(), Some("a@x.com"));
        assert!(patch.disabled.is_none());

        let patch: UserPatch = serde_json::from_str(r#"{"disabled":true}"#).unwrap();
        assert!(patch.email.is_none());
        assert_eq!(patch.disabled, Some(true));
    }
}
