use sqlx::PgPool;

use crate::error::ApiError;

use super::repo_types::{User, UserPatch};

const USER_COLUMNS: &str = "id, username, email, hashed_password, disabled, created_at";

impl User {
    /// Exact, case-sensitive lookup by username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, hashed_password) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(db)
        .await
        .map_err(conflict_on_unique("Username or email already registered"))
    }

    /// Sparse update: absent patch fields leave the row untouched.
    pub async fn update(db: &PgPool, id: i64, patch: &UserPatch) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET email = COALESCE($2, email), disabled = COALESCE($3, disabled) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.email.as_deref())
        .bind(patch.disabled)
        .fetch_one(db)
        .await
        .map_err(conflict_on_unique("Email already registered"))
    }
}

fn conflict_on_unique(message: &str) -> impl FnOnce(sqlx::Error) -> ApiError + '_ {
    move |e| match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => ApiError::Conflict(message.to_string()),
        _ => ApiError::Database(e),
    }
}
