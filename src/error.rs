use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can surface, with its HTTP mapping in one place.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing/malformed header, bad or expired token, or a subject that no
    /// longer resolves. Deliberately one variant: the response never tells
    /// the caller which check failed.
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Login with an unknown username or a wrong password. Same 401 as the
    /// gate but with the login-specific detail the original API returns;
    /// the frontend shows this string verbatim.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Token and subject are fine but the account is disabled. The original
    /// API returns 400 here rather than 403; kept for compatibility.
    #[error("Inactive user")]
    InactiveAccount,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::InactiveAccount => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "detail": self.to_string() }));
        if matches!(self, ApiError::Unauthenticated | ApiError::InvalidCredentials) {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_401_with_bearer_challenge() {
        let res = ApiError::Unauthenticated.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn invalid_credentials_maps_to_401_with_bearer_challenge() {
        let res = ApiError::InvalidCredentials.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn inactive_account_maps_to_400() {
        let res = ApiError::InactiveAccount.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn conflict_maps_to_409() {
        let res = ApiError::Conflict("Email already registered".into()).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_display_does_not_leak_store_detail() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.to_string(), "database error");
    }
}
