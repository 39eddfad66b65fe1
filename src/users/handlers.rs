use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::PublicUser,
        extractors::CurrentUser,
        repo_types::{User, UserPatch},
    },
    error::ApiError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users/me", put(update_me))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}

/// PUT /users/me — sparse patch; absent fields stay as they are.
#[instrument(skip_all)]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(patch): Json<UserPatch>,
) -> Result<Json<PublicUser>, ApiError> {
    let updated = User::update(&state.db, user.id, &patch).await?;
    info!(user_id = updated.id, "profile updated");
    Ok(Json(updated.into()))
}
