use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;
use tracing::{error, instrument};

use crate::{error::ApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/models", get(list_models))
}

/// GET /models — passthrough of the provider's model metadata.
#[instrument(skip(state))]
pub async fn list_models(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let models = state.model.list_models().await.map_err(|e| {
        error!(error = %e, "model listing failed");
        ApiError::Upstream(format!("Error fetching models: {e}"))
    })?;
    Ok(Json(models))
}
