use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument};

use crate::{auth::extractors::CurrentUser, error::ApiError, state::AppState};

use super::{
    dto::{CaptionRequest, SummaryRequest, TaskOutput, TranslationRequest},
    repo_types::{Task, TaskKind},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks/caption", post(generate_caption))
        .route("/tasks/summary", post(summarize_text))
        .route("/tasks/translation", post(translate_text))
        .route("/tasks/history", get(task_history))
}

fn caption_prompt(topic: &str, input_text: &str) -> String {
    format!("Generate a creative caption for an {topic}. Additional context: {input_text}")
}

fn summary_prompt(input_text: &str) -> String {
    format!("Summarize the following text in a concise way: {input_text}")
}

fn translation_prompt(target_language: &str, input_text: &str) -> String {
    format!("Translate the following text to {target_language}: {input_text}")
}

/// Runs one generation end to end: prompt the provider, persist the
/// input/output pair with its metadata, hand back the output.
async fn run_task(
    state: &AppState,
    user_id: i64,
    kind: TaskKind,
    prompt: &str,
    input_text: &str,
    model_name: &str,
    provider: &str,
    metadata: serde_json::Value,
) -> Result<Json<TaskOutput>, ApiError> {
    let output_text = state
        .model
        .complete(prompt, model_name, provider)
        .await
        .map_err(|e| {
            error!(error = %e, task = kind.as_str(), "provider call failed");
            ApiError::Upstream(format!("Error calling OpenAI API: {e}"))
        })?;

    let task = Task::insert(
        &state.db,
        user_id,
        kind,
        input_text,
        &output_text,
        &metadata.to_string(),
    )
    .await?;

    info!(task_id = task.id, user_id, task = kind.as_str(), "task recorded");
    Ok(Json(TaskOutput { output_text }))
}

#[instrument(skip_all)]
pub async fn generate_caption(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CaptionRequest>,
) -> Result<Json<TaskOutput>, ApiError> {
    let prompt = caption_prompt(&input.topic, &input.input_text);
    let metadata = json!({
        "topic": input.topic,
        "model_name": input.model_name,
        "provider": input.provider,
    });
    run_task(
        &state,
        user.id,
        TaskKind::Caption,
        &prompt,
        &input.input_text,
        &input.model_name,
        &input.provider,
        metadata,
    )
    .await
}

#[instrument(skip_all)]
pub async fn summarize_text(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<SummaryRequest>,
) -> Result<Json<TaskOutput>, ApiError> {
    let prompt = summary_prompt(&input.input_text);
    let metadata = json!({
        "model_name": input.model_name,
        "provider": input.provider,
    });
    run_task(
        &state,
        user.id,
        TaskKind::Summary,
        &prompt,
        &input.input_text,
        &input.model_name,
        &input.provider,
        metadata,
    )
    .await
}

#[instrument(skip_all)]
pub async fn translate_text(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<TranslationRequest>,
) -> Result<Json<TaskOutput>, ApiError> {
    let prompt = translation_prompt(&input.target_language, &input.input_text);
    let metadata = json!({
        "target_language": input.target_language,
        "model_name": input.model_name,
        "provider": input.provider,
    });
    run_task(
        &state,
        user.id,
        TaskKind::Translation,
        &prompt,
        &input.input_text,
        &input.model_name,
        &input.provider,
        metadata,
    )
    .await
}

#[instrument(skip_all)]
pub async fn task_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = Task::list_by_user(&state.db, user.id).await?;
    Ok(Json(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_match_the_api_contract() {
        assert_eq!(
            caption_prompt("album cover", "a quiet lake"),
            "Generate a creative caption for an album cover. Additional context: a quiet lake"
        );
        assert_eq!(
            summary_prompt("long text"),
            "Summarize the following text in a concise way: long text"
        );
        assert_eq!(
            translation_prompt("French", "hello"),
            "Translate the following text to French: hello"
        );
    }

    #[test]
    fn metadata_shapes_per_task_kind() {
        let caption = json!({
            "topic": "album cover",
            "model_name": "gpt-4o-mini",
            "provider": "openai_chat_completion",
        });
        let parsed: serde_json::Value = serde_json::from_str(&caption.to_string()).unwrap();
        assert_eq!(parsed["topic"], "album cover");

        let translation = json!({
            "target_language": "French",
            "model_name": "gpt-4o-mini",
            "provider": "openai_chat_completion",
        });
        assert!(translation.get("topic").is_none());
        assert_eq!(translation["target_language"], "French");
    }
}
