use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// The three generation tasks the API offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Caption,
    Summary,
    Translation,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Caption => "caption",
            TaskKind::Summary => "summary",
            TaskKind::Translation => "translation",
        }
    }
}

/// One generation request and its result. Rows are written once and never
/// mutated. `task_metadata` is a JSON string whose shape varies per task
/// kind and is stored and returned as-is, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub task_type: String,
    pub input_text: String,
    pub output_text: String,
    pub task_metadata: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_serializes_lowercase() {
        assert_eq!(TaskKind::Caption.as_str(), "caption");
        assert_eq!(TaskKind::Summary.as_str(), "summary");
        assert_eq!(TaskKind::Translation.as_str(), "translation");
        assert_eq!(
            serde_json::to_string(&TaskKind::Translation).unwrap(),
            r#""translation""#
        );
    }
}
