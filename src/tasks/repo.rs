use sqlx::PgPool;

use super::repo_types::{Task, TaskKind};

const TASK_COLUMNS: &str =
    "id, task_type, input_text, output_text, task_metadata, created_at, user_id";

impl Task {
    /// Record a finished generation for the owning user.
    pub async fn insert(
        db: &PgPool,
        user_id: i64,
        kind: TaskKind,
        input_text: &str,
        output_text: &str,
        task_metadata: &str,
    ) -> sqlx::Result<Task> {
        sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (task_type, input_text, output_text, task_metadata, user_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(kind.as_str())
        .bind(input_text)
        .bind(output_text)
        .bind(task_metadata)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// The caller's history, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<Task>> {
        sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
