use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::page::Page;

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Model {
    /// The unique identifier for the chirp.
    pub id: i64,
    /// The user who posted the chirp, absent once the author is removed.
    pub user_id: Option<i64>,
    /// The message body, untrusted user input.
    pub message: String,
    /// The time the chirp was posted.
    pub created_at: DateTime<Utc>,
    /// The time the chirp was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// A chirp counts as edited once its modification time diverges from
    /// its creation time.
    pub fn is_edited(&self) -> bool {
        self.created_at != self.updated_at
    }
}

/// Fetches one page of chirps, newest first.
pub async fn paginate(db: &PgPool, page: i64, per_page: i64) -> sqlx::Result<Page<Model>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chirps")
        .fetch_one(db)
        .await?;

    let items: Vec<Model> =
        sqlx::query_as("SELECT * FROM chirps ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2")
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(db)
            .await?;

    Ok(Page::new(items, page, per_page, total))
}

pub async fn find(db: &PgPool, id: i64) -> sqlx::Result<Option<Model>> {
    sqlx::query_as("SELECT * FROM chirps WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Replaces the message body. `updated_at` moves only when the text
/// actually changes, so saving an untouched chirp never flags it edited.
pub async fn update_message(db: &PgPool, id: i64, message: &str) -> sqlx::Result<()> {
    sqlx::query("UPDATE chirps SET message = $2, updated_at = now() WHERE id = $1 AND message <> $2")
        .bind(id)
        .bind(message)
        .execute(db)
        .await?;

    Ok(())
}

/// Deletes the chirp, reporting whether it existed.
pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
