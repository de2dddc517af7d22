use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Model {
    /// The unique identifier for the user.
    pub id: i64,
    /// The display name of the user.
    pub name: String,
    /// The email of the user.
    pub email: String,
    /// The time the user was created.
    pub created_at: DateTime<Utc>,
    /// The time the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Batch lookup of users by id, used to resolve the authors of a page of
/// chirps in one query.
pub async fn find_by_ids(db: &PgPool, ids: &[i64]) -> sqlx::Result<HashMap<i64, Model>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let results: Vec<Model> = sqlx::query_as("SELECT * FROM users WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(db)
        .await?;

    let mut map = HashMap::new();

    for result in results {
        map.insert(result.id, result);
    }

    Ok(map)
}
