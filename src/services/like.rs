//! Like service — idempotent per-user like toggle.
//!
//! DESIGN
//! ======
//! The toggle is delete-first: a removed row means the user had liked the
//! post. Otherwise an insert lands on the `(post_id, user_id)` composite
//! key, so two racing toggles cannot produce duplicate likes.

use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum LikeError {
    #[error("post not found: {0}")]
    PostNotFound(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Outcome of a toggle, with the fresh aggregate count for rendering.
#[derive(Debug, Clone, Copy)]
pub struct LikeStatus {
    pub liked: bool,
    pub like_count: i64,
}

/// Flip the caller's like on a post.
///
/// # Errors
///
/// Returns `PostNotFound` when liking a missing post, or a database error.
pub async fn toggle(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<LikeStatus, LikeError> {
    let deleted = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    let liked = if deleted == 0 {
        sqlx::query("INSERT INTO likes (post_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    LikeError::PostNotFound(post_id)
                }
                _ => LikeError::Db(e),
            })?;
        true
    } else {
        false
    };

    let like_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(LikeStatus { liked, like_count })
}

#[cfg(test)]
#[path = "like_test.rs"]
mod tests;
