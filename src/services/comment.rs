//! Comment service — add and list comments per post.

use sqlx::{PgPool, Row};
use uuid::Uuid;

const MAX_COMMENT_LEN: usize = 2000;

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("post not found: {0}")]
    PostNotFound(Uuid),
    #[error("{0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Comment row with the author's username resolved.
#[derive(Debug, Clone)]
pub struct CommentRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

/// Validate comment content.
///
/// # Errors
///
/// Returns a short human-readable reason on rejection.
pub fn validate_comment_input(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("comment must not be empty");
    }
    if content.len() > MAX_COMMENT_LEN {
        return Err("comment too long");
    }
    Ok(())
}

/// Add a comment to a post.
///
/// # Errors
///
/// Returns `Invalid` for empty content, `PostNotFound` when the post does
/// not exist, or a database error.
pub async fn add(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    author_name: &str,
    content: &str,
) -> Result<CommentRow, CommentError> {
    validate_comment_input(content).map_err(CommentError::Invalid)?;

    let id = Uuid::new_v4();
    let row = sqlx::query(
        r"INSERT INTO comments (id, post_id, user_id, content)
          VALUES ($1, $2, $3, $4)
          RETURNING to_char(created_at, 'YYYY-MM-DD HH24:MI') AS created_at",
    )
    .bind(id)
    .bind(post_id)
    .bind(author_id)
    .bind(content.trim())
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            CommentError::PostNotFound(post_id)
        }
        _ => CommentError::Db(e),
    })?;

    Ok(CommentRow {
        id,
        post_id,
        author_id,
        author: author_name.to_owned(),
        content: content.trim().to_owned(),
        created_at: row.get("created_at"),
    })
}

/// List a post's comments, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<CommentRow>, CommentError> {
    let rows = sqlx::query(
        r"SELECT c.id, c.post_id, c.user_id AS author_id, u.username AS author, c.content,
                 to_char(c.created_at, 'YYYY-MM-DD HH24:MI') AS created_at
          FROM comments c
          JOIN users u ON u.id = c.user_id
          WHERE c.post_id = $1
          ORDER BY c.created_at ASC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| CommentRow {
            id: r.get("id"),
            post_id: r.get("post_id"),
            author_id: r.get("author_id"),
            author: r.get("author"),
            content: r.get("content"),
            created_at: r.get("created_at"),
        })
        .collect())
}

#[cfg(test)]
#[path = "comment_test.rs"]
mod tests;
