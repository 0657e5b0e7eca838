//! Post service — CRUD, search, and per-post aggregates.
//!
//! DESIGN
//! ======
//! The feed and profile queries aggregate like/comment counts in SQL so a
//! page render is a single round trip. Timestamps are formatted by Postgres
//! (`to_char`) into the display form the client shows verbatim.
//!
//! ERROR HANDLING
//! ==============
//! Ownership checks run before any mutation; editing or deleting another
//! user's post is `Forbidden`, a missing post is `NotFound`, and the route
//! layer maps those to 403/404 separately.

use sqlx::{PgPool, Row};
use uuid::Uuid;

const MAX_TITLE_LEN: usize = 200;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("post not found: {0}")]
    NotFound(Uuid),
    #[error("not the author of post {0}")]
    Forbidden(Uuid),
    #[error("{0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Feed/profile row with aggregate counts.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
}

/// Single-post view row; adds the viewer's own like state.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub summary: PostSummary,
    pub liked_by_viewer: bool,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate title and content for create/update.
///
/// # Errors
///
/// Returns a short human-readable reason on rejection.
pub fn validate_post_input(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("title must not be empty");
    }
    if title.len() > MAX_TITLE_LEN {
        return Err("title too long");
    }
    if content.trim().is_empty() {
        return Err("content must not be empty");
    }
    Ok(())
}

/// Collapse a free-form tag string into `"a,b,c"` form: split on commas,
/// trim each tag, drop empties.
#[must_use]
pub fn normalize_tags(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Build an ILIKE pattern for a feed search term, escaping wildcards.
#[must_use]
pub fn search_pattern(term: &str) -> String {
    let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{escaped}%")
}

// =============================================================================
// QUERIES
// =============================================================================

const SUMMARY_COLS: &str = r"p.id, p.user_id AS author_id, u.username AS author,
           p.title, p.content, p.tags,
           to_char(p.created_at, 'YYYY-MM-DD HH24:MI') AS created_at,
           (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
           (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count";

const SUMMARY_FROM: &str = "FROM posts p JOIN users u ON u.id = p.user_id";

fn summary_from_row(row: &sqlx::postgres::PgRow) -> PostSummary {
    PostSummary {
        id: row.get("id"),
        author_id: row.get("author_id"),
        author: row.get("author"),
        title: row.get("title"),
        content: row.get("content"),
        tags: row.get("tags"),
        created_at: row.get("created_at"),
        like_count: row.get("like_count"),
        comment_count: row.get("comment_count"),
    }
}

/// Create a post and return its feed row.
///
/// # Errors
///
/// Returns `Invalid` for empty title/content or a database error.
pub async fn create(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    content: &str,
    tags: &str,
) -> Result<PostSummary, PostError> {
    validate_post_input(title, content).map_err(PostError::Invalid)?;

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO posts (id, user_id, title, content, tags) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(author_id)
        .bind(title.trim())
        .bind(content)
        .bind(normalize_tags(tags))
        .execute(pool)
        .await?;

    let row = sqlx::query(&format!("SELECT {SUMMARY_COLS} {SUMMARY_FROM} WHERE p.id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(summary_from_row(&row))
}

/// List the feed, newest first, optionally filtered by a search term
/// matched case-insensitively against title and content.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<PostSummary>, PostError> {
    let rows = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => {
            sqlx::query(&format!(
                r"SELECT {SUMMARY_COLS} {SUMMARY_FROM}
                  WHERE p.title ILIKE $1 ESCAPE '\' OR p.content ILIKE $1 ESCAPE '\'
                  ORDER BY p.created_at DESC"
            ))
            .bind(search_pattern(term))
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(&format!(
                "SELECT {SUMMARY_COLS} {SUMMARY_FROM} ORDER BY p.created_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.iter().map(summary_from_row).collect())
}

/// List one author's posts, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_by_author(pool: &PgPool, author_id: Uuid) -> Result<Vec<PostSummary>, PostError> {
    let rows = sqlx::query(&format!(
        "SELECT {SUMMARY_COLS} {SUMMARY_FROM} WHERE p.user_id = $1 ORDER BY p.created_at DESC"
    ))
    .bind(author_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(summary_from_row).collect())
}

/// Fetch a single post with counts and the viewer's like state.
///
/// # Errors
///
/// Returns `NotFound` if no such post exists, or a database error.
pub async fn fetch(pool: &PgPool, id: Uuid, viewer_id: Uuid) -> Result<PostDetail, PostError> {
    let row = sqlx::query(&format!(
        r"SELECT {SUMMARY_COLS},
               EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $2)
                   AS liked_by_viewer
          {SUMMARY_FROM} WHERE p.id = $1"
    ))
    .bind(id)
    .bind(viewer_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PostError::NotFound(id))?;

    Ok(PostDetail {
        summary: summary_from_row(&row),
        liked_by_viewer: row.get("liked_by_viewer"),
    })
}

/// Update title and content of the caller's own post.
///
/// # Errors
///
/// Returns `NotFound`, `Forbidden` for non-authors, `Invalid` for bad
/// fields, or a database error.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    editor_id: Uuid,
    title: &str,
    content: &str,
) -> Result<(), PostError> {
    validate_post_input(title, content).map_err(PostError::Invalid)?;
    require_author(pool, id, editor_id).await?;

    sqlx::query("UPDATE posts SET title = $1, content = $2 WHERE id = $3")
        .bind(title.trim())
        .bind(content)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete the caller's own post.
///
/// # Errors
///
/// Returns `NotFound`, `Forbidden` for non-authors, or a database error.
pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), PostError> {
    require_author(pool, id, user_id).await?;

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn require_author(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), PostError> {
    let owner: Option<Uuid> = sqlx::query_scalar("SELECT user_id FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match owner {
        None => Err(PostError::NotFound(id)),
        Some(owner) if owner != user_id => Err(PostError::Forbidden(id)),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
#[path = "post_test.rs"]
mod tests;
