//! User profile routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use sqlx::Row;
use uuid::Uuid;

use super::auth::AuthUser;
use super::posts::PostSummaryResponse;
use crate::services::post;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub bio: String,
    pub member_since: Option<String>,
    pub stats: UserStats,
    pub posts: Vec<PostSummaryResponse>,
}

#[derive(Serialize)]
pub struct UserStats {
    pub posts: i64,
    pub comments_written: i64,
    pub likes_received: i64,
}

/// `GET /api/users/:id/profile` — user info, aggregate stats, and their posts.
pub async fn user_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, StatusCode> {
    let user_row = sqlx::query(
        r"SELECT id, username, bio,
                 to_char(created_at, 'YYYY-MM-DD') AS member_since
          FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    .ok_or(StatusCode::NOT_FOUND)?;

    let stats_row = sqlx::query(
        r"SELECT
              (SELECT COUNT(*) FROM posts p WHERE p.user_id = $1)    AS posts,
              (SELECT COUNT(*) FROM comments c WHERE c.user_id = $1) AS comments_written,
              (SELECT COUNT(*)
                 FROM likes l
                 JOIN posts p ON p.id = l.post_id
                WHERE p.user_id = $1)                                AS likes_received",
    )
    .bind(user_id)
    .fetch_one(&state.pool)
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let posts = post::list_by_author(&state.pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "profile post list failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let profile = UserProfile {
        id: user_row.get("id"),
        username: user_row.get("username"),
        bio: user_row.get("bio"),
        member_since: user_row.get("member_since"),
        stats: UserStats {
            posts: stats_row.get("posts"),
            comments_written: stats_row.get("comments_written"),
            likes_received: stats_row.get("likes_received"),
        },
        posts: posts.into_iter().map(super::posts::to_summary_response).collect(),
    };

    Ok(Json(profile))
}
