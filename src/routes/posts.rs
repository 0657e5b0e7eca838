//! Post, comment, and like routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::{comment, like, post};
use crate::state::AppState;

// =============================================================================
// RESPONSE DTOS
// =============================================================================

#[derive(Serialize)]
pub struct PostSummaryResponse {
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

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_viewer: bool,
    pub comments: Vec<CommentResponse>,
}

#[derive(Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: i64,
}

pub(crate) fn to_summary_response(row: post::PostSummary) -> PostSummaryResponse {
    PostSummaryResponse {
        id: row.id,
        author_id: row.author_id,
        author: row.author,
        title: row.title,
        content: row.content,
        tags: row.tags,
        created_at: row.created_at,
        like_count: row.like_count,
        comment_count: row.comment_count,
    }
}

fn to_comment_response(row: comment::CommentRow) -> CommentResponse {
    CommentResponse {
        id: row.id,
        author_id: row.author_id,
        author: row.author,
        content: row.content,
        created_at: row.created_at,
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Deserialize)]
pub struct CreatePostBody {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

#[derive(Deserialize)]
pub struct UpdatePostBody {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct AddCommentBody {
    pub content: String,
}

#[derive(Deserialize)]
pub struct FeedQuery {
    pub search: Option<String>,
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn post_error_to_status(err: &post::PostError) -> StatusCode {
    match err {
        post::PostError::NotFound(_) => StatusCode::NOT_FOUND,
        post::PostError::Forbidden(_) => StatusCode::FORBIDDEN,
        post::PostError::Invalid(_) => StatusCode::BAD_REQUEST,
        post::PostError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn comment_error_to_status(err: &comment::CommentError) -> StatusCode {
    match err {
        comment::CommentError::PostNotFound(_) => StatusCode::NOT_FOUND,
        comment::CommentError::Invalid(_) => StatusCode::BAD_REQUEST,
        comment::CommentError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn like_error_to_status(err: &like::LikeError) -> StatusCode {
    match err {
        like::LikeError::PostNotFound(_) => StatusCode::NOT_FOUND,
        like::LikeError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_if_server_error(status: StatusCode, err: &dyn std::fmt::Display, what: &'static str) {
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "{what} failed");
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/posts?search=` — the feed, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<PostSummaryResponse>>, StatusCode> {
    let rows = post::list(&state.pool, query.search.as_deref())
        .await
        .map_err(|e| {
            let status = post_error_to_status(&e);
            log_if_server_error(status, &e, "feed query");
            status
        })?;

    Ok(Json(rows.into_iter().map(to_summary_response).collect()))
}

/// `POST /api/posts` — create a post.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePostBody>,
) -> Result<impl IntoResponse, StatusCode> {
    let row = post::create(&state.pool, auth.user.id, &body.title, &body.content, &body.tags)
        .await
        .map_err(|e| {
            let status = post_error_to_status(&e);
            log_if_server_error(status, &e, "post create");
            status
        })?;

    Ok((StatusCode::CREATED, Json(to_summary_response(row))))
}

/// `GET /api/posts/:id` — post detail with comments and viewer like state.
pub async fn get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, StatusCode> {
    let detail = post::fetch(&state.pool, post_id, auth.user.id)
        .await
        .map_err(|e| {
            let status = post_error_to_status(&e);
            log_if_server_error(status, &e, "post fetch");
            status
        })?;

    let comments = comment::list_for_post(&state.pool, post_id)
        .await
        .map_err(|e| {
            let status = comment_error_to_status(&e);
            log_if_server_error(status, &e, "comment list");
            status
        })?;

    let s = detail.summary;
    Ok(Json(PostDetailResponse {
        id: s.id,
        author_id: s.author_id,
        author: s.author,
        title: s.title,
        content: s.content,
        tags: s.tags,
        created_at: s.created_at,
        like_count: s.like_count,
        comment_count: s.comment_count,
        liked_by_viewer: detail.liked_by_viewer,
        comments: comments.into_iter().map(to_comment_response).collect(),
    }))
}

/// `PATCH /api/posts/:id` — edit the caller's own post.
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<UpdatePostBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    post::update(&state.pool, post_id, auth.user.id, &body.title, &body.content)
        .await
        .map_err(|e| {
            let status = post_error_to_status(&e);
            log_if_server_error(status, &e, "post update");
            status
        })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/posts/:id` — delete the caller's own post.
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    post::delete(&state.pool, post_id, auth.user.id)
        .await
        .map_err(|e| {
            let status = post_error_to_status(&e);
            log_if_server_error(status, &e, "post delete");
            status
        })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/posts/:id/comments` — add a comment.
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<AddCommentBody>,
) -> Result<impl IntoResponse, StatusCode> {
    let row = comment::add(&state.pool, post_id, auth.user.id, &auth.user.username, &body.content)
        .await
        .map_err(|e| {
            let status = comment_error_to_status(&e);
            log_if_server_error(status, &e, "comment add");
            status
        })?;

    Ok((StatusCode::CREATED, Json(to_comment_response(row))))
}

/// `POST /api/posts/:id/like` — toggle the caller's like.
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<LikeResponse>, StatusCode> {
    let status = like::toggle(&state.pool, post_id, auth.user.id)
        .await
        .map_err(|e| {
            let code = like_error_to_status(&e);
            log_if_server_error(code, &e, "like toggle");
            code
        })?;

    Ok(Json(LikeResponse { liked: status.liked, like_count: status.like_count }))
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
