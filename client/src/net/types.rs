//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON responses so serde
//! round-trips stay lossless. Ids are UUID strings; timestamps arrive
//! pre-formatted by the server and are displayed verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login and display name.
    pub username: String,
    /// Free-form profile text.
    pub bio: String,
}

/// A feed or profile entry with aggregate counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Author's user id (UUID string).
    pub author_id: String,
    /// Author's username.
    pub author: String,
    pub title: String,
    pub content: String,
    /// Stored `"a,b,c"` tag string; split client-side for rendering.
    pub tags: String,
    /// Display timestamp, `YYYY-MM-DD HH:MM`.
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
}

/// A comment under a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier (UUID string).
    pub id: String,
    /// Author's user id (UUID string).
    pub author_id: String,
    /// Author's username.
    pub author: String,
    pub content: String,
    /// Display timestamp, `YYYY-MM-DD HH:MM`.
    pub created_at: String,
}

/// Single-post view: the summary fields plus viewer state and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub author_id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
    /// Whether the requesting user has liked this post.
    pub liked_by_viewer: bool,
    /// Comments, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Result of a like toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
    pub like_count: i64,
}

/// Aggregate counts shown on a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub posts: i64,
    pub comments_written: i64,
    pub likes_received: i64,
}

/// A public user profile with the user's posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub bio: String,
    /// Join date, `YYYY-MM-DD`, if known.
    pub member_since: Option<String>,
    pub stats: UserStats,
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}
