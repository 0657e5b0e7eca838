use super::*;

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn post_error_to_status_maps_not_found() {
    let err = post::PostError::NotFound(Uuid::nil());
    assert_eq!(post_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn post_error_to_status_maps_forbidden() {
    let err = post::PostError::Forbidden(Uuid::nil());
    assert_eq!(post_error_to_status(&err), StatusCode::FORBIDDEN);
}

#[test]
fn post_error_to_status_maps_invalid() {
    let err = post::PostError::Invalid("title must not be empty");
    assert_eq!(post_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn comment_error_to_status_maps_missing_post() {
    let err = comment::CommentError::PostNotFound(Uuid::nil());
    assert_eq!(comment_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn comment_error_to_status_maps_invalid() {
    let err = comment::CommentError::Invalid("comment must not be empty");
    assert_eq!(comment_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn like_error_to_status_maps_missing_post() {
    let err = like::LikeError::PostNotFound(Uuid::nil());
    assert_eq!(like_error_to_status(&err), StatusCode::NOT_FOUND);
}

// =============================================================================
// request body shapes
// =============================================================================

#[test]
fn create_post_body_tags_default_to_empty() {
    let body: CreatePostBody = serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
    assert_eq!(body.title, "T");
    assert_eq!(body.content, "C");
    assert_eq!(body.tags, "");
}

#[test]
fn create_post_body_accepts_tags() {
    let body: CreatePostBody =
        serde_json::from_str(r#"{"title":"T","content":"C","tags":"rust,web"}"#).unwrap();
    assert_eq!(body.tags, "rust,web");
}

#[test]
fn feed_query_search_is_optional() {
    let q: FeedQuery = serde_json::from_str("{}").unwrap();
    assert!(q.search.is_none());
    let q: FeedQuery = serde_json::from_str(r#"{"search":"rust"}"#).unwrap();
    assert_eq!(q.search.as_deref(), Some("rust"));
}

// =============================================================================
// response shapes
// =============================================================================

#[test]
fn post_detail_response_serializes_comments_inline() {
    let detail = PostDetailResponse {
        id: Uuid::nil(),
        author_id: Uuid::nil(),
        author: "alice".into(),
        title: "T".into(),
        content: "C".into(),
        tags: "rust".into(),
        created_at: "2024-01-01 12:00".into(),
        like_count: 2,
        comment_count: 1,
        liked_by_viewer: true,
        comments: vec![CommentResponse {
            id: Uuid::nil(),
            author_id: Uuid::nil(),
            author: "bob".into(),
            content: "hi".into(),
            created_at: "2024-01-01 12:30".into(),
        }],
    };
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["liked_by_viewer"], true);
    assert_eq!(json["comments"][0]["author"], "bob");
}

#[test]
fn like_response_serializes_count() {
    let json = serde_json::to_value(LikeResponse { liked: false, like_count: 0 }).unwrap();
    assert_eq!(json["liked"], false);
    assert_eq!(json["like_count"], 0);
}
