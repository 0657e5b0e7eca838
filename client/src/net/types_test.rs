use super::*;

#[test]
fn user_deserializes_from_server_json() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","username":"alice","bio":"hi"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.bio, "hi");
}

#[test]
fn post_summary_round_trips() {
    let summary = PostSummary {
        id: "p1".into(),
        author_id: "u1".into(),
        author: "alice".into(),
        title: "T".into(),
        content: "C".into(),
        tags: "rust,web".into(),
        created_at: "2024-01-01 12:00".into(),
        like_count: 3,
        comment_count: 1,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let restored: PostSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, summary);
}

#[test]
fn post_detail_comments_default_to_empty() {
    let detail: PostDetail = serde_json::from_str(
        r#"{"id":"p1","author_id":"u1","author":"alice","title":"T","content":"C",
            "tags":"","created_at":"2024-01-01 12:00","like_count":0,"comment_count":0,
            "liked_by_viewer":false}"#,
    )
    .unwrap();
    assert!(detail.comments.is_empty());
    assert!(!detail.liked_by_viewer);
}

#[test]
fn like_status_deserializes() {
    let status: LikeStatus = serde_json::from_str(r#"{"liked":true,"like_count":7}"#).unwrap();
    assert!(status.liked);
    assert_eq!(status.like_count, 7);
}

#[test]
fn user_profile_handles_null_member_since() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"id":"u1","username":"alice","bio":"","member_since":null,
            "stats":{"posts":0,"comments_written":0,"likes_received":0}}"#,
    )
    .unwrap();
    assert!(profile.member_since.is_none());
    assert!(profile.posts.is_empty());
}
