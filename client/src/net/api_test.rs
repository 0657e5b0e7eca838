use super::*;

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("p123"), "/api/posts/p123");
}

#[test]
fn post_comments_endpoint_formats_expected_path() {
    assert_eq!(post_comments_endpoint("p123"), "/api/posts/p123/comments");
}

#[test]
fn post_like_endpoint_formats_expected_path() {
    assert_eq!(post_like_endpoint("p123"), "/api/posts/p123/like");
}

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
}

#[test]
fn register_failed_message_names_conflict() {
    assert_eq!(register_failed_message(409), "Username or email already taken.");
    assert_eq!(register_failed_message(400), "Invalid registration details.");
    assert_eq!(register_failed_message(500), "registration failed: 500");
}

#[test]
fn login_failed_message_names_bad_credentials() {
    assert_eq!(login_failed_message(401), "Invalid username or password.");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("like", 404), "like failed: 404");
}
