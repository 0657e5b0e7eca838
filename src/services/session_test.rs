use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_single_byte() {
    assert_eq!(bytes_to_hex(&[0xff]), "ff");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
}

#[test]
fn generate_token_all_valid_hex() {
    let token = generate_token();
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================================
// session_ttl_days — SESSION_TTL_DAYS is a shared global, so only the default
// is asserted here to avoid races with parallel tests.
// =============================================================================

#[test]
fn session_ttl_default_is_30() {
    assert_eq!(DEFAULT_SESSION_TTL_DAYS, 30);
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_debug_contains_username() {
    let user = SessionUser {
        id: Uuid::nil(),
        username: "alice".into(),
        bio: String::new(),
    };
    let debug = format!("{user:?}");
    assert!(debug.contains("alice"));
}

#[test]
fn session_user_serialize_round_trip() {
    let user = SessionUser {
        id: Uuid::nil(),
        username: "charlie".into(),
        bio: "hello".into(),
    };
    let json = serde_json::to_string(&user).unwrap();
    let restored: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored["username"], "charlie");
    assert_eq!(restored["bio"], "hello");
}
