use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive() {
    for (i, val) in ["TRUE", "True", "YES", "On"].iter().enumerate() {
        let key = format!("__TEST_EB_CI_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_7134__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_ABC_17__"), None);
}

// =============================================================================
// account_error_to_status
// =============================================================================

#[test]
fn validation_errors_map_to_bad_request() {
    assert_eq!(
        account_error_to_status(&account::AccountError::InvalidUsername),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        account_error_to_status(&account::AccountError::InvalidEmail),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        account_error_to_status(&account::AccountError::WeakPassword),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn taken_maps_to_conflict() {
    assert_eq!(account_error_to_status(&account::AccountError::Taken), StatusCode::CONFLICT);
}

#[test]
fn invalid_credentials_map_to_unauthorized() {
    assert_eq!(
        account_error_to_status(&account::AccountError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
}

// =============================================================================
// session cookie shape
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_root_path() {
    let cookie = session_cookie("tok123".to_owned());
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn cleared_session_cookie_expires_immediately() {
    let cookie = cleared_session_cookie();
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
