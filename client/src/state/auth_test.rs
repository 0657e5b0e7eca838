use super::*;

#[test]
fn auth_state_default_is_anonymous_and_idle() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn is_self_false_when_anonymous() {
    let state = AuthState::default();
    assert!(!state.is_self("u1"));
}

#[test]
fn is_self_matches_on_id() {
    let state = AuthState {
        user: Some(User {
            id: "u1".into(),
            username: "alice".into(),
            bio: String::new(),
        }),
        loading: false,
    };
    assert!(state.is_self("u1"));
    assert!(!state.is_self("u2"));
}
