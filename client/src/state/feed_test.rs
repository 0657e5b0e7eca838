use super::*;

#[test]
fn feed_state_default_is_empty_and_idle() {
    let state = FeedState::default();
    assert!(state.posts.is_empty());
    assert!(state.search.is_empty());
    assert!(!state.loading);
}
