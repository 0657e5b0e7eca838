//! Feed state: the post list shown on the landing page.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::PostSummary;

/// Feed state for the landing page: loaded posts plus the active search.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub posts: Vec<PostSummary>,
    pub search: String,
    pub loading: bool,
}
