//! Plain-text helpers for feed and profile rendering.

const EXCERPT_LEN: usize = 240;

/// Shorten post content for a feed card, cutting on a char boundary and
/// appending an ellipsis when anything was dropped.
#[must_use]
pub fn excerpt(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= EXCERPT_LEN {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(EXCERPT_LEN).collect();
    format!("{}…", cut.trim_end())
}

/// Split a stored `"a,b,c"` tag string into displayable tags.
#[must_use]
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
