use super::*;

// =============================================================
// excerpt
// =============================================================

#[test]
fn excerpt_passes_short_content_through() {
    assert_eq!(excerpt("short post"), "short post");
}

#[test]
fn excerpt_trims_whitespace() {
    assert_eq!(excerpt("  padded  "), "padded");
}

#[test]
fn excerpt_truncates_long_content_with_ellipsis() {
    let long = "word ".repeat(100);
    let out = excerpt(&long);
    assert!(out.ends_with('…'));
    assert!(out.chars().count() <= 241);
}

#[test]
fn excerpt_respects_char_boundaries() {
    let long = "é".repeat(500);
    let out = excerpt(&long);
    assert!(out.ends_with('…'));
    assert_eq!(out.chars().count(), 241);
}

// =============================================================
// split_tags
// =============================================================

#[test]
fn split_tags_handles_plain_list() {
    assert_eq!(split_tags("rust,web,blog"), vec!["rust", "web", "blog"]);
}

#[test]
fn split_tags_trims_and_drops_empties() {
    assert_eq!(split_tags(" rust , , web "), vec!["rust", "web"]);
}

#[test]
fn split_tags_empty_string_is_empty() {
    assert!(split_tags("").is_empty());
}
