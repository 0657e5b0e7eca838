use super::*;

#[test]
fn normalize_search_trims_whitespace() {
    assert_eq!(normalize_search("  rust  "), Some("rust".to_owned()));
}

#[test]
fn normalize_search_empty_is_none() {
    assert_eq!(normalize_search(""), None);
    assert_eq!(normalize_search("   "), None);
}

#[test]
fn normalize_search_keeps_inner_spaces() {
    assert_eq!(normalize_search(" rust tips "), Some("rust tips".to_owned()));
}
