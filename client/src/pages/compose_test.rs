use super::*;

#[test]
fn validate_compose_input_accepts_title_and_content() {
    assert_eq!(validate_compose_input("Title", "Body"), Ok(()));
}

#[test]
fn validate_compose_input_requires_title() {
    assert_eq!(validate_compose_input("  ", "Body"), Err("Give your post a title."));
}

#[test]
fn validate_compose_input_requires_content() {
    assert_eq!(validate_compose_input("Title", " \n "), Err("Write something first."));
}
