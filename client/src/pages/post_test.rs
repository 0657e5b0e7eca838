use super::*;

#[test]
fn like_label_filled_heart_when_liked() {
    assert_eq!(like_label(true, 3), "♥ 3");
}

#[test]
fn like_label_empty_heart_when_not_liked() {
    assert_eq!(like_label(false, 0), "♡ 0");
}
