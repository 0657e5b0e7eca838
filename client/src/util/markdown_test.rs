use super::*;

#[test]
fn renders_paragraph() {
    assert_eq!(render("hello"), "<p>hello</p>\n");
}

#[test]
fn renders_emphasis_and_heading() {
    let out = render("# Title\n\nsome *emphasis*");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<em>emphasis</em>"));
}

#[test]
fn renders_strikethrough_extension() {
    assert!(render("~~gone~~").contains("<del>gone</del>"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render(""), "");
}
