//! Markdown rendering for post bodies.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML string.
///
/// Tables and strikethrough are enabled; raw HTML passes through untouched,
/// which is acceptable while every post author is a logged-in user.
#[must_use]
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;
