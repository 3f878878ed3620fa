//! Paragraph splitting and the HTML document skeleton.
//!
//! Both run on the fragment produced by the inline renderer and never look
//! inside rendered spans.

use std::sync::LazyLock;

use regex::Regex;

/// A line break followed by one or more blank lines (spaces/tabs only).
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("blank line pattern is valid"));

/// Inserted at every blank-line boundary.
pub const PARAGRAPH_BREAK: &str = "\n</p>\n<p>\n    ";

/// Close the current paragraph and open a new one at every blank line.
pub fn split_paragraphs(fragment: &str) -> String {
    BLANK_LINES
        .replace_all(fragment, PARAGRAPH_BREAK)
        .into_owned()
}

/// Wrap a rendered body in a complete HTML document.
pub fn wrap_document(body: &str, title: Option<&str>) -> String {
    let mut out = String::with_capacity(body.len() + 160);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html>\n");
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    if let Some(title) = title {
        out.push_str("    <title>");
        out.push_str(&escape_text(title));
        out.push_str("</title>\n");
    }
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("<p>\n    ");
    out.push_str(body);
    out.push_str("\n</p>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
