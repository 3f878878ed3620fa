//! Backslash escapes and line-break normalization for rendered spans.
//!
//! An escaped token (`\_`) is never structural; once a nesting level has been
//! assembled the backslash is dropped so the token shows up literally.

use std::sync::LazyLock;

use regex::Regex;

use super::delimiters::DelimiterTable;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("line break pattern is valid"));

/// Replace every `\` + token with the bare token, longest tokens first so a
/// `\__` is resolved as one escape rather than an escape followed by `_`.
pub fn unescape(text: &str, table: &DelimiterTable) -> String {
    let mut out = text.to_string();

    for token in table.tokens() {
        let escaped = format!("\\{}", token);
        if out.contains(&escaped) {
            out = out.replace(&escaped, token);
        }
    }

    out
}

/// Collapse each run of line breaks (LF or CRLF) to a single space.
pub fn normalize_line_breaks(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").into_owned()
}
