//! Opener/closer eligibility of delimiter occurrences.
//!
//! An occurrence is judged only by the characters right next to it. The
//! content side (after an opener, before a closer) must be a word or
//! punctuation character; the outer side must be whitespace, punctuation or
//! the edge of the text. Digits are neither, so `_1` never opens and `1_`
//! never closes.

use unicode_categories::UnicodeCategories;

use super::scanner::Occurrence;

/// Letters, excluding anything numeric. Works over all Unicode scripts.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Unicode punctuation and symbols (`«`, `—`, `~`, `+`), except the escape
/// character.
pub fn is_punctuation(c: char) -> bool {
    c != '\\' && (c.is_punctuation() || c.is_symbol())
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Characters allowed on the content side of a delimiter.
fn is_content_char(c: char) -> bool {
    is_word_char(c) || is_punctuation(c)
}

/// Characters allowed on the outer side of a delimiter. Text edges are
/// handled by the callers.
fn is_separator_char(c: char) -> bool {
    is_whitespace(c) || is_punctuation(c)
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

fn char_after(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// True when the occurrence is directly preceded by a backslash.
pub fn is_escaped(text: &str, occurrence: &Occurrence<'_>) -> bool {
    char_before(text, occurrence.position) == Some('\\')
}

/// Whether `occurrence` may open a span.
pub fn can_open(text: &str, occurrence: &Occurrence<'_>) -> bool {
    if is_escaped(text, occurrence) {
        return false;
    }

    let inside = char_after(text, occurrence.end());
    let outside = char_before(text, occurrence.position);

    inside.is_some_and(is_content_char) && outside.is_none_or(is_separator_char)
}

/// Whether `occurrence` may close a span.
pub fn can_close(text: &str, occurrence: &Occurrence<'_>) -> bool {
    if is_escaped(text, occurrence) {
        return false;
    }

    let inside = char_before(text, occurrence.position);
    let outside = char_after(text, occurrence.end());

    inside.is_some_and(is_content_char) && outside.is_none_or(is_separator_char)
}
