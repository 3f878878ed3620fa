//! Scanning text for delimiter candidates.
//!
//! Runs of delimiter characters are tokenized from their content side:
//! openers are read left to right and closers right to left, each preferring
//! the longest token. For `___a___` this yields `__`,`_` on the opening side
//! and `_`,`__` on the closing side, so the outer pair is the strong one.

use std::fmt;

use super::delimiters::{Delimiter, DelimiterTable};

/// One occurrence of a delimiter token in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Byte offset of the first token byte
    pub position: usize,
    pub delimiter: &'a Delimiter,
}

impl<'a> Occurrence<'a> {
    pub fn token(&self) -> &'a str {
        &self.delimiter.token
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.position + self.delimiter.token_len()
    }

    pub fn same_token(&self, other: &Occurrence<'_>) -> bool {
        self.delimiter.token == other.delimiter.token
    }
}

/// Which way a run of delimiter characters was tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right; candidates for opening a span
    Forward,
    /// Right to left; candidates for closing a span
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

pub fn scan<'a>(
    text: &str,
    table: &'a DelimiterTable,
    direction: Direction,
) -> Vec<Occurrence<'a>> {
    match direction {
        Direction::Forward => scan_forward(text, table),
        Direction::Backward => scan_backward(text, table),
    }
}

/// Non-overlapping occurrences found left to right, in ascending position.
pub fn scan_forward<'a>(text: &str, table: &'a DelimiterTable) -> Vec<Occurrence<'a>> {
    let mut occurrences = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match table.iter().find(|d| rest.starts_with(d.token.as_str())) {
            Some(delimiter) => {
                occurrences.push(Occurrence {
                    position: pos,
                    delimiter,
                });
                pos += delimiter.token_len();
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    occurrences
}

/// Non-overlapping occurrences found right to left, in ascending position.
pub fn scan_backward<'a>(text: &str, table: &'a DelimiterTable) -> Vec<Occurrence<'a>> {
    let mut occurrences = Vec::new();
    let mut end = text.len();

    while end > 0 {
        let head = &text[..end];
        match table.iter().find(|d| head.ends_with(d.token.as_str())) {
            Some(delimiter) => {
                end -= delimiter.token_len();
                occurrences.push(Occurrence {
                    position: end,
                    delimiter,
                });
            }
            None => {
                end -= head.chars().next_back().map_or(1, char::len_utf8);
            }
        }
    }

    occurrences.reverse();
    occurrences
}
