//! Greedy matching of openers to closers.
//!
//! An opener pairs with the first eligible closer of the same token that
//! starts at or after the opener's end. A later closer is never preferred,
//! even if it would produce a "better" span.

use super::scanner::Occurrence;

/// A matched opener/closer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub opener: Occurrence<'a>,
    pub closer: Occurrence<'a>,
}

impl Span<'_> {
    /// Byte range of the content between the delimiters.
    pub fn content_range(&self) -> std::ops::Range<usize> {
        self.opener.end()..self.closer.position
    }

    /// Byte offset just past the closing delimiter.
    pub fn end(&self) -> usize {
        self.closer.end()
    }
}

/// Find the closer for `opener`. `closers` must be sorted by position.
///
/// Returns `None` when the opener is unmatched.
pub fn find_closer<'a>(opener: &Occurrence<'a>, closers: &[Occurrence<'a>]) -> Option<Span<'a>> {
    let start = closers.partition_point(|c| c.position < opener.end());

    closers[start..]
        .iter()
        .find(|c| c.same_token(opener))
        .map(|closer| Span {
            opener: *opener,
            closer: *closer,
        })
}

/// Index of the first opener at or past `offset`. `openers` must be sorted
/// by position.
pub fn next_opener_index(openers: &[Occurrence<'_>], offset: usize) -> usize {
    openers.partition_point(|o| o.position < offset)
}
