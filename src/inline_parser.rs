//! Inline markup rendering: `_em_`, `__strong__` and `` `code` `` to HTML.
//!
//! Rendering works one nesting level at a time:
//! 1. Scan for opener candidates (left to right) and closer candidates
//!    (right to left), keeping those whose neighbours make them eligible.
//! 2. Walk the openers in order. Each opener pairs with the first closer of
//!    the same token after it; unmatched openers are copied through literally.
//! 3. Content of a matched pair is rendered recursively unless the delimiter
//!    is opaque, line breaks are collapsed, and the result is wrapped in the
//!    delimiter's tag.
//! 4. Escaped tokens (`\_`) are restored to their literal form.

use std::fmt;

mod delimiters;
mod escapes;
mod flanking;
mod pairing;
mod scanner;

pub use delimiters::{Delimiter, DelimiterTable};
pub use escapes::{normalize_line_breaks, unescape};
pub use scanner::{Direction, Occurrence};

use flanking::{can_close, can_open};
use pairing::{Span, find_closer, next_opener_index};
use scanner::scan;

/// Nesting depth at which content stops being interpreted.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Renders inline markup with a fixed delimiter table.
///
/// A renderer holds no mutable state and can be shared freely between
/// threads as long as the table outlives it.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    table: &'a DelimiterTable,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(table: &'a DelimiterTable) -> Self {
        Self {
            table,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how many levels of nested spans are interpreted. Content below
    /// the limit is emitted as literal text. A limit of zero is treated as one.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render `text` to an HTML fragment. Never fails: anything that does not
    /// form a valid span is passed through as text.
    pub fn render(&self, text: &str) -> String {
        self.render_level(text, 0)
    }

    fn openers(&self, text: &str) -> Vec<Occurrence<'a>> {
        scan(text, self.table, Direction::Forward)
            .into_iter()
            .filter(|o| can_open(text, o))
            .collect()
    }

    fn closers(&self, text: &str) -> Vec<Occurrence<'a>> {
        scan(text, self.table, Direction::Backward)
            .into_iter()
            .filter(|o| can_close(text, o))
            .collect()
    }

    fn render_level(&self, text: &str, depth: usize) -> String {
        if depth >= self.max_depth {
            log::warn!(
                "Nesting depth limit of {} reached, emitting {} bytes as text",
                self.max_depth,
                text.len()
            );
            return unescape(text, self.table);
        }

        let openers = self.openers(text);
        let closers = self.closers(text);

        log::trace!(
            "Rendering level {}: {} openers, {} closers in {:?}",
            depth,
            openers.len(),
            closers.len(),
            text
        );

        if openers.is_empty() || closers.is_empty() {
            return unescape(text, self.table);
        }

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..openers[0].position]);

        let mut idx = 0;
        while let Some(opener) = openers.get(idx) {
            match find_closer(opener, &closers) {
                Some(span) => {
                    self.push_span(&mut out, text, &span, depth);

                    idx = next_opener_index(&openers, span.end());
                    let gap_end = openers.get(idx).map_or(text.len(), |o| o.position);
                    out.push_str(&text[span.end()..gap_end]);
                }
                None => {
                    log::debug!(
                        "Unmatched opener {:?} at byte {}",
                        opener.token(),
                        opener.position
                    );

                    idx += 1;
                    let literal_end = openers.get(idx).map_or(text.len(), |o| o.position);
                    out.push_str(&text[opener.position..literal_end]);
                }
            }
        }

        unescape(&out, self.table)
    }

    fn push_span(&self, out: &mut String, text: &str, span: &Span<'_>, depth: usize) {
        let delimiter = span.opener.delimiter;
        let inner = &text[span.content_range()];

        let content = if delimiter.opaque {
            normalize_line_breaks(inner)
        } else {
            normalize_line_breaks(&self.render_level(inner, depth + 1))
        };

        out.push('<');
        out.push_str(&delimiter.tag);
        out.push('>');
        out.push_str(&content);
        out.push_str("</");
        out.push_str(&delimiter.tag);
        out.push('>');
    }
}

/// Render `text` with the default depth limit.
pub fn render(text: &str, table: &DelimiterTable) -> String {
    Renderer::new(table).render(text)
}

/// A delimiter candidate together with its eligibility for the role implied
/// by its scan direction (opener for forward, closer for backward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub occurrence: Occurrence<'a>,
    pub direction: Direction,
    pub eligible: bool,
}

impl Candidate<'_> {
    pub fn role(&self) -> &'static str {
        match (self.direction, self.eligible) {
            (Direction::Forward, true) => "opener",
            (Direction::Backward, true) => "closer",
            (_, false) => "literal",
        }
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}\t{:?}\t{}\t{}",
            self.occurrence.position,
            self.occurrence.end(),
            self.occurrence.token(),
            self.direction,
            self.role()
        )
    }
}

/// All top-level delimiter candidates of `text`, ordered by position with
/// forward candidates before backward ones at the same offset.
pub fn analyze<'a>(text: &str, table: &'a DelimiterTable) -> Vec<Candidate<'a>> {
    let forward = scan(text, table, Direction::Forward)
        .into_iter()
        .map(|occurrence| Candidate {
            occurrence,
            direction: Direction::Forward,
            eligible: can_open(text, &occurrence),
        });
    let backward = scan(text, table, Direction::Backward)
        .into_iter()
        .map(|occurrence| Candidate {
            occurrence,
            direction: Direction::Backward,
            eligible: can_close(text, &occurrence),
        });

    let mut candidates: Vec<Candidate<'a>> = forward.chain(backward).collect();
    candidates.sort_by_key(|c| {
        (
            c.occurrence.position,
            c.direction == Direction::Backward,
        )
    });
    candidates
}
