//! The table of recognized delimiter tokens and the HTML tags they render to.
//!
//! The table is immutable once built and is shared by reference with every
//! level of the recursive renderer.

/// A single delimiter definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    /// Literal token, e.g. `_` or `__`
    pub token: String,
    /// Tag name used for the rendered element, e.g. `em`
    pub tag: String,
    /// Content between opaque delimiters is never interpreted (code spans)
    pub opaque: bool,
}

impl Delimiter {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
            opaque: false,
        }
    }

    pub fn opaque(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            opaque: true,
            ..Self::new(token, tag)
        }
    }

    /// Byte length of the token.
    pub fn token_len(&self) -> usize {
        self.token.len()
    }
}

/// Delimiters ordered longest token first, so `__` is always tried before `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterTable {
    entries: Vec<Delimiter>,
}

impl DelimiterTable {
    /// Build a table from delimiter definitions.
    ///
    /// Empty tokens are dropped. When a token appears more than once, the last
    /// definition wins.
    pub fn new<I>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = Delimiter>,
    {
        let mut entries: Vec<Delimiter> = Vec::new();

        for delim in delimiters {
            if delim.token.is_empty() {
                log::warn!("Ignoring delimiter with empty token (tag <{}>)", delim.tag);
                continue;
            }

            match entries.iter_mut().find(|d| d.token == delim.token) {
                Some(existing) => {
                    log::debug!("Delimiter {:?} redefined as <{}>", delim.token, delim.tag);
                    *existing = delim;
                }
                None => entries.push(delim),
            }
        }

        entries.sort_by(|a, b| {
            b.token_len()
                .cmp(&a.token_len())
                .then_with(|| a.token.cmp(&b.token))
        });

        Self { entries }
    }

    /// Look up the definition for an exact token.
    pub fn get(&self, token: &str) -> Option<&Delimiter> {
        self.entries.iter().find(|d| d.token == token)
    }

    /// Iterate over definitions, longest token first.
    pub fn iter(&self) -> impl Iterator<Item = &Delimiter> {
        self.entries.iter()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DelimiterTable {
    /// `_` → `em`, `__` → `strong`, `` ` `` → `code` (opaque).
    fn default() -> Self {
        Self::new([
            Delimiter::new("_", "em"),
            Delimiter::new("__", "strong"),
            Delimiter::opaque("`", "code"),
        ])
    }
}

impl<'a> IntoIterator for &'a DelimiterTable {
    type Item = &'a Delimiter;
    type IntoIter = std::slice::Iter<'a, Delimiter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_longest_first() {
        let table = DelimiterTable::default();
        let tokens: Vec<&str> = table.tokens().collect();
        assert_eq!(tokens, vec!["__", "_", "`"]);
    }

    #[test]
    fn test_default_table_tags() {
        let table = DelimiterTable::default();
        assert_eq!(table.get("_").unwrap().tag, "em");
        assert_eq!(table.get("__").unwrap().tag, "strong");

        let code = table.get("`").unwrap();
        assert_eq!(code.tag, "code");
        assert!(code.opaque);
        assert!(!table.get("_").unwrap().opaque);
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let table = DelimiterTable::new([Delimiter::new("", "em"), Delimiter::new("*", "em")]);
        assert_eq!(table.len(), 1);
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_duplicate_token_last_wins() {
        let table = DelimiterTable::new([Delimiter::new("*", "em"), Delimiter::new("*", "b")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("*").unwrap().tag, "b");
    }

    #[test]
    fn test_borrowed_iteration_follows_scan_order() {
        let table = DelimiterTable::new([Delimiter::new("*", "em"), Delimiter::new("**", "b")]);
        let mut seen = Vec::new();
        for delimiter in &table {
            seen.push((delimiter.token.as_str(), delimiter.tag.as_str()));
        }
        assert_eq!(seen, vec![("**", "b"), ("*", "em")]);
    }

    #[test]
    fn test_unknown_token() {
        let table = DelimiterTable::default();
        assert!(table.get("~").is_none());
        assert!(!table.is_empty());
    }
}
