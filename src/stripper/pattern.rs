//! Rewrite rules: a compiled matcher paired with what replaces each match.

use std::borrow::Cow;

use fancy_regex::{Regex, RegexBuilder};
use tracing::warn;

use super::ConfigError;

/// Backtracking budget per search. The engine charges its scan across start
/// positions against this, so the default (1,000,000) trips on ~1 MB articles.
const BACKTRACK_LIMIT: usize = usize::MAX;

/// What a pattern substitutes for each match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the whole match with the empty string.
    Delete,
    /// Replace the whole match with its `text` capture (unwrap the markup).
    Extract,
}

impl Replacement {
    fn template(self) -> &'static str {
        match self {
            Replacement::Delete => "",
            Replacement::Extract => "${text}",
        }
    }
}

/// An ordered rewrite rule.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
    replacement: Replacement,
}

impl Pattern {
    /// Compile a pattern. Extraction patterns must define a `text` group.
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name,
            regex: RegexBuilder::new(pattern)
                .backtrack_limit(BACKTRACK_LIMIT)
                .build()?,
            replacement,
        })
    }

    pub fn deletion(name: &'static str, pattern: &str) -> Result<Self, ConfigError> {
        Self::new(name, pattern, Replacement::Delete)
    }

    pub fn extraction(name: &'static str, pattern: &str) -> Result<Self, ConfigError> {
        Self::new(name, pattern, Replacement::Extract)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// Substitute every non-overlapping match in `text`.
    ///
    /// If the backtracking engine gives up on an input, the text is returned
    /// unchanged: unmatched markup is left in place rather than reported.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.regex.try_replacen(text, 0, self.replacement.template()) {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    pattern = self.name,
                    error = %err,
                    "pattern failed to match, text left unchanged"
                );
                Cow::Borrowed(text)
            }
        }
    }

    /// Apply the pattern in place. Returns true if the text changed.
    pub fn apply_in_place(&self, text: &mut String) -> bool {
        match self.apply(text) {
            Cow::Borrowed(_) => false,
            Cow::Owned(result) => {
                let changed = result != *text;
                *text = result;
                changed
            }
        }
    }
}

/// Run patterns in order, each over the previous one's output.
pub fn apply_all(patterns: &[Pattern], text: &mut String) {
    for pattern in patterns {
        pattern.apply_in_place(text);
    }
}
