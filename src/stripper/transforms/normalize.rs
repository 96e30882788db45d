//! Whitespace normalization.

use super::Transform;
use crate::stripper::pattern::Pattern;
use crate::stripper::ConfigError;

/// `\s` plus the information separators U+001C..U+001F, which also split
/// words in plain text.
const WHITESPACE_RUN: &str = r"(?P<text>[\s\x{1C}-\x{1F}])[\s\x{1C}-\x{1F}]*";

/// Collapses each run of whitespace to its first character.
///
/// Keeping the first character rather than a fixed space means a run that
/// starts with a newline still reads as a line break.
pub struct NormalizeWhitespace {
    pattern: Pattern,
}

impl NormalizeWhitespace {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: Pattern::extraction("whitespace_run", WHITESPACE_RUN)?,
        })
    }
}

impl Transform for NormalizeWhitespace {
    fn transform(&self, text: &mut String) {
        self.pattern.apply_in_place(text);
    }
}
