//! Inclusive code point ranges for the unicode filter.

use super::ConfigError;

const MAX_CODE_POINT: u32 = 0x10FFFF;
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A closed interval `[start, end]` of Unicode code points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Range {
    start: u32,
    end: u32,
}

impl Range {
    /// Create a range, rejecting inverted bounds and values past U+10FFFF.
    pub fn new(start: u32, end: u32) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvertedRange { start, end });
        }
        if end > MAX_CODE_POINT {
            return Err(ConfigError::OutOfUnicode { value: end });
        }
        Ok(Self { start, end })
    }

    /// Regex character class items covering this range (without brackets).
    ///
    /// Surrogates cannot occur in a `str`, so they are split out of the
    /// class; a range made only of surrogates yields an empty string.
    pub(crate) fn class_items(&self) -> String {
        let mut items = String::new();
        let low = (self.start, self.end.min(SURROGATE_START - 1));
        let high = (self.start.max(SURROGATE_END + 1), self.end);
        for (start, end) in [low, high] {
            if start <= end {
                items.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", start, end));
            }
        }
        items
    }
}

impl TryFrom<(u32, u32)> for Range {
    type Error = ConfigError;

    fn try_from((start, end): (u32, u32)) -> Result<Self, Self::Error> {
        Range::new(start, end)
    }
}

/// Validate a list of `(start, end)` pairs.
pub fn parse_ranges(pairs: &[(u32, u32)]) -> Result<Vec<Range>, ConfigError> {
    pairs.iter().copied().map(Range::try_from).collect()
}
