//! Stripper construction errors.

/// Errors that can occur while building a [`WikiStripper`](super::WikiStripper).
///
/// Stripping itself never fails; every error surfaces at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid unicode range {start:#x}-{end:#x}: start is greater than end")]
    InvertedRange { start: u32, end: u32 },

    #[error("Invalid unicode range bound {value:#x}: beyond U+10FFFF")]
    OutOfUnicode { value: u32 },

    #[error("Invalid pass limit 0: max_iterations must be at least 1")]
    ZeroPassLimit,

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),
}
