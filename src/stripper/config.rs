//! Configuration for the stripping pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the stripping pipeline.
///
/// Ranges are inclusive `(start, end)` code point pairs. Characters inside an
/// invalid range are removed even when a valid range also covers them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripperConfig {
    /// Only characters inside one of these ranges survive (empty: keep all)
    pub valid_unicodes: Vec<(u32, u32)>,
    /// Characters inside any of these ranges are removed
    pub invalid_unicodes: Vec<(u32, u32)>,
    /// Keep list item text instead of dropping whole list lines
    pub preserve_lists: bool,
    /// Upper bound on passes of each fixed-point loop (none: run to convergence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl StripperConfig {
    /// Restrict output to the given ranges.
    pub fn with_valid_unicodes(mut self, ranges: impl Into<Vec<(u32, u32)>>) -> Self {
        self.valid_unicodes = ranges.into();
        self
    }

    /// Carve the given ranges out of the output.
    pub fn with_invalid_unicodes(mut self, ranges: impl Into<Vec<(u32, u32)>>) -> Self {
        self.invalid_unicodes = ranges.into();
        self
    }

    pub fn with_preserve_lists(mut self, preserve_lists: bool) -> Self {
        self.preserve_lists = preserve_lists;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}
