//! Code point range filtering.

use super::Transform;
use crate::stripper::pattern::{apply_all, Pattern};

/// Removes characters outside the valid ranges, then characters inside the
/// invalid ranges. With no ranges configured it leaves the text alone.
pub struct UnicodeFilter {
    patterns: Vec<Pattern>,
}

impl UnicodeFilter {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

impl Transform for UnicodeFilter {
    fn transform(&self, text: &mut String) {
        apply_all(&self.patterns, text);
    }
}
