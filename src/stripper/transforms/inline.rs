//! Link, emphasis, template and line markup rewriting.

use super::{converge, Transform};
use crate::stripper::pattern::{apply_all, Pattern};

/// Unwraps links and emphasis and deletes the remaining inline markup.
///
/// Every pass runs all extraction patterns first, then all deletion patterns.
/// None of the patterns allow their own delimiter inside a match, so nested
/// markup resolves one level per pass, innermost first, and the loop repeats
/// until a pass changes nothing.
pub struct InlineRewriter {
    extraction: Vec<Pattern>,
    deletion: Vec<Pattern>,
    max_passes: Option<usize>,
}

impl InlineRewriter {
    pub fn new(
        extraction: Vec<Pattern>,
        deletion: Vec<Pattern>,
        max_passes: Option<usize>,
    ) -> Self {
        Self {
            extraction,
            deletion,
            max_passes,
        }
    }

    /// Rewrite inline markup to a fixed point, returning the pass count.
    pub fn rewrite(&self, text: &mut String) -> usize {
        converge("inline", self.max_passes, text, |text| {
            apply_all(&self.extraction, text);
            apply_all(&self.deletion, text);
        })
    }
}

impl Transform for InlineRewriter {
    fn transform(&self, text: &mut String) {
        self.rewrite(text);
    }
}
