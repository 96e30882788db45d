//! Comment and tag removal.

use super::{converge, Transform};
use crate::stripper::pattern::{apply_all, Pattern};

/// Removes HTML comments, self-closing tags, and matched tag pairs.
///
/// A tag pair only matches when its body holds no other tag, so each pass
/// peels the innermost level of nesting. Unterminated comments and tags never
/// match and stay in the text.
pub struct StructuralEliminator {
    patterns: Vec<Pattern>,
    max_passes: Option<usize>,
}

impl StructuralEliminator {
    pub fn new(patterns: Vec<Pattern>, max_passes: Option<usize>) -> Self {
        Self {
            patterns,
            max_passes,
        }
    }

    /// Strip structural markup to a fixed point, returning the pass count.
    pub fn eliminate(&self, text: &mut String) -> usize {
        converge("structural", self.max_passes, text, |text| {
            apply_all(&self.patterns, text)
        })
    }
}

impl Transform for StructuralEliminator {
    fn transform(&self, text: &mut String) {
        self.eliminate(text);
    }
}
