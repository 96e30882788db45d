//! Pipeline stages.
//!
//! Each stage rewrites the document in place. The two markup stages run their
//! patterns repeatedly until a pass leaves the text unchanged; the two final
//! stages run once.

mod inline;
mod normalize;
mod structural;
mod unicode;

pub use inline::InlineRewriter;
pub use normalize::NormalizeWhitespace;
pub use structural::StructuralEliminator;
pub use unicode::UnicodeFilter;

use tracing::{debug, warn};

/// A single stage of the stripping pipeline.
pub trait Transform: Send + Sync {
    fn transform(&self, text: &mut String);
}

/// Repeat `pass` until it stops changing `text`, or until `max_passes` runs.
///
/// Returns the number of passes made, including the final no-op pass.
pub(crate) fn converge<F>(
    stage: &'static str,
    max_passes: Option<usize>,
    text: &mut String,
    mut pass: F,
) -> usize
where
    F: FnMut(&mut String),
{
    let mut passes = 0;
    loop {
        let previous = text.clone();
        pass(text);
        passes += 1;

        if *text == previous {
            break;
        }
        if max_passes.is_some_and(|max| passes >= max) {
            warn!(stage, passes, "pass limit reached before markup converged");
            break;
        }
    }
    debug!(stage, passes, "converged");
    passes
}
