//! Wiki markup stripping pipeline.
//!
//! Turns wiki article source into plain text. There is no markup parser here:
//! every construct is matched by a pattern that refuses to contain its own
//! delimiters, and nesting is handled by re-running the patterns until the
//! text stops changing.
//!
//! # Stages
//!
//! 1. [`StructuralEliminator`] - comments and tags, to a fixed point
//! 2. [`InlineRewriter`] - links and emphasis unwrapped, templates, headers,
//!    redirects and list lines deleted, to a fixed point
//! 3. [`UnicodeFilter`] - characters outside the configured ranges removed
//! 4. [`NormalizeWhitespace`] - whitespace runs collapsed, once
//!
//! # Module Structure
//!
//! - [`config`] - Pipeline configuration
//! - [`patterns`] - The ordered pattern tables
//! - [`transforms`] - Individual pipeline stages
//! - [`pipeline`] - [`WikiStripper`], which runs the stages in order

mod config;
mod error;
pub mod pattern;
mod patterns;
mod pipeline;
mod range;
mod transforms;

pub use config::StripperConfig;
pub use error::ConfigError;
pub use pattern::{Pattern, Replacement};
pub use patterns::PatternSet;
pub use pipeline::WikiStripper;
pub use range::{parse_ranges, Range};
pub use transforms::{
    InlineRewriter, NormalizeWhitespace, StructuralEliminator, Transform, UnicodeFilter,
};
