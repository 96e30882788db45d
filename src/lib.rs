//! Wikistrip - turns wiki article source into plain text.
//!
//! The core is [`WikiStripper`]: build it once from a [`StripperConfig`] and
//! call [`WikiStripper::strip`] for every document.

pub mod cli;
pub mod config;
pub mod decode;
pub mod stripper;

pub use config::Config;
pub use decode::{Decoder, Utf8Decoder};
pub use stripper::{ConfigError, Range, StripperConfig, WikiStripper};
