//! Subcommand handlers.

pub mod config;
pub mod strip;

use std::path::Path;

use anyhow::Result;
use wikistrip::Config;

/// Load the config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
