//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use super::load_config;
use wikistrip::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default config file.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
