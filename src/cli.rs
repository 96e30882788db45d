//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::stripper::StripperConfig;

#[derive(Parser, Debug)]
#[command(name = "wikistrip", version, about = "Strip wiki markup down to plain text")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strip markup from article files, or from stdin when no files are given
    Strip(StripArgs),

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Default)]
pub struct StripArgs {
    /// Article source files
    pub files: Vec<PathBuf>,

    /// Keep only characters in this range, e.g. 0x20-0x7e (repeatable, replaces configured ranges)
    #[arg(long = "valid-range", value_name = "RANGE", value_parser = parse_range)]
    pub valid_ranges: Vec<(u32, u32)>,

    /// Remove characters in this range, e.g. 0x30-0x39 (repeatable, replaces configured ranges)
    #[arg(long = "invalid-range", value_name = "RANGE", value_parser = parse_range)]
    pub invalid_ranges: Vec<(u32, u32)>,

    /// Keep the text of list items instead of dropping list lines
    #[arg(long)]
    pub preserve_lists: bool,

    /// Stop each markup pass loop after N passes (at least 1)
    #[arg(long, value_name = "N", value_parser = parse_max_iterations)]
    pub max_iterations: Option<usize>,

    /// Write <name>.txt files into DIR instead of printing to stdout
    #[arg(long, short = 'o', value_name = "DIR", requires = "files")]
    pub output_dir: Option<PathBuf>,
}

impl StripArgs {
    /// Layer command-line overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut StripperConfig) {
        if !self.valid_ranges.is_empty() {
            config.valid_unicodes = self.valid_ranges.clone();
        }
        if !self.invalid_ranges.is_empty() {
            config.invalid_unicodes = self.invalid_ranges.clone();
        }
        if self.preserve_lists {
            config.preserve_lists = true;
        }
        if self.max_iterations.is_some() {
            config.max_iterations = self.max_iterations;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `START-END` (or a single code point) in decimal or `0x` hex.
pub fn parse_range(s: &str) -> Result<(u32, u32), String> {
    let (start, end) = match s.split_once('-') {
        Some((start, end)) => (start, end),
        None => (s, s),
    };
    let start = parse_code_point(start)?;
    let end = parse_code_point(end)?;
    if start > end {
        return Err(format!("range start {:#x} is greater than end {:#x}", start, end));
    }
    Ok((start, end))
}

/// Parse a pass limit; zero would never run a pass.
pub fn parse_max_iterations(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid pass count '{}'", s)),
    }
}

fn parse_code_point(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| format!("invalid code point '{}'", s))
}
