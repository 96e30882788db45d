//! Strip subcommand handler

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use super::load_config;
use wikistrip::cli::StripArgs;
use wikistrip::WikiStripper;

/// Strip every input and print or write the results.
///
/// Files are stripped in parallel against one shared stripper; output keeps
/// the order the files were given in.
pub fn handle(args: &StripArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?.stripper;
    args.apply_to(&mut config);
    let stripper = WikiStripper::new(config).context("Invalid stripper configuration")?;

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("Failed to read stdin")?;
        return write_stdout(&[stripper.strip_bytes(&input)]);
    }

    let outputs = match &args.output_dir {
        Some(dir) => Some((dir.as_path(), output_paths(dir, &args.files)?)),
        None => None,
    };

    debug!(files = args.files.len(), "stripping files");
    let texts: Vec<String> = args
        .files
        .par_iter()
        .map(|path| -> Result<String> {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(stripper.strip_bytes(&bytes))
        })
        .collect::<Result<_>>()?;

    match outputs {
        Some((dir, outputs)) => write_files(dir, &outputs, &texts),
        None => write_stdout(&texts),
    }
}

fn write_stdout(texts: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in texts {
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Output path for each input, failing if two inputs would share one.
fn output_paths(dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<OsString, &Path> = HashMap::new();
    let mut paths = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = output_name(input);
        if let Some(previous) = seen.insert(name.clone(), input) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                dir.join(&name).display()
            );
        }
        paths.push(dir.join(name));
    }
    Ok(paths)
}

fn write_files(dir: &Path, outputs: &[PathBuf], texts: &[String]) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (path, text) in outputs.iter().zip(texts) {
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(output = %path.display(), "wrote stripped text");
    }
    Ok(())
}

/// `articles/Rust.wiki` -> `Rust.txt`
fn output_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| OsString::from("article"));
    name.push(".txt");
    name
}
