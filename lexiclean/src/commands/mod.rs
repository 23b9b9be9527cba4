// lexiclean/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod sanitize;
pub mod stats;
pub mod variants;

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use lexiclean_core::EngineConfig;

use crate::cli::DictionaryArgs;
use crate::ui::output_format::warn_msg;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the engine configuration: `--config` if given, otherwise the first
/// discovered config file or the embedded defaults, then command line overrides.
pub fn resolve_config(args: &DictionaryArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::discover()?,
    };

    if let Some(variant) = &args.variant {
        config.dictionary.variant = variant.clone();
    }
    if let Some(dir) = &args.dictionary_dir {
        config.dictionary.directory = Some(dir.clone());
    }
    debug!(
        "Resolved dictionary variant '{}' from {}",
        config.dictionary.variant,
        config
            .dictionary
            .directory
            .as_ref()
            .map_or_else(|| "embedded resources".to_string(), |d| d.display().to_string())
    );
    Ok(config)
}

/// Warns when the loaded variant is not the one that was asked for, which
/// happens when an unknown name falls back to the default dictionary.
pub fn warn_on_variant_fallback(requested: &str, active: &str, quiet: bool) {
    if !quiet && !requested.trim().eq_ignore_ascii_case(active) {
        warn_msg(format!(
            "Unknown dictionary variant '{}'; using '{}' instead.",
            requested, active
        ));
    }
}
