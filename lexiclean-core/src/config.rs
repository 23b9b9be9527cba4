//! Configuration management for `lexiclean-core`.
//!
//! This module defines the engine configuration: which dictionary variant to
//! load and from where, the tags replacements are wrapped in, and an
//! optional seed for reproducible selection. Configurations are YAML and can be
//! loaded from a file, from the embedded defaults, or discovered in the usual
//! per-user locations.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dictionary::DictionaryVariant;
use crate::markup::HighlightMarkup;

/// Where the dictionary comes from and which variant to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Variant name, e.g. "default" or "buzzwords". Unknown names load "default".
    pub variant: String,
    /// Directory holding `<resource>.json|yaml|yml` files. Embedded dictionaries when unset.
    pub directory: Option<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            variant: DictionaryVariant::Default.as_str().to_string(),
            directory: None,
        }
    }
}

/// Top-level configuration for a `ReplacementEngine`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dictionary: DictionaryConfig,
    pub highlight: HighlightMarkup,
    /// Seed for reproducible replacement selection.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EngineConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: EngineConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Loads the first configuration found in [`config_candidate_paths`],
    /// falling back to the embedded defaults.
    pub fn discover() -> Result<Self> {
        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("No configuration file found in candidate locations.");
                Self::load_default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let variant = self.dictionary.variant.trim();
        if variant.is_empty() {
            errors.push("`dictionary.variant` cannot be empty.".to_string());
        } else if !DictionaryVariant::all()
            .iter()
            .any(|v| v.as_str().eq_ignore_ascii_case(variant))
        {
            warn!(
                "Dictionary variant '{}' is not a known variant; '{}' will be loaded.",
                variant,
                DictionaryVariant::Default
            );
        }

        if let Some(dir) = &self.dictionary.directory {
            if !dir.is_dir() {
                errors.push(format!(
                    "`dictionary.directory` '{}' is not a directory.",
                    dir.display()
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Locations searched by [`EngineConfig::discover`], in priority order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    vec![
        dirs::home_dir().map(|p| p.join(".lexiclean").join("config.yaml")),
        dirs::config_dir().map(|p| p.join("lexiclean").join("config.yaml")),
        Some(PathBuf::from("./config/lexiclean.yaml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}
