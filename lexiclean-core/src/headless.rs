// File: lexiclean-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot use without managing an engine:
//! build from configuration, load the configured variant, process once.

use anyhow::{Context, Result};

use crate::config::EngineConfig;
use crate::engine::SanitizationEngine;
use crate::engines::replacement_engine::ReplacementEngine;
use crate::statistics::TextStatistics;

/// Sanitizes `content` with a freshly built engine.
///
/// # Arguments
///
/// * `config` - Engine configuration (dictionary location, variant, markup, seed).
/// * `content` - The text to sanitize.
pub fn headless_sanitize_string(
    config: &EngineConfig,
    content: &str,
) -> Result<(String, TextStatistics)> {
    let engine = ReplacementEngine::from_config(config);

    engine
        .load(&config.dictionary.variant)
        .with_context(|| format!("Failed to load dictionary '{}'", config.dictionary.variant))?;

    let result = engine.process(content, None).context("Text processing failed")?;
    Ok(result)
}
