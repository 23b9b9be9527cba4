// lexiclean/src/commands/stats.rs
//! `lexiclean stats`: measures a text without printing the sanitized copy.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::fs;
use std::io::{self, Write};

use lexiclean_core::{HighlightMarkup, ReplacementEngine, SanitizationEngine, TextStatistics};

use crate::cli::StatsCommand;
use crate::commands::{read_input, resolve_config, warn_on_variant_fallback};
use crate::ui::output_format::info_msg;
use crate::ui::summary;

/// Runs the engine over the input and returns only its statistics.
pub fn collect_stats(cmd: &StatsCommand, quiet: bool) -> Result<TextStatistics> {
    let mut config = resolve_config(&cmd.dictionary)?;
    config.highlight = HighlightMarkup::none();
    let input = read_input(cmd.dictionary.input_file.as_deref())?;

    let engine = ReplacementEngine::from_config(&config);
    engine
        .load(&config.dictionary.variant)
        .with_context(|| format!("Failed to load dictionary '{}'", config.dictionary.variant))?;
    warn_on_variant_fallback(&config.dictionary.variant, &engine.active_variant(), quiet);

    let (_, stats) = engine.process(&input, None).context("Statistics collection failed")?;
    Ok(stats)
}

pub fn run_stats(cmd: &StatsCommand, quiet: bool) -> Result<()> {
    info!("Starting stats operation.");
    let stats = collect_stats(cmd, quiet)?;

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&stats)?;
        writeln!(io::stdout().lock(), "{}", json)?;
    } else if let Some(path) = &cmd.json_file {
        let json = serde_json::to_string_pretty(&stats)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
        if !quiet {
            info_msg(format!("Statistics written to {}", path.display()));
        }
    } else {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        summary::print_summary(&stats, &mut stderr.lock(), supports_color)?;
    }

    info!("Stats operation completed.");
    Ok(())
}
