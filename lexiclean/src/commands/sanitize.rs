// lexiclean/src/commands/sanitize.rs
//! `lexiclean sanitize`: replaces flagged words and prints the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use lexiclean_core::{
    DetachedProgress, EngineConfig, HighlightMarkup, ReplacementEngine, SanitizationEngine,
    TextStatistics,
};

use crate::cli::SanitizeCommand;
use crate::commands::{read_input, resolve_config, warn_on_variant_fallback};
use crate::ui::output_format::info_msg;
use crate::ui::summary;

/// Options for [`run_sanitize`], resolved from the command line.
pub struct SanitizeOptions {
    pub config: EngineConfig,
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

impl SanitizeOptions {
    pub fn from_command(cmd: &SanitizeCommand, quiet: bool) -> Result<Self> {
        let mut config = resolve_config(&cmd.dictionary)?;
        if cmd.plain {
            config.highlight = HighlightMarkup::none();
        }
        if cmd.seed.is_some() {
            config.seed = cmd.seed;
        }

        Ok(Self {
            config,
            input: read_input(cmd.dictionary.input_file.as_deref())?,
            output_path: cmd.output.clone(),
            no_summary: cmd.no_summary,
            quiet,
        })
    }
}

/// Logs progress at every tenth of the input.
fn progress_logger() -> DetachedProgress {
    let mut next_report = 0.1;
    Box::new(move |fraction: f64| -> anyhow::Result<()> {
        if fraction >= next_report {
            debug!("Sanitization progress: {:.0}%", fraction * 100.0);
            while next_report <= fraction {
                next_report += 0.1;
            }
        }
        Ok(())
    })
}

pub async fn run_sanitize(opts: SanitizeOptions) -> Result<TextStatistics> {
    info!("Starting sanitize operation.");

    let engine = ReplacementEngine::from_config(&opts.config);
    engine
        .load(&opts.config.dictionary.variant)
        .with_context(|| format!("Failed to load dictionary '{}'", opts.config.dictionary.variant))?;
    warn_on_variant_fallback(&opts.config.dictionary.variant, &engine.active_variant(), opts.quiet);
    debug!("Dictionary '{}' ready.", engine.active_variant());

    let (sanitized, stats) = Arc::new(engine)
        .process_detached(opts.input.clone(), Some(progress_logger()))
        .await
        .context("Sanitization failed")?;

    write_primary_output(&opts, &sanitized)?;

    if !opts.no_summary && !opts.quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        summary::print_summary(&stats, &mut stderr.lock(), supports_color)?;
    }

    info!("Sanitize operation completed.");
    Ok(stats)
}

fn write_primary_output(opts: &SanitizeOptions, sanitized: &str) -> Result<()> {
    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing sanitized content to file: {}", path.display()));
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", sanitized)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", sanitized)?;
        }
    }
    Ok(())
}
