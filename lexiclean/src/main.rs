// lexiclean/src/main.rs
//! Lexiclean entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use lexiclean::cli::{Cli, Commands};
use lexiclean::commands::sanitize::{run_sanitize, SanitizeOptions};
use lexiclean::commands::stats::run_stats;
use lexiclean::commands::variants::run_variants;
use lexiclean::logger;
use lexiclean::ui::output_format::error_msg;

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Sanitize(cmd) => {
            let opts = SanitizeOptions::from_command(cmd, cli.quiet)?;
            run_sanitize(opts).await?;
        }
        Commands::Stats(cmd) => run_stats(cmd, cli.quiet)?,
        Commands::Variants => run_variants(&mut io::stdout().lock())?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
