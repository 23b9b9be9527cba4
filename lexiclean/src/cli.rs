// lexiclean/src/cli.rs
//! Command line interface definition for `lexiclean`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "lexiclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace flagged words and measure readability",
    long_about = "Lexiclean replaces profanity or corporate buzzwords with gentler alternatives taken from a dictionary, and reports word, sentence and paragraph counts, replacement density, reading time and a Flesch reading-ease score.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replaces flagged words in a file or stdin and prints the result.
    Sanitize(SanitizeCommand),

    /// Prints text statistics without the sanitized text.
    Stats(StatsCommand),

    /// Lists the built-in dictionary variants.
    Variants,
}

/// Options shared by commands that load a dictionary.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Dictionary variant to load (e.g. "default", "buzzwords").
    #[arg(long, value_name = "NAME", env = "LEXICLEAN_VARIANT")]
    pub variant: Option<String>,

    /// Directory holding dictionary files instead of the built-in ones.
    #[arg(long = "dictionary-dir", value_name = "DIR")]
    pub dictionary_dir: Option<PathBuf>,

    /// Path to an engine configuration file (YAML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `sanitize` command.
#[derive(clap::Args, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit replacements without highlight tags.
    #[arg(long)]
    pub plain: bool,

    /// Seed for reproducible replacement choices.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Do not print the statistics summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

/// Arguments for the `stats` command.
#[derive(clap::Args, Debug)]
pub struct StatsCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Export the statistics to a JSON file.
    #[arg(long = "json-file", value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Print the statistics to stdout as JSON.
    #[arg(long = "json-stdout", conflicts_with = "json_file")]
    pub json_stdout: bool,
}
