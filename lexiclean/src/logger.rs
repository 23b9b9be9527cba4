// lexiclean/src/logger.rs
//! Logger setup for the CLI.
//!
//! `RUST_LOG` is honoured unless an explicit level is passed, which is how
//! `--quiet` and `--debug` take precedence over the environment.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` on stderr. Safe to call more than once; later
/// calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false);

    let _ = builder.try_init();
}
