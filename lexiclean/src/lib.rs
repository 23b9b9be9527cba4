// lexiclean/src/lib.rs
//! # Lexiclean CLI Application
//!
//! Command line front-end for `lexiclean-core`: sanitizes text read from a file
//! or stdin, reports text statistics, and lists the available dictionaries.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
