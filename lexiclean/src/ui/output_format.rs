// lexiclean/src/ui/output_format.rs
//! Coloured status messages on stderr.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
}

/// Writes `message` with a kind prefix, coloured when `supports_color` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    message: &str,
    supports_color: bool,
) -> Result<()> {
    let line = match (kind, supports_color) {
        (MessageKind::Info, true) => format!("{}", message.cyan()),
        (MessageKind::Warn, true) => format!("{} {}", "Warning:".yellow().bold(), message.yellow()),
        (MessageKind::Error, true) => format!("{} {}", "Error:".red().bold(), message.red()),
        (MessageKind::Info, false) => message.to_string(),
        (MessageKind::Warn, false) => format!("Warning: {}", message),
        (MessageKind::Error, false) => format!("Error: {}", message),
    };
    writeln!(writer, "{}", line)?;
    Ok(())
}

pub fn info_msg(message: impl AsRef<str>) {
    to_stderr(MessageKind::Info, message.as_ref());
}

pub fn warn_msg(message: impl AsRef<str>) {
    to_stderr(MessageKind::Warn, message.as_ref());
}

pub fn error_msg(message: impl AsRef<str>) {
    to_stderr(MessageKind::Error, message.as_ref());
}

fn to_stderr(kind: MessageKind, message: &str) {
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    let _ = print_message(&mut stderr.lock(), kind, message, supports_color);
}
