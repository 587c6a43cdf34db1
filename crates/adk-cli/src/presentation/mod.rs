//! Shared CLI presentation utilities.
//!
//! Format-only helpers; compatibility decisions live in adk-core.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::CliError;

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    write_json(&mut io::stdout().lock(), value)
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

/// Print already-rendered text on stdout.
///
/// A closed pipe (`adk query cann | head -1`) is an IO error, not a panic.
pub fn print_text(text: &str) -> Result<(), CliError> {
    write_text(&mut io::stdout().lock(), text)
}

pub fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render an error message followed by its suggestions.
pub fn format_error(message: &str, suggestions: &[String]) -> String {
    let mut out = format!("{RED}Error:{RESET} {message}");
    if !suggestions.is_empty() {
        out.push_str("\n\nSuggestions:");
        for suggestion in suggestions {
            out.push_str("\n  - ");
            out.push_str(suggestion);
        }
    }
    out
}

pub fn print_error(message: &str, suggestions: &[String]) {
    eprintln!("{}", format_error(message, suggestions));
}

/// Join a list for display, or a placeholder when empty.
pub fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Format an optional value, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}
