use crate::{GlobalOptions, OutputFormat, GLOBAL_OPTS};
use colored::*;
use serde::Serialize;
use std::io;

fn global_opts() -> io::Result<&'static GlobalOptions> {
    GLOBAL_OPTS
        .get()
        .ok_or_else(|| io::Error::other("Global options not initialized"))
}

/// Whether results should be written as JSON
pub fn is_json() -> bool {
    GLOBAL_OPTS
        .get()
        .is_some_and(|opts| opts.output == OutputFormat::Json)
}

/// Print JSON output
pub fn print_json<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print a status line to stderr unless quiet
pub fn status(message: &str) -> Result<(), io::Error> {
    let opts = global_opts()?;

    if !opts.quiet && opts.output == OutputFormat::Text {
        if use_color() {
            eprintln!("{} {}", "✓".green(), message);
        } else {
            eprintln!("{}", message);
        }
    }
    Ok(())
}

/// Print verbose message (only if verbose mode is on)
pub fn verbose_println(level: u8, message: &str) {
    if let Some(opts) = GLOBAL_OPTS.get() {
        if !opts.quiet && opts.verbose >= level {
            eprintln!("{} {}", "[VERBOSE]".dimmed(), message);
        }
    }
}

/// Check if we should use color
pub fn use_color() -> bool {
    GLOBAL_OPTS
        .get()
        .is_some_and(|opts| !opts.no_color && opts.output == OutputFormat::Text)
}
