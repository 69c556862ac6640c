//! Terminal output utilities
//!
//! Human output goes to stdout, diagnostics to stderr.

use cookbook_core::Error;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a dimmed detail line under a header
    pub fn detail(message: &str) {
        println!("  {}", message.dimmed());
    }
}

/// One `label  value` row, labels padded to `width` characters.
///
/// Rows without a value show a dash so the column stays readable.
pub fn format_row(label: &str, value: Option<&str>, width: usize) -> String {
    format!("{:<width$}  {}", label, value.unwrap_or("-"), width = width)
}

/// Width of the widest label, for [`format_row`].
pub fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels
        .into_iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Print an application error with its context and suggestion.
pub fn print_error(err: &Error) {
    eprintln!("{} {} {}", "✗".red(), err.code.to_string().red().bold(), err.message);
    if let Some(context) = &err.context {
        eprintln!("  {} {}", "context:".dimmed(), context);
    }
    if let Some(suggestion) = &err.suggestion {
        eprintln!("  {} {}", "hint:".cyan(), suggestion);
    }
}

/// An application error as a pretty JSON report.
pub fn error_report_json(err: &Error) -> String {
    serde_json::to_string_pretty(&err.to_report()).unwrap_or_else(|_| {
        serde_json::json!({ "code_str": err.code.to_string(), "message": err.message }).to_string()
    })
}

/// Print an application error as a JSON report on stderr.
pub fn print_error_report(err: &Error) {
    eprintln!("{}", error_report_json(err));
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
