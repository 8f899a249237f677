//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output. Colors are only emitted
//! when the target stream supports them, so piped output stays plain.

use clap::ValueEnum;
use grocer_core::Error;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// True for machine-readable output
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!(
            "{} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            message
        );
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!(
            "{} {}",
            "✗".if_supports_color(Stream::Stderr, |t| t.red()),
            message
        );
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!(
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
            message
        );
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!(
            "{} {}",
            "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()),
            message
        );
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a subheader
    pub fn subheader(message: &str) {
        println!();
        println!(
            "{}",
            message.if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }

    /// Dim secondary text, e.g. ids next to names
    pub fn dim(text: &str) -> String {
        text.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> grocer_core::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Report an error on stderr in the requested format
pub fn report_error(error: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&error.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => Status::error(&error.to_string()),
        },
        OutputFormat::Text => {
            Status::error(&format!("{} {}", error.code, error.message));
            if let Some(context) = &error.context {
                eprintln!("  {}", context);
            }
            if let Some(suggestion) = &error.suggestion {
                eprintln!("  hint: {}", suggestion);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
        assert!(!OutputFormat::default().is_json());
    }

    #[test]
    fn test_dim_keeps_text() {
        assert!(Status::dim("p6").contains("p6"));
    }
}
