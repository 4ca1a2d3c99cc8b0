//! CLI module for tablecols
//!
//! ## Commands
//!
//! - `columns <schema.json>` - Print the column descriptors for a JSON schema description
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::Error> for CliError {
    fn from(err: crate::Error) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Map a schema description to table column descriptors
#[derive(Parser, Debug)]
#[command(name = "tablecols")]
#[command(version = VERSION)]
#[command(about = "Map a schema description to table column descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the column descriptors for a JSON schema description
    Columns(ColumnsArgs),
}

/// Arguments of the `columns` command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ColumnsArgs {
    /// JSON array of field descriptions (`-` reads stdin)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
    /// Drop annotation values equal to the widget defaults
    #[arg(long)]
    pub elide_defaults: bool,
    /// Prefer the declared serialization name over annotation `data`
    #[arg(long)]
    pub prefer_serialized_name: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("error: {}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its stdout payload.
pub fn execute(cli: Cli) -> CliResult<String> {
    match cli.command {
        Command::Columns(args) => commands::columns(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_columns_flags() {
        let cli = Cli::try_parse_from(["tablecols", "columns", "schema.json", "--pretty", "--elide-defaults"]).unwrap();
        let Command::Columns(args) = cli.command;

        assert_eq!(args.schema, PathBuf::from("schema.json"));
        assert!(args.pretty);
        assert!(args.elide_defaults);
        assert!(!args.prefer_serialized_name);
    }

    #[test]
    fn missing_schema_is_rejected() {
        assert!(Cli::try_parse_from(["tablecols", "columns"]).is_err());
    }

    #[test]
    fn library_errors_become_failures() {
        let err: CliError = crate::Error::Io(std::io::Error::other("boom")).into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
