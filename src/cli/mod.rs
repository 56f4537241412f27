//! CLI module for typehint
//!
//! ## Commands
//!
//! - `parse <HINT>...` - Parse hints and print their type trees
//! - `check <HINT>... [--file FILE]` - Validate hints, reporting every malformed one
//! - `lex <HINT>` - Print the token stream of a hint (debug)
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

use clap::{Parser, Subcommand};

use crate::render::{RenderConfig, RenderStyle};
use typehint_syntax::options::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, ParseOptions};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse and check generic type-name hints
#[derive(Parser, Debug)]
#[command(name = "typehint")]
#[command(version = VERSION)]
#[command(about = "Parse and check generic type-name hints such as mapping<UUID,set<Addr>>", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum nesting depth of `<...>` groups (at most 1024)
    #[arg(
        long,
        global = true,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_DEPTH_CEILING as u64)
    )]
    pub max_depth: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse hints and print their type trees
    Parse {
        /// Hints to parse
        #[arg(value_name = "HINT", required = true)]
        hints: Vec<String>,
        /// Output notation
        #[arg(long, value_enum, default_value_t = RenderStyle::Canonical)]
        style: RenderStyle,
        /// Spaces per level for `--style tree`
        #[arg(long = "indent", value_name = "N", default_value_t = 2)]
        indent_width: usize,
    },

    /// Validate hints, reporting every malformed one
    Check {
        /// Hints to validate
        #[arg(value_name = "HINT")]
        hints: Vec<String>,
        /// Also validate each non-blank line of this file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the token stream of a hint (debug)
    Lex {
        /// Hint to tokenize
        #[arg(value_name = "HINT")]
        hint: String,
    },
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
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = ParseOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Command::Parse {
            hints,
            style,
            indent_width,
        } => {
            let config = RenderConfig::new()
                .with_style(style)
                .with_indent_width(indent_width);
            commands::parse_hints(&hints, &options, &config)
        }
        Command::Check { hints, file } => commands::check_hints(hints, file.as_deref(), &options),
        Command::Lex { hint } => commands::lex_hint(&hint),
    }
}

// ============================================================================
// Tests
// ============================================================================
