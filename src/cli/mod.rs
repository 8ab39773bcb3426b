//! CLI module for the docproxy generator
//!
//! ## Commands
//!
//! - `generate <manifest>` - Generate proxies (stdout, or files under `--out`)
//! - `plan <manifest> <type>` - Show which accessors a proxy would define
//! - `namespace <manifest> <type>` - Show the derived proxy namespace
//! - `marker` - Print the capability marker source
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

use crate::backend::Target;
use crate::version::DOCPROXY_VERSION;

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

    /// Render a diagnostic (code, message, help) as a failure.
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lazy-initialization proxy generator
#[derive(Parser, Debug)]
#[command(name = "docproxy")]
#[command(version = DOCPROXY_VERSION)]
#[command(about = "Generate lazy-initialization proxies for document types", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that builds a proxy.
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Output language
    #[arg(long, value_enum, default_value_t = Target::Php)]
    pub target: Target,
    /// Namespace segment proxies are placed under (default: `_Proxy` for php, `_proxy` for rust)
    #[arg(long, value_name = "SEGMENT")]
    pub segment: Option<String>,
    /// Fully qualified capability marker the proxies implement
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate proxy sources
    Generate {
        /// Type manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Only generate these types (default: every declared type)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,
        /// Write one file per proxy under this directory instead of printing
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Append the type's short name to the derived namespace
        #[arg(long)]
        with_name: bool,
        /// Fail if any generated file is missing or out of date, without writing
        #[arg(long, requires = "out")]
        check: bool,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Show the accessor plan of a type
    Plan {
        /// Type manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Declared type name
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Show the derived proxy namespace of a type
    Namespace {
        /// Type manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Declared type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Append the type's short name
        #[arg(long)]
        with_name: bool,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Print the capability marker source
    Marker {
        #[command(flatten)]
        generator: GeneratorArgs,
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            manifest,
            types,
            out,
            with_name,
            check,
            generator,
        } => {
            let config = commands::config(&generator, with_name);
            commands::generate(&manifest, &types, &config, out.as_deref(), check)
        }
        Command::Plan { manifest, type_name } => commands::plan(&manifest, &type_name),
        Command::Namespace {
            manifest,
            type_name,
            with_name,
            generator,
        } => commands::namespace(&manifest, &type_name, &commands::config(&generator, false), with_name),
        Command::Marker { generator } => commands::marker(&commands::config(&generator, false)),
    }
}

// ============================================================================
// Tests
// ============================================================================
