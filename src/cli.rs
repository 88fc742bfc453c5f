// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `launchspec`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launchspec",
    version,
    about = "Load and validate launch descriptors for a process supervisor.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the descriptor file (TOML).
    ///
    /// Default: `Launchspec.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Launchspec.toml")]
    pub config: String,

    /// Load + validate only; exit 0 if the descriptor is well-formed.
    #[arg(long)]
    pub check: bool,

    /// Print every field of every app, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Run the named app in the foreground and exit with its exit code.
    #[arg(long, value_name = "NAME")]
    pub exec: Option<String>,

    /// Also require `script` and `cwd` paths to exist on this machine.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAUNCHSPEC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
