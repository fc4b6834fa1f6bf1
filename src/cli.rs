// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `exitcheck`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exitcheck",
    version,
    about = "Spawn scripted child processes and verify how their exits are classified.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of child processes to spawn (minimum 1).
    #[arg(value_name = "COUNT", default_value_t = 1)]
    pub children: u32,

    /// Run as a scripted child with the given token.
    ///
    /// Internal re-exec contract; not meant to be invoked by hand.
    #[arg(long, value_name = "TOKEN")]
    pub child: Option<u32>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXITCHECK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Which role the executable plays, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Supervise `children` freshly spawned child processes.
    Parent { children: u32 },
    /// Behave as one scripted child identified by `token`.
    Child { token: u32 },
}

impl CliArgs {
    /// Resolve the run mode from the parsed flags.
    ///
    /// `--child` wins over the positional count; the count is coerced to a
    /// minimum of 1, so `exitcheck 0` still spawns one child.
    pub fn mode(&self) -> RunMode {
        match self.child {
            Some(token) => RunMode::Child { token },
            None => RunMode::Parent {
                children: self.children.max(1),
            },
        }
    }
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
