//! Command-line configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Register calculator over arbitrary-precision decimal integers
#[derive(Parser, Debug)]
#[command(name = "regcalc")]
#[command(about = "Arbitrary-precision integer calculator with registers a..z")]
pub struct Args {
    /// Read commands from FILE instead of standard input
    pub file: Option<PathBuf>,

    /// Whether to behave as an interactive session (prompt on stderr, no
    /// echo) or as a redirected one (echo every command to stdout)
    #[arg(long, value_enum, default_value_t = PromptMode::Auto)]
    pub prompt: PromptMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptMode {
    /// Detect terminals on stdin and stdout
    Auto,
    /// Treat both streams as terminals
    Always,
    /// Treat both streams as redirected
    Never,
}

impl Args {
    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
