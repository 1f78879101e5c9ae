mod ast;
mod cli;
mod divide;
mod error;
mod lexer;
mod number;
mod parser;
mod power;
mod registers;
mod repl;
mod token;

use clap::Parser;
use cli::{Args, PromptMode};
use error::ReplError;
use repl::{Repl, Terminal};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn detect_terminal(args: &Args) -> Terminal {
    match args.prompt {
        PromptMode::Always => Terminal { input: true, output: true },
        PromptMode::Never => Terminal { input: false, output: false },
        PromptMode::Auto => Terminal {
            input: args.file.is_none() && io::stdin().is_terminal(),
            output: io::stdout().is_terminal(),
        },
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let terminal = detect_terminal(&args);
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = match &args.file {
        Some(path) => {
            let file = match File::open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path.display(), e);
                    process::exit(1);
                }
            };
            Repl::new(BufReader::new(file), stdout.lock(), stderr.lock(), terminal).run()
        }
        None => Repl::new(io::stdin().lock(), stdout.lock(), stderr.lock(), terminal).run(),
    };

    match result {
        Ok(()) => {}
        // already reported through the session's error channel
        Err(ReplError::Fatal(_)) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
