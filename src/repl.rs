//! Line-at-a-time read/eval/print loop
//!
//! Where output goes depends on whether stdin and stdout are terminals:
//! - the `> ` prompt goes to stderr, only for terminal input
//! - when either side is redirected, each command is echoed to stdout so
//!   a transcript reads like the session did
//! - error messages go to stderr when a person is watching, and also to
//!   stdout whenever stdout is redirected

use crate::error::ReplError;
use crate::lexer::compact_line;
use crate::parser::parse_command;
use crate::registers::Registers;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "> ";
const FAREWELL: &str = "ta daa!!!";

/// Which of the standard streams are attached to a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub input: bool,
    pub output: bool,
}

impl Terminal {
    /// Whether commands should be echoed back to stdout.
    fn echoes(self) -> bool {
        !self.input || !self.output
    }
}

pub struct Repl<R, W, E> {
    input: R,
    out: W,
    err: E,
    terminal: Terminal,
    registers: Registers,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(input: R, out: W, err: E, terminal: Terminal) -> Self {
        Repl {
            input,
            out,
            err,
            terminal,
            registers: Registers::new(),
        }
    }

    /// Process every line until end of input. A fatal arithmetic error
    /// is reported here and then handed back so the caller can stop.
    pub fn run(&mut self) -> Result<(), ReplError> {
        info!(terminal = ?self.terminal, "session started");
        let mut lines = 0usize;

        self.prompt()?;
        while let Some(line) = self.read_line()? {
            if !line.is_empty() {
                lines += 1;
                if let Err(err) = self.process_line(&line) {
                    if let ReplError::Fatal(fatal) = &err {
                        self.report(&fatal.to_string())?;
                    }
                    self.out.flush()?;
                    return Err(err);
                }
            }
            self.prompt()?;
        }

        info!(lines, "end of input");
        self.finish()
    }

    fn prompt(&mut self) -> Result<(), ReplError> {
        if self.terminal.input {
            write!(self.err, "{}", PROMPT)?;
            self.err.flush()?;
        }
        Ok(())
    }

    /// Next line with all whitespace removed, or `None` at end of input.
    /// A last line without a newline still counts. The empty read at end
    /// of input is echoed too, so a transcript ends with a bare prompt.
    fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        let mut raw = Vec::new();
        let at_end = self.input.read_until(b'\n', &mut raw)? == 0;

        let line = compact_line(&String::from_utf8_lossy(&raw));
        if self.terminal.echoes() {
            writeln!(self.out, "{}{}", PROMPT, line)?;
        }

        if at_end {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn process_line(&mut self, line: &str) -> Result<(), ReplError> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line, "bad command");
                return self.report(&err.to_string());
            }
        };

        if let Some(text) = self.registers.execute(&command)? {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn report(&mut self, message: &str) -> Result<(), ReplError> {
        if self.terminal.input || self.terminal.output {
            writeln!(self.err, "{}", message)?;
            self.err.flush()?;
        }
        if !self.terminal.output {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReplError> {
        if self.terminal.input && self.terminal.output {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", FAREWELL)?;
        if self.terminal.input && !self.terminal.output {
            writeln!(self.err)?;
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }
}
