//! Parsed calculator commands

use std::fmt;

/// One of the 26 registers `a`..`z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(u8);

impl RegisterId {
    pub const COUNT: usize = 26;

    pub fn from_letter(ch: char) -> Option<RegisterId> {
        if ch.is_ascii_lowercase() {
            Some(RegisterId(ch as u8 - b'a'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn letter(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Right-hand side of an updating command
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// All-digit literal, kept as text until it is needed
    Literal(String),

    /// Current value of another (or the same) register
    Register(RegisterId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Assign,     // =
    Add,        // +
    Mul,        // *
    Pow,        // ^
    Div,        // /
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `a?`
    Print(RegisterId),

    /// `a<op><operand>`, result stored back into `target`
    Update {
        target: RegisterId,
        op: BinaryOp,
        operand: Operand,
    },
}
