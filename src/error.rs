use thiserror::Error;

/// Conditions the arithmetic engine cannot represent. The driver reports
/// the message and terminates; nothing continues after one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fatal {
    #[error("Integer overflow, program terminated")]
    Overflow,
    #[error("Zero division error, please try again")]
    DivisionByZero,
}

/// Malformed command lines. Reported to the user, then the next line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid LHS variable")]
    InvalidRegister,
    #[error("no operator supplied")]
    MissingOperator,
    #[error("unknown operator")]
    UnknownOperator,
    #[error("no RHS supplied")]
    MissingOperand,
    #[error("RHS argument is invalid")]
    InvalidOperand,
}

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fatal(#[from] Fatal),
}

pub type Result<T> = std::result::Result<T, Fatal>;
