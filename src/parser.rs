use crate::ast::*;
use crate::error::CommandError;
use crate::lexer::{Lexer, TokenInfo};
use crate::token::Token;
use tracing::debug;

/// Parses one compacted command line: `<register><operator>[<operand>]`.
pub struct Parser {
    tokens: Vec<TokenInfo>,
    pos: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        Parser {
            tokens: lexer.tokenize(),
            pos: 0,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn reject(&self, err: CommandError) -> CommandError {
        let col = self.tokens.get(self.pos).map_or(0, |t| t.col);
        debug!(col, token = ?self.current(), "rejected command: {}", err);
        err
    }

    pub fn parse(&mut self) -> Result<Command, CommandError> {
        let target = match self.current() {
            Token::Register(ch) => match RegisterId::from_letter(*ch) {
                Some(id) => id,
                None => return Err(self.reject(CommandError::InvalidRegister)),
            },
            _ => return Err(self.reject(CommandError::InvalidRegister)),
        };
        self.advance();

        let op = match self.current() {
            Token::Eof => return Err(self.reject(CommandError::MissingOperator)),
            // anything after '?' is ignored
            Token::Question => return Ok(Command::Print(target)),
            Token::Assign => BinaryOp::Assign,
            Token::Plus => BinaryOp::Add,
            Token::Star => BinaryOp::Mul,
            Token::Caret => BinaryOp::Pow,
            Token::Slash => BinaryOp::Div,
            _ => return Err(self.reject(CommandError::UnknownOperator)),
        };
        self.advance();

        let operand = self.parse_operand()?;
        Ok(Command::Update { target, op, operand })
    }

    fn parse_operand(&mut self) -> Result<Operand, CommandError> {
        let operand = match self.current() {
            Token::Eof => return Err(self.reject(CommandError::MissingOperand)),
            Token::Number(digits) => Operand::Literal(digits.clone()),
            Token::Register(ch) => match RegisterId::from_letter(*ch) {
                Some(id) => Operand::Register(id),
                None => return Err(self.reject(CommandError::InvalidOperand)),
            },
            _ => return Err(self.reject(CommandError::InvalidOperand)),
        };
        self.advance();

        // The operand must be the whole rest of the line
        if self.current() != &Token::Eof {
            return Err(self.reject(CommandError::InvalidOperand));
        }

        Ok(operand)
    }
}

/// Parse a compacted command line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    Parser::new(line).parse()
}
