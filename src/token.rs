/// Token types for calculator command lines
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Operands
    Register(char),     // a..z
    Number(String),     // Run of decimal digits, leading zeros kept

    // Operators
    Question,           // ? (print)
    Assign,             // =
    Plus,               // +
    Star,               // *
    Caret,              // ^ (power)
    Slash,              // / (truncating division)

    // Special
    Unknown(char),      // Anything else, reported by the parser
    Eof,
}

impl Token {
    pub fn from_operator(ch: char) -> Option<Token> {
        match ch {
            '?' => Some(Token::Question),
            '=' => Some(Token::Assign),
            '+' => Some(Token::Plus),
            '*' => Some(Token::Star),
            '^' => Some(Token::Caret),
            '/' => Some(Token::Slash),
            _ => None,
        }
    }
}
