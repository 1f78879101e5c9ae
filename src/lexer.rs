use crate::token::Token;

/// Longest command line kept after whitespace is removed.
pub const LINELEN: usize = 999;

/// Drop every whitespace character from a raw input line and cap what is
/// left at `LINELEN` characters.
pub fn compact_line(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .take(LINELEN)
        .collect()
}

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub token: Token,
    pub col: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    // Lines are normally compacted first, but raw text lexes the same way
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut num = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        num
    }

    pub fn next_token(&mut self) -> TokenInfo {
        self.skip_whitespace();

        let col = self.pos + 1;

        let ch = match self.peek() {
            Some(c) => c,
            None => {
                return TokenInfo {
                    token: Token::Eof,
                    col,
                }
            }
        };

        let token = match ch {
            '0'..='9' => Token::Number(self.read_number()),

            // Registers are single letters; "ab" is two tokens
            'a'..='z' => {
                self.advance();
                Token::Register(ch)
            }

            _ => {
                self.advance();
                Token::from_operator(ch).unwrap_or(Token::Unknown(ch))
            }
        };

        TokenInfo { token, col }
    }

    pub fn tokenize(&mut self) -> Vec<TokenInfo> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.token == Token::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_line() {
        assert_eq!(compact_line("  a = 12 3\t4\r"), "a=1234");
        assert_eq!(compact_line(" \t "), "");
        assert_eq!(compact_line(&"1".repeat(LINELEN + 50)).len(), LINELEN);
    }

    #[test]
    fn test_number() {
        let mut lexer = Lexer::new("00123");
        assert!(matches!(lexer.next_token().token, Token::Number(n) if n == "00123"));
        assert!(matches!(lexer.next_token().token, Token::Eof));
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("?=+*^/");
        assert!(matches!(lexer.next_token().token, Token::Question));
        assert!(matches!(lexer.next_token().token, Token::Assign));
        assert!(matches!(lexer.next_token().token, Token::Plus));
        assert!(matches!(lexer.next_token().token, Token::Star));
        assert!(matches!(lexer.next_token().token, Token::Caret));
        assert!(matches!(lexer.next_token().token, Token::Slash));
    }

    #[test]
    fn test_command() {
        let mut lexer = Lexer::new("a+b");
        assert!(matches!(lexer.next_token().token, Token::Register('a')));
        assert!(matches!(lexer.next_token().token, Token::Plus));
        assert!(matches!(lexer.next_token().token, Token::Register('b')));
        assert!(matches!(lexer.next_token().token, Token::Eof));
    }

    #[test]
    fn test_uncompacted_input() {
        let mut lexer = Lexer::new(" b  ^ 12 ");
        assert!(matches!(lexer.next_token().token, Token::Register('b')));
        assert!(matches!(lexer.next_token().token, Token::Caret));
        assert!(matches!(lexer.next_token().token, Token::Number(n) if n == "12"));
        assert!(matches!(lexer.next_token().token, Token::Eof));
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = Lexer::new("A-é").tokenize();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].token, Token::Unknown('A'));
        assert_eq!(tokens[1].token, Token::Unknown('-'));
        assert_eq!(tokens[2].token, Token::Unknown('é'));
        assert_eq!(tokens[2].col, 3);
    }
}
