//! Lexer (tokenizer) for arithmetic expressions
//!
//! Produces one [`Token`] per source character, on demand. The parser pulls
//! tokens with [`Lexer::next_token`] and looks one token ahead with
//! [`Lexer::peek_token`], which never moves the cursor.
//!
//! Numbers are single digits only: `"12"` lexes as two `Number` tokens. There
//! is no whitespace skipping; a space is an unrecognized character.

use super::ast::{BinOp, SourceLocation};
use std::fmt;
use tracing::trace;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Single decimal digit, 0 through 9
    Number(u8, SourceLocation),

    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// The binary operator this token spells, if any
    pub fn as_binary_op(&self) -> Option<BinOp> {
        match self {
            Token::Plus(_) => Some(BinOp::Add),
            Token::Minus(_) => Some(BinOp::Sub),
            Token::Star(_) => Some(BinOp::Mul),
            Token::Slash(_) => Some(BinOp::Div),
            Token::Number(..) | Token::Eof(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
///
/// Recoverable: the lexer has already stepped past `character`, so the caller
/// may keep pulling tokens. The parser aborts instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at {location}: unrecognized character {character:?}")]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

/// Lexer for arithmetic source text
#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input. The result always ends with a single `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if matches!(token, Token::Eof(_)) {
                break;
            }
        }

        Ok(tokens)
    }

    /// Consume and return the next token.
    ///
    /// Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.peek_token();
        if !self.is_at_end() {
            self.advance();
        }
        trace!(?token, "lexed");
        token
    }

    /// Return what the next call to [`Lexer::next_token`] would return.
    pub fn peek_token(&self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let Some(&ch) = self.input.get(self.position) else {
            return Ok(Token::Eof(loc));
        };

        match ch {
            '0'..='9' => Ok(Token::Number(ch as u8 - b'0', loc)),
            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            _ => Err(LexError {
                character: ch,
                location: loc,
            }),
        }
    }

    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) {
        if self.input[self.position] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(column: usize) -> SourceLocation {
        SourceLocation::new(1, column)
    }

    #[test]
    fn test_tokenize_all_kinds() {
        let mut lexer = Lexer::new("7+-*/0");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Number(7, loc(1)),
                Token::Plus(loc(2)),
                Token::Minus(loc(3)),
                Token::Star(loc(4)),
                Token::Slash(loc(5)),
                Token::Number(0, loc(6)),
                Token::Eof(loc(7)),
            ]
        );
    }

    #[test]
    fn test_digits_are_not_merged() {
        let mut lexer = Lexer::new("12");
        assert_eq!(lexer.next_token().unwrap(), Token::Number(1, loc(1)));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(2, loc(2)));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof(loc(3)));
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut lexer = Lexer::new("4*2");
        assert_eq!(lexer.next_token().unwrap(), Token::Number(4, loc(1)));

        let first = lexer.peek_token().unwrap();
        let second = lexer.peek_token().unwrap();
        assert_eq!(first, Token::Star(loc(2)));
        assert_eq!(first, second);
        assert_eq!(lexer.current_location(), loc(2));

        assert_eq!(lexer.next_token().unwrap(), first);
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap(), Token::Eof(loc(1)));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof(loc(1)));
        assert_eq!(lexer.peek_token().unwrap(), Token::Eof(loc(1)));
    }

    #[test]
    fn test_unrecognized_character_is_recoverable() {
        let mut lexer = Lexer::new("1 2");
        assert_eq!(lexer.next_token().unwrap(), Token::Number(1, loc(1)));

        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.character, ' ');
        assert_eq!(err.location, loc(2));

        // The bad character has been stepped over.
        assert_eq!(lexer.next_token().unwrap(), Token::Number(2, loc(3)));
    }

    #[test]
    fn test_lex_error_message() {
        let err = Lexer::new("a").next_token().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Lexer error at line 1, column 1: unrecognized character 'a'"
        );
    }

    #[test]
    fn test_operator_tokens_map_to_binops() {
        assert_eq!(Token::Plus(loc(1)).as_binary_op(), Some(BinOp::Add));
        assert_eq!(Token::Minus(loc(1)).as_binary_op(), Some(BinOp::Sub));
        assert_eq!(Token::Star(loc(1)).as_binary_op(), Some(BinOp::Mul));
        assert_eq!(Token::Slash(loc(1)).as_binary_op(), Some(BinOp::Div));
        assert_eq!(Token::Number(3, loc(1)).as_binary_op(), None);
        assert_eq!(Token::Eof(loc(1)).as_binary_op(), None);
    }
}
