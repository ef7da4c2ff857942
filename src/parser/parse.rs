//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helpers, and the top-level entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: precedence climbing over binary operators
//!
//! The parser does not tokenize up front. It owns a [`Lexer`] and pulls one
//! token at a time, looking at most one token ahead.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use tracing::debug;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An unrecognized character was met while reading a token
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token appeared where the grammar does not allow it
    #[error("Parse error at {location}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex(err) => err.location,
            ParseError::UnexpectedToken { location, .. } => *location,
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found,
            location: found.location(),
        }
    }
}

/// Precedence-climbing parser for single-digit arithmetic
#[derive(Debug)]
pub struct Parser {
    pub(crate) lexer: Lexer,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    /// Parse a complete expression. Input left over after the expression
    /// (for example the second digit of `12`) is a syntax error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression(0)?;
        self.expect_eof()?;

        debug!(%expr, operators = expr.operator_count(), "parsed expression");
        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn peek_token(&self) -> Result<Token, ParseError> {
        Ok(self.lexer.peek_token()?)
    }

    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        Ok(self.lexer.next_token()?)
    }

    pub(crate) fn expect_eof(&mut self) -> Result<(), ParseError> {
        match self.peek_token()? {
            Token::Eof(_) => Ok(()),
            found => Err(ParseError::unexpected("end of input", found)),
        }
    }
}

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse()
}
