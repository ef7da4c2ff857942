//! Arithmetic expression parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: The [`Parser`](parse::Parser) and its error type
//! - [`ast`]: AST node definitions and the operator binding-power table
//!
//! # Supported Grammar
//!
//! - Operands: single decimal digits `0`–`9`
//! - Operators: `+`, `-`, `*`, `/`, all binary and left-associative
//! - `*` and `/` bind tighter than `+` and `-`
//! - No whitespace, parentheses, unary operators or multi-digit numbers
//!
//! # Parser Implementation
//!
//! Hand-written precedence climbing parser. No external parser generator
//! dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use parse::{parse, ParseError, Parser};
