//! # Introduction
//!
//! climb parses single-line arithmetic over single-digit operands and the four
//! binary operators `+ - * /`, then evaluates the tree to an `i32`.
//! `*` and `/` bind tighter than `+` and `-`; all four are left-associative.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Evaluator → i32
//! ```
//!
//! 1. [`parser`] — pulls tokens from the lexer on demand and builds the AST
//!    by precedence climbing.
//! 2. [`interpreter`] — folds the AST post-order with checked arithmetic.
//!
//! ## Limitations
//!
//! Operands are single digits: `12` lexes as two numbers and is rejected by
//! the parser. There is no whitespace, no parentheses and no unary minus.
//!
//! ```
//! assert_eq!(climb::evaluate_str("3+4*2"), Ok(11));
//! assert!(climb::evaluate_str("5/0").is_err());
//! ```

pub mod error;
pub mod interpreter;
pub mod parser;

pub use error::Error;

/// Expression evaluated by the `climb` binary
pub const REFERENCE_EXPRESSION: &str = "3+4-5*2*2*3*1+9*3*3+8";

/// Parse and evaluate `source` in one step.
pub fn evaluate_str(source: &str) -> Result<i32, Error> {
    let expr = parser::parse(source)?;
    Ok(interpreter::evaluate(&expr)?)
}
