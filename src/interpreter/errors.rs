//! Runtime error types for the evaluator
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while folding a parsed expression (as opposed to lexical or syntax errors).
//!
//! All runtime errors are fatal - evaluation stops at the first one and no
//! partial result is returned.

use crate::parser::ast::SourceLocation;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Right operand of `/` evaluated to zero
    #[error("Division by zero in {expression} at {location}")]
    DivisionByZero {
        /// The offending subexpression, fully parenthesized
        expression: String,
        location: SourceLocation,
    },

    /// Result does not fit in an `i32`
    #[error("Integer overflow in operation: {operation} at {location}")]
    IntegerOverflow {
        operation: String,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> SourceLocation {
        match self {
            RuntimeError::DivisionByZero { location, .. } => *location,
            RuntimeError::IntegerOverflow { location, .. } => *location,
        }
    }
}
