//! Expression evaluation
//!
//! This module provides the evaluation side of the pipeline:
//! - [`engine`]: post-order fold of the AST to an `i32`
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! Evaluation only reads the tree. Operand values are combined with checked
//! arithmetic, so division by zero and overflow surface as [`RuntimeError`]s.

pub mod engine;
pub mod errors;
mod ops;

pub use engine::evaluate;
pub use errors::RuntimeError;
