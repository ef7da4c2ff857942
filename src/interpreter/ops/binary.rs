//! Checked integer arithmetic for binary operators
//!
//! All operations use checked math so that overflow and division by zero come
//! back as [`RuntimeError`]s rather than panics or wrapped values.

use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{BinOp, Expr, SourceLocation};

/// Apply `op` to two already-evaluated operands.
///
/// `expr` is the node being folded; it is only rendered when an error is built.
#[inline]
pub(crate) fn apply_binary_op(
    op: BinOp,
    a: i32,
    b: i32,
    expr: &Expr,
    location: SourceLocation,
) -> Result<i32, RuntimeError> {
    match op {
        BinOp::Add => checked(a.checked_add(b), op, a, b, location),
        BinOp::Sub => checked(a.checked_sub(b), op, a, b, location),
        BinOp::Mul => checked(a.checked_mul(b), op, a, b, location),
        BinOp::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero {
                    expression: expr.to_string(),
                    location,
                });
            }
            // Truncates toward zero. Only i32::MIN / -1 can fail here.
            checked(a.checked_div(b), op, a, b, location)
        }
    }
}

#[inline]
fn checked(
    result: Option<i32>,
    op: BinOp,
    a: i32,
    b: i32,
    location: SourceLocation,
) -> Result<i32, RuntimeError> {
    result.ok_or_else(|| RuntimeError::IntegerOverflow {
        operation: format!("{} {} {}", a, op, b),
        location,
    })
}
