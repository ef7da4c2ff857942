//! Tree-walking evaluation engine
//!
//! Folds an [`Expr`] bottom-up: both operands of a binary node are evaluated,
//! left before right, before the operator is applied. The tree is only read;
//! the caller drops it once the result is back.
//!
//! The fold runs on an explicit work stack rather than the call stack, since
//! a left-associative chain is as deep as it has operators.

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::binary::apply_binary_op;
use crate::parser::ast::{BinOp, Expr, SourceLocation};
use tracing::{debug, trace};

/// Pending work for the fold
enum Step<'a> {
    /// Evaluate this node and push its value
    Visit(&'a Expr),
    /// Both operand values of `expr` are on the value stack
    Apply {
        op: BinOp,
        location: SourceLocation,
        expr: &'a Expr,
    },
}

/// Evaluate an expression tree to an integer.
pub fn evaluate(expr: &Expr) -> Result<i32, RuntimeError> {
    let value = evaluate_expr(expr)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

fn evaluate_expr(root: &Expr) -> Result<i32, RuntimeError> {
    let mut steps = vec![Step::Visit(root)];
    let mut values: Vec<i32> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(expr) => match expr {
                Expr::Number(n, _) => values.push(*n),
                Expr::BinaryOp {
                    op,
                    left,
                    right,
                    location,
                } => {
                    steps.push(Step::Apply {
                        op: *op,
                        location: *location,
                        expr,
                    });
                    steps.push(Step::Visit(right.as_ref()));
                    steps.push(Step::Visit(left.as_ref()));
                }
            },

            Step::Apply { op, location, expr } => {
                let (Some(b), Some(a)) = (values.pop(), values.pop()) else {
                    unreachable!("operands are pushed before their operator");
                };

                let value = apply_binary_op(op, a, b, expr, location)?;
                trace!(%op, a, b, value, "applied");
                values.push(value);
            }
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("the root always leaves one value"),
    }
}
