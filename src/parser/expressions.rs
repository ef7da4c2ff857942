//! Expression parsing implementation
//!
//! Binary operators are parsed by precedence climbing. A single threshold,
//! `min_bp`, is passed down the recursion:
//!
//! - an operator whose left binding power is below the threshold ends the
//!   current operand and is left for an outer call to fold;
//! - otherwise the operator is consumed and its right operand is parsed with
//!   the operator's right binding power as the new threshold.
//!
//! Because a left-associative operator's right power is one above its left
//! power, `8-3-2` folds as `((8 - 3) - 2)`, and because multiplicative powers
//! sit above additive ones, `3+4*2` folds as `(3 + (4 * 2))`.
//!
//! Every call consumes a `Number` before it can recurse. Since every operator
//! is left-associative, a recursive call returns at the first operator of its
//! own precedence, so nesting never exceeds the number of precedence levels
//! however long the chain is.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};
use tracing::trace;

impl Parser {
    /// Parse an expression whose operators all bind at least as tightly as
    /// `min_bp`. The top-level call passes 0.
    pub fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_number()?;

        loop {
            let token = self.peek_token()?;
            let Some(op) = token.as_binary_op() else {
                break;
            };

            let bp = op.binding_power();
            if bp.left < min_bp {
                break;
            }

            self.advance()?;
            let rhs = self.parse_expression(bp.right)?;

            trace!(%op, min_bp, left = bp.left, right = bp.right, "fold");
            lhs = Expr::BinaryOp {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
                location: token.location(),
            };
        }

        Ok(lhs)
    }

    /// Parse a single-digit literal
    fn parse_number(&mut self) -> Result<Expr, ParseError> {
        match self.advance()? {
            Token::Number(n, loc) => Ok(Expr::Number(i32::from(n), loc)),
            found => Err(ParseError::unexpected("number", found)),
        }
    }
}
