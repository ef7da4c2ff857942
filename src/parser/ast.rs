// AST (Abstract Syntax Tree) definitions for the arithmetic evaluator

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Precedence rank of a binary operator. Higher ranks bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive = 1,
    Multiplicative = 2,
}

/// Grouping direction for a chain of operators sharing one precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Left and right binding power of an infix operator.
///
/// The parser keeps extending a right-hand side while the next operator's
/// `left` power is at least the current threshold, and recurses with the
/// operator's `right` power as the new threshold. A left-associative operator
/// therefore has `right == left + 1`, so an equal-precedence operator that
/// follows cannot be absorbed into the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BinOp {
    pub fn precedence(self) -> Precedence {
        match self {
            BinOp::Add | BinOp::Sub => Precedence::Additive,
            BinOp::Mul | BinOp::Div => Precedence::Multiplicative,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => Associativity::Left,
        }
    }

    pub fn binding_power(self) -> BindingPower {
        // Ranks are spaced by two so a right power never reaches the next level.
        let left = self.precedence() as u8 * 2;
        let right = match self.associativity() {
            Associativity::Left => left + 1,
            Associativity::Right => left,
        };
        BindingPower { left, right }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// AST node
///
/// Every node is owned by exactly one parent (the root by the caller), so the
/// tree is acyclic and its depth is bounded by the number of operators. A
/// left-associative chain such as `1+0+0+...` is as deep as it is long, so
/// every walk over the tree below (comparison, rendering, counting, drop) uses
/// an explicit stack instead of recursion.
pub enum Expr {
    /// Single-digit literal
    Number(i32, SourceLocation),

    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Location of the literal, or of the operator for a binary node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Number(_, location) => *location,
            Expr::BinaryOp { location, .. } => *location,
        }
    }

    /// Number of binary operators in the tree
    pub fn operator_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            if let Expr::BinaryOp { left, right, .. } = expr {
                count += 1;
                pending.push(left.as_ref());
                pending.push(right.as_ref());
            }
        }

        count
    }
}

/// Swap a child out of its box, leaving a leaf behind
fn detach(child: &mut Box<Expr>) -> Expr {
    let location = child.location();
    std::mem::replace(&mut **child, Expr::Number(0, location))
}

impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::BinaryOp { left, right, .. } = self else {
            return;
        };

        let mut pending = vec![detach(left), detach(right)];
        while let Some(mut expr) = pending.pop() {
            if let Expr::BinaryOp { left, right, .. } = &mut expr {
                pending.push(detach(left));
                pending.push(detach(right));
            }
            // `expr` now only holds leaves, so dropping it does not recurse.
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Number(a, loc_a), Expr::Number(b, loc_b)) => {
                    if a != b || loc_a != loc_b {
                        return false;
                    }
                }
                (
                    Expr::BinaryOp {
                        op: op_a,
                        left: left_a,
                        right: right_a,
                        location: loc_a,
                    },
                    Expr::BinaryOp {
                        op: op_b,
                        left: left_b,
                        right: right_b,
                        location: loc_b,
                    },
                ) => {
                    if op_a != op_b || loc_a != loc_b {
                        return false;
                    }
                    pending.push((left_a.as_ref(), left_b.as_ref()));
                    pending.push((right_a.as_ref(), right_b.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Expr {}

/// Pieces of the rendered form still to be written
enum Piece<'a> {
    Node(&'a Expr),
    Op(BinOp),
    Close,
}

/// Fully parenthesized infix form, e.g. `(3 + (4 * 2))`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Expr::Number(n, _)) => write!(f, "{}", n)?,
                Piece::Node(Expr::BinaryOp {
                    op, left, right, ..
                }) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right.as_ref()));
                    pending.push(Piece::Op(*op));
                    pending.push(Piece::Node(left.as_ref()));
                }
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

/// Renders through `Display`; a derived impl would recurse per tree level.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({}) at {}", self, self.location())
    }
}
