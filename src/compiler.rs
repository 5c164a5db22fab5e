use std::fmt::{self, Write};

use crate::ast::{BinaryOperator, Expr};

impl Expr {
    /// Compiles the expression tree to target-language source text.
    ///
    /// The emitted text is a plain expression with no statement terminators
    /// or surrounding declarations, so the caller can embed it directly in
    /// a larger compiled unit. Evaluating the emitted text in the target
    /// environment yields the same result, within that environment's
    /// floating-point semantics, as interpreting the tree against an
    /// equivalent context.
    ///
    /// Emission rules:
    /// - Literals emit their decimal rendering; variables emit their name.
    /// - Exponentiation emits a power-function call,
    ///   `pow(<lhs>,<rhs>)`.
    /// - Every other binary node emits `(<lhs><symbol><rhs>)`. The node
    ///   always parenthesizes itself fully, so the output is correct as a
    ///   sub-expression of any enclosing emitted expression without relying
    ///   on the target language's precedence rules.
    ///
    /// Compilation never evaluates anything and has no effect on the tree;
    /// it is a pure text-emission traversal, left operand before right.
    /// Sink failures propagate to the caller.
    ///
    /// # Parameters
    /// - `out`: The append-only output sink receiving the emitted text.
    ///
    /// # Example
    /// ```
    /// use verba::ast::{BinaryOperator, Expr};
    ///
    /// // 1 + 2^x
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::literal(1.0),
    ///                         Expr::binary(BinaryOperator::Pow,
    ///                                      Expr::literal(2.0),
    ///                                      Expr::variable("x")));
    ///
    /// let mut out = String::new();
    /// expr.compile(&mut out).unwrap();
    /// assert_eq!(out, "(1+pow(2,x))");
    /// ```
    pub fn compile(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(out, "{value}"),
            Self::Variable { name } => out.write_str(name),
            Self::Binary { op: BinaryOperator::Pow,
                           lhs,
                           rhs, } => {
                out.write_str("pow(")?;
                lhs.compile(out)?;
                out.write_char(',')?;
                rhs.compile(out)?;
                out.write_char(')')
            },
            Self::Binary { op, lhs, rhs } => {
                out.write_char('(')?;
                lhs.compile(out)?;
                out.write_str(op.symbol())?;
                rhs.compile(out)?;
                out.write_char(')')
            },
        }
    }
}

/// The human-readable rendering of an expression is its compiled form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.compile(f)
    }
}
