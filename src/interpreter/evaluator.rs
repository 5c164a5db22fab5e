use crate::{
    ast::Expr,
    interpreter::context::{Context, EvalResult},
};

impl Expr {
    /// Evaluates the expression tree against a variable context.
    ///
    /// The traversal is depth-first: the left operand of a binary node is
    /// always evaluated before the right one. For the node kinds in this
    /// crate both operands are pure reads, but the order is fixed so that
    /// interpretation stays consistent with compiled output and remains
    /// deterministic under side-effecting node kinds added elsewhere.
    ///
    /// Arithmetic follows IEEE-754 double semantics throughout: division
    /// by zero yields a signed infinity or NaN, and invalid exponentiation
    /// domains yield NaN. These propagate as ordinary numeric values. The
    /// only error this crate's node kinds can raise is an unknown-variable
    /// lookup failure, which passes through every enclosing node
    /// unmodified.
    ///
    /// # Parameters
    /// - `context`: Variable bindings consulted for variable references;
    ///   never mutated.
    ///
    /// # Returns
    /// The numeric result of the expression.
    ///
    /// # Example
    /// ```
    /// use verba::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::context::Context,
    /// };
    ///
    /// let mut ctx = Context::new();
    /// ctx.define("x", 3.0);
    ///
    /// // (x + 4) * 2
    /// let expr = Expr::binary(BinaryOperator::Mul,
    ///                         Expr::binary(BinaryOperator::Add,
    ///                                      Expr::variable("x"),
    ///                                      Expr::literal(4.0)),
    ///                         Expr::literal(2.0));
    ///
    /// assert_eq!(expr.evaluate(&ctx).unwrap(), 14.0);
    /// ```
    pub fn evaluate(&self, context: &Context) -> EvalResult<f64> {
        match self {
            Self::Literal { value } => Ok(value.into_inner()),
            Self::Variable { name } => context.lookup(name),
            Self::Binary { op, lhs, rhs } => {
                let lhs_value = lhs.evaluate(context)?;
                let rhs_value = rhs.evaluate(context)?;
                Ok(op.apply(lhs_value, rhs_value))
            },
        }
    }
}
