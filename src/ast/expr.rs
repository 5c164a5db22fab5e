use ordered_float::OrderedFloat;

use crate::ast::{walk, BinaryOperator};

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression kind: numeric literals, variable
/// references, and binary operations. A tree is built once by an external
/// parser from already-constructed child nodes and is fully immutable
/// afterwards: children are exclusively owned, no node is shared between
/// parents, and no field is ever mutated post-construction. Because a tree
/// contains only owned data, it is `Send + Sync` and may be traversed
/// concurrently without synchronization.
///
/// Equality and hashing are structural and deep: two trees are equal iff
/// they have the same shape, the same operators, and the same leaf values,
/// independent of object identity. Operand order matters, so
/// `(2 * (3 + 4))` is not equal to `((3 + 4) * 2)` even though both
/// evaluate to the same number. Literal values are stored as
/// [`OrderedFloat`] so that equal trees always hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A numeric literal value.
    Literal {
        /// The constant value.
        value: OrderedFloat<f64>,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// The operator.
        op:  BinaryOperator,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    ///
    /// # Example
    /// ```
    /// use verba::{ast::Expr, interpreter::context::Context};
    ///
    /// let expr = Expr::literal(3.5);
    /// assert_eq!(expr.evaluate(&Context::new()).unwrap(), 3.5);
    /// ```
    #[must_use]
    pub fn literal(value: f64) -> Self {
        Self::Literal { value: OrderedFloat(value) }
    }

    /// Creates a variable-reference node.
    ///
    /// # Example
    /// ```
    /// use verba::ast::Expr;
    ///
    /// let expr = Expr::variable("x");
    /// assert_eq!(expr.to_string(), "x");
    /// ```
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a binary-operation node from two already-built children.
    ///
    /// The node takes exclusive ownership of both operands; the resulting
    /// tree is a strict hierarchy with single parents and no cycles.
    ///
    /// # Example
    /// ```
    /// use verba::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::context::Context,
    /// };
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::literal(3.0), Expr::literal(4.0));
    /// assert_eq!(expr.evaluate(&Context::new()).unwrap(), 7.0);
    /// assert_eq!(expr.to_string(), "(3+4)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, lhs: Self, rhs: Self) -> Self {
        Self::Binary { op,
                       lhs: Box::new(lhs),
                       rhs: Box::new(rhs), }
    }

    /// Returns the node's kind name, used by the generic tree dump.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "Literal",
            Self::Variable { .. } => "Variable",
            Self::Binary { .. } => "Binary",
        }
    }

    /// Enumerates the node's immediate children as an ordered role-name to
    /// node mapping.
    ///
    /// Leaves return an empty mapping. A binary node returns exactly two
    /// entries, keyed `"lhs"` and `"rhs"` in that order and referencing the
    /// owned children directly (no copying). Generic tree walkers such as
    /// printers, structural validators, and diff tools traverse any node
    /// through this view without knowing its concrete kind; the view is
    /// read-only, so the tree's immutability is preserved.
    ///
    /// # Example
    /// ```
    /// use verba::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Sub, Expr::literal(8.0), Expr::variable("x"));
    ///
    /// let children = expr.children();
    /// assert_eq!(children.len(), 2);
    /// assert_eq!(children[0], ("lhs", &Expr::literal(8.0)));
    /// assert_eq!(children[1], ("rhs", &Expr::variable("x")));
    ///
    /// assert!(Expr::literal(1.0).children().is_empty());
    /// ```
    #[must_use]
    pub fn children(&self) -> Vec<(&'static str, &Self)> {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => Vec::new(),
            Self::Binary { lhs, rhs, .. } => walk::ordered([("lhs", lhs.as_ref()),
                                                            ("rhs", rhs.as_ref())]),
        }
    }

    /// Renders the node's own attributes (excluding children) for debug
    /// output.
    ///
    /// # Example
    /// ```
    /// use verba::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Mul, Expr::literal(2.0), Expr::variable("x"));
    /// assert_eq!(expr.describe_attributes(), "(operator=Mul)");
    /// assert_eq!(Expr::variable("x").describe_attributes(), "(name=x)");
    /// assert_eq!(Expr::literal(2.0).describe_attributes(), "(value=2)");
    /// ```
    #[must_use]
    pub fn describe_attributes(&self) -> String {
        match self {
            Self::Literal { value } => format!("(value={value})"),
            Self::Variable { name } => format!("(name={name})"),
            Self::Binary { op, .. } => format!("(operator={op:?})"),
        }
    }
}
