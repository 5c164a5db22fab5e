/// Expression nodes.
///
/// Declares the `Expr` enum covering every node kind in the tree, together
/// with its construction helpers, child enumeration, and debug rendering.
pub mod expr;
/// The binary operator table.
///
/// Declares the closed five-operator enumeration and, side by side, its
/// interpreted semantics and emitted surface syntax so the two stay in
/// exact correspondence.
pub mod operator;
/// Generic tree utilities.
///
/// Declares the ordered child-map helper every node kind routes through,
/// plus read-only walkers (pre-order traversal and an indented tree dump)
/// that work on any node without knowing its concrete kind.
pub mod walk;

pub use expr::Expr;
pub use operator::BinaryOperator;
