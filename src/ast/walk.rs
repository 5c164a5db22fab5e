use crate::ast::Expr;

/// Role name given to the root of a traversal, which has no parent to name
/// it.
pub const ROOT_ROLE: &str = "root";

/// Builds the ordered role-name to child-node mapping for a node.
///
/// Every node kind routes its child enumeration through this helper so the
/// mapping semantics are fixed in one place: entries keep their insertion
/// order, role names are stable `'static` strings describing each child's
/// grammatical position, and the mapping holds borrowed references only,
/// never copies of the tree.
///
/// # Example
/// ```
/// use verba::ast::{walk, Expr};
///
/// let lhs = Expr::literal(1.0);
/// let rhs = Expr::variable("x");
///
/// let children = walk::ordered([("lhs", &lhs), ("rhs", &rhs)]);
/// assert_eq!(children[0].0, "lhs");
/// assert_eq!(children[1].0, "rhs");
/// ```
#[must_use]
pub fn ordered<'a, const N: usize>(pairs: [(&'static str, &'a Expr); N])
                                   -> Vec<(&'static str, &'a Expr)> {
    pairs.into_iter().collect()
}

/// Read-only pre-order traversal over a tree.
///
/// Yields `(role, node)` pairs: the root first (with role
/// [`ROOT_ROLE`]), then each node's children in their declared order,
/// left before right, each child fully visited before its right sibling.
pub struct DepthFirst<'a> {
    stack: Vec<(&'static str, &'a Expr)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (&'static str, &'a Expr);

    fn next(&mut self) -> Option<Self::Item> {
        let (role, node) = self.stack.pop()?;
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children);
        Some((role, node))
    }
}

/// Returns a pre-order iterator over a tree, root first.
///
/// # Example
/// ```
/// use verba::ast::{walk, BinaryOperator, Expr};
///
/// let expr = Expr::binary(BinaryOperator::Add, Expr::literal(3.0), Expr::literal(4.0));
///
/// let roles: Vec<_> = walk::depth_first(&expr).map(|(role, _)| role).collect();
/// assert_eq!(roles, ["root", "lhs", "rhs"]);
/// ```
#[must_use]
pub fn depth_first(root: &Expr) -> DepthFirst<'_> {
    DepthFirst { stack: vec![(ROOT_ROLE, root)] }
}

/// Renders a tree as an indented multi-line dump.
///
/// Each line shows a node's role, kind, and own attributes; children are
/// indented one level below their parent. The dump is built entirely
/// through [`Expr::children`] and [`Expr::describe_attributes`], so it
/// works for any node kind without matching on the tree itself.
///
/// # Example
/// ```
/// use verba::ast::{walk, BinaryOperator, Expr};
///
/// let expr = Expr::binary(BinaryOperator::Div, Expr::variable("x"), Expr::literal(2.0));
///
/// let dump = walk::dump(&expr);
/// assert_eq!(dump, "root: Binary(operator=Div)\n  lhs: Variable(name=x)\n  rhs: Literal(value=2)\n");
/// ```
#[must_use]
pub fn dump(root: &Expr) -> String {
    let mut out = String::new();
    dump_node(ROOT_ROLE, root, 0, &mut out);
    out
}

fn dump_node(role: &str, node: &Expr, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(role);
    out.push_str(": ");
    out.push_str(node.kind());
    out.push_str(&node.describe_attributes());
    out.push('\n');

    for (child_role, child) in node.children() {
        dump_node(child_role, child, depth + 1, out);
    }
}
