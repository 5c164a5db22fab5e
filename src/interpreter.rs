/// The context module stores runtime variable state.
///
/// The evaluation context maps variable names to their current numeric
/// values. Evaluation only ever reads it; bindings are created by the
/// caller (a driver, a test fixture, or a sibling statement executor
/// outside this crate) before evaluation begins.
///
/// # Responsibilities
/// - Stores name-to-value bindings.
/// - Resolves lookups, reporting unknown names as runtime errors.
pub mod context;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the tree depth-first, left operand before right,
/// and produces a single numeric result. The traversal is pure: it mutates
/// neither the tree nor the context, and it is deterministic for a fixed
/// set of variable bindings.
///
/// # Responsibilities
/// - Evaluates literals, variable references, and binary operations.
/// - Applies binary operators with IEEE-754 double semantics.
/// - Propagates lookup failures unchanged to the caller.
pub mod evaluator;
