use std::collections::HashMap;

use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the variable bindings consulted while evaluating an
/// expression tree. Evaluation treats the context as read-only; callers
/// populate it with [`Context::define`] before evaluating, and may rebind
/// names between evaluations.
///
/// ## Usage
///
/// A `Context` is created once and reused across evaluations. It must not
/// be mutated concurrently with an in-flight evaluation that reads it;
/// since evaluation takes the context by shared reference, the borrow
/// checker enforces this within a single thread.
#[derive(Debug, Default)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a new evaluation context with no variable bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Binds a variable name to a value, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use verba::interpreter::context::Context;
    ///
    /// let mut ctx = Context::new();
    /// ctx.define("x", 2.0);
    /// ctx.define("x", 5.0);
    /// assert_eq!(ctx.get("x"), Some(5.0));
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Returns a variable's current value, or `None` if the name is
    /// unbound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Looks up a variable by name for evaluation.
    ///
    /// If the variable is not found, an `UnknownVariable` error is
    /// returned; evaluation propagates it to the caller unchanged.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The variable value, if bound.
    ///
    /// # Example
    /// ```
    /// use verba::{error::RuntimeError, interpreter::context::Context};
    ///
    /// let mut ctx = Context::new();
    /// ctx.define("x", 10.0);
    ///
    /// assert_eq!(ctx.lookup("x").unwrap(), 10.0);
    ///
    /// let err = ctx.lookup("y").unwrap_err();
    /// assert_eq!(err, RuntimeError::UnknownVariable { name: "y".to_string() });
    /// ```
    pub fn lookup(&self, name: &str) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned() })
    }
}
