/// Represents all errors that can occur during evaluation.
///
/// Numeric edge conditions are deliberately absent: division by zero and
/// invalid exponentiation domains follow IEEE-754 semantics, yielding
/// infinity or NaN as ordinary values. Malformed operator tags are
/// unrepresentable, since the operator enumeration is closed and every
/// consumer matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
