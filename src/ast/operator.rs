use std::fmt;

/// Represents a binary operator.
///
/// The set of operators is closed: evaluation and compilation both match on
/// it exhaustively, so an unhandled case is rejected by the compiler rather
/// than surfacing as a runtime invariant violation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    ///
    /// This is the interpreted half of the operator table. All arithmetic
    /// follows IEEE-754 double semantics: division by zero yields a signed
    /// infinity or NaN, and exponentiation uses [`f64::powf`], which yields
    /// NaN for invalid domains (e.g. a negative base with a fractional
    /// exponent). Such results are ordinary values, not errors, and
    /// propagate arithmetically through parent nodes.
    ///
    /// # Parameters
    /// - `lhs`: The evaluated left operand.
    /// - `rhs`: The evaluated right operand.
    ///
    /// # Returns
    /// The numeric result of `lhs <op> rhs`.
    ///
    /// # Example
    /// ```
    /// use verba::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Add.apply(2.0, 3.0), 5.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Pow.apply(-1.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Returns the operator's surface symbol.
    ///
    /// This is the compiled half of the operator table. The four infix
    /// operators emit these tokens directly; `Pow` keeps `^` as its
    /// human-readable symbol but compiles to a power-function call instead
    /// of an infix form (see the `compiler` module).
    ///
    /// # Example
    /// ```
    /// use verba::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.symbol(), "*");
    /// assert_eq!(BinaryOperator::Pow.symbol(), "^");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
