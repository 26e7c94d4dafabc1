//! Evaluation and enumeration settings.

/// How `NOR`, `NAND` and `XOR` nodes are evaluated.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ExtendedOps {
    /// Standard truth tables: `NOR = ~(a OR b)`, `NAND = ~(a AND b)`, `XOR = a != b`.
    #[default]
    Standard,
    /// Fail with [`EvalError::UnsupportedOperator`][crate::error::EvalError::UnsupportedOperator].
    Reject,
}

/// What the enumeration driver does when a row fails to evaluate.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Stop at the first failing row and return its error.
    #[default]
    Abort,
    /// Record the error in the row and continue with the next one.
    SkipRow,
}

/// Configuration for [`Evaluator`][crate::eval::Evaluator] and
/// [`Enumerator`][crate::table::Enumerator].
///
/// # Examples
///
/// ```
/// use truthtab::config::{EvalConfig, ErrorPolicy, ExtendedOps};
///
/// let config = EvalConfig::default().strict().keep_going();
/// assert_eq!(config.extended, ExtendedOps::Reject);
/// assert_eq!(config.on_error, ErrorPolicy::SkipRow);
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EvalConfig {
    /// Semantics of the extended connectives (default: `Standard`)
    pub extended: ExtendedOps,
    /// Row failure handling (default: `Abort`)
    pub on_error: ErrorPolicy,
}

impl EvalConfig {
    /// Reject `NOR`, `NAND` and `XOR` nodes.
    pub fn strict(mut self) -> Self {
        self.extended = ExtendedOps::Reject;
        self
    }

    /// Skip failing rows instead of aborting the enumeration.
    pub fn keep_going(mut self) -> Self {
        self.on_error = ErrorPolicy::SkipRow;
        self
    }
}
