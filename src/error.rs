//! Evaluation and enumeration errors.

use std::io;

use crate::kind::OpKind;

/// Error type for formula evaluation.
///
/// All variants describe a structural problem with the tree or its context,
/// discovered only when the offending node is evaluated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// A symbol has no value in the assignment context.
    UnboundSymbol(String),
    /// A node has the wrong number of children for its kind.
    Arity {
        kind: OpKind,
        expected: usize,
        actual: usize,
    },
    /// The operator kind has no evaluation rule under the active configuration.
    UnsupportedOperator(OpKind),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnboundSymbol(name) => write!(f, "symbol {:?} cannot be found", name),
            EvalError::Arity { kind, expected, actual } => {
                write!(f, "{} expects {} operand(s), got {}", kind, expected, actual)
            }
            EvalError::UnsupportedOperator(kind) => write!(f, "operator {} is not supported", kind),
        }
    }
}

impl std::error::Error for EvalError {}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Error type for a full truth-table run.
#[derive(Debug)]
pub enum RunError {
    /// A row failed to evaluate and the run was aborted.
    Eval(EvalError),
    /// The reporter failed to write a row.
    Io(io::Error),
}

impl From<EvalError> for RunError {
    fn from(e: EvalError) -> Self {
        RunError::Eval(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Eval(e) => write!(f, "Evaluation error: {}", e),
            RunError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Eval(e) => Some(e),
            RunError::Io(e) => Some(e),
        }
    }
}
