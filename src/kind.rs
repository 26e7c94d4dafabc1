//! Operator kinds of formula nodes.

use std::fmt::{Display, Formatter};

/// The kind of a formula node.
///
/// The kind fixes how many children a node must have (see [`OpKind::arity`]).
/// The arity is not enforced when a node is built, only when it is evaluated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKind {
    /// Reference to a free variable, identified by the node name.
    Symbol,
    /// Constant true.
    True,
    /// Constant false.
    False,
    /// Negation, `~a`.
    Not,
    /// Implication, `a => b`.
    Implication,
    /// Conjunction, `a AND b`.
    And,
    /// Disjunction, `a OR b`.
    Or,
    /// Negated disjunction, `a NOR b`.
    Nor,
    /// Negated conjunction, `a NAND b`.
    Nand,
    /// Exclusive disjunction, `a XOR b`.
    Xor,
}

impl OpKind {
    pub const ALL: [OpKind; 10] = [
        OpKind::Symbol,
        OpKind::True,
        OpKind::False,
        OpKind::Not,
        OpKind::Implication,
        OpKind::And,
        OpKind::Or,
        OpKind::Nor,
        OpKind::Nand,
        OpKind::Xor,
    ];

    /// Number of children a node of this kind must have.
    pub const fn arity(self) -> usize {
        match self {
            OpKind::Symbol | OpKind::True | OpKind::False => 0,
            OpKind::Not => 1,
            OpKind::Implication | OpKind::And | OpKind::Or | OpKind::Nor | OpKind::Nand | OpKind::Xor => 2,
        }
    }

    /// Whether this is a leaf kind (symbol or constant).
    pub const fn is_leaf(self) -> bool {
        self.arity() == 0
    }

    /// Whether this kind lies outside the core connectives (`NOR`, `NAND`, `XOR`).
    ///
    /// These kinds are evaluated only under [`ExtendedOps::Standard`][crate::config::ExtendedOps::Standard].
    pub const fn is_extended(self) -> bool {
        matches!(self, OpKind::Nor | OpKind::Nand | OpKind::Xor)
    }

    /// Conventional token for this kind.
    pub const fn token(self) -> &'static str {
        match self {
            OpKind::Symbol => "SYMBOL",
            OpKind::True => "TRUE",
            OpKind::False => "FALSE",
            OpKind::Not => "~",
            OpKind::Implication => "=>",
            OpKind::And => "AND",
            OpKind::Or => "OR",
            OpKind::Nor => "NOR",
            OpKind::Nand => "NAND",
            OpKind::Xor => "XOR",
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
