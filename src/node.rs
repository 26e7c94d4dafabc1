//! Formula trees.
//!
//! Trees are built through the constructor functions on [`Node`] and never modified afterwards.

use std::fmt::{Display, Formatter};

use crate::kind::OpKind;
use crate::vars::VarSet;

/// A node of a propositional formula tree.
///
/// A node has a [kind][OpKind], an optional name, and an ordered list of children.
/// The name is the variable identifier for [`OpKind::Symbol`] nodes, and an optional
/// display label for every other kind.
///
/// # Invariants
///
/// - The number of children should equal `kind.arity()`.
///   This is checked at evaluation time, so malformed trees can be built with [`Node::new`].
/// - Nodes are never mutated after construction.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    kind: OpKind,
    name: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node without checking the arity of `kind`.
    pub fn new(kind: OpKind, name: Option<String>, children: Vec<Node>) -> Self {
        Self { kind, name, children }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(OpKind::Symbol, Some(name.into()), vec![])
    }

    pub fn constant(value: bool) -> Self {
        if value {
            Self::top()
        } else {
            Self::bottom()
        }
    }

    /// Constant true.
    pub fn top() -> Self {
        Self::new(OpKind::True, None, vec![])
    }

    /// Constant false.
    pub fn bottom() -> Self {
        Self::new(OpKind::False, None, vec![])
    }

    pub fn not(a: Node) -> Self {
        Self::new(OpKind::Not, None, vec![a])
    }

    pub fn implies(a: Node, b: Node) -> Self {
        Self::binary(OpKind::Implication, a, b)
    }

    pub fn and(a: Node, b: Node) -> Self {
        Self::binary(OpKind::And, a, b)
    }

    pub fn or(a: Node, b: Node) -> Self {
        Self::binary(OpKind::Or, a, b)
    }

    pub fn nor(a: Node, b: Node) -> Self {
        Self::binary(OpKind::Nor, a, b)
    }

    pub fn nand(a: Node, b: Node) -> Self {
        Self::binary(OpKind::Nand, a, b)
    }

    pub fn xor(a: Node, b: Node) -> Self {
        Self::binary(OpKind::Xor, a, b)
    }

    fn binary(kind: OpKind, a: Node, b: Node) -> Self {
        Self::new(kind, None, vec![a, b])
    }

    /// Attaches a display label to this node.
    ///
    /// For symbols this replaces the variable identifier.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The label used when reporting this node: its name if present, otherwise its rendering.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.to_string(),
        }
    }

    /// Like [`Node::label`], but an unnamed binary node is parenthesized,
    /// so it can be embedded next to another operator.
    pub fn operand_label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => Operand(self).to_string(),
        }
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        self.children.iter().map(|c| 1 + c.depth()).max().unwrap_or(0)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|c| c.size()).sum::<usize>()
    }

    /// Free variables of the tree, in order of first appearance.
    pub fn variables(&self) -> VarSet {
        VarSet::of(self)
    }

    /// Visits the nodes of the tree in pre-order, left to right.
    pub(crate) fn for_each_preorder<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.for_each_preorder(f);
        }
    }

    fn fmt_operand(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.kind.arity() == 2 && self.children.len() == 2 {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

struct Operand<'a>(&'a Node);

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt_operand(f)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.children.as_slice()) {
            (OpKind::Symbol, []) => write!(f, "{}", self.name.as_deref().unwrap_or("?")),
            (OpKind::True | OpKind::False, []) => write!(f, "{}", self.kind),
            (OpKind::Not, [a]) => {
                write!(f, "~")?;
                a.fmt_operand(f)
            }
            (kind, [a, b]) if kind.arity() == 2 => {
                a.fmt_operand(f)?;
                write!(f, " {} ", kind)?;
                b.fmt_operand(f)
            }
            // Malformed node: render all children explicitly.
            (kind, children) => {
                write!(f, "{}(", kind)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
