//! Ordered sets of free variables.
//!
//! The order of a [`VarSet`] fixes the bit-to-variable mapping used during enumeration:
//! the variable at position `k` takes the value of bit `k` of the row index.

use std::collections::HashMap;

use crate::kind::OpKind;
use crate::node::Node;

/// Ordered list of distinct variable names.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VarSet {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the symbols of `root` in order of first appearance
    /// in a pre-order, left-to-right traversal.
    pub fn of(root: &Node) -> Self {
        let mut vars = Self::new();
        root.for_each_preorder(&mut |node| {
            if node.kind() == OpKind::Symbol {
                if let Some(name) = node.name() {
                    vars.insert(name);
                }
            }
        });
        vars
    }

    /// Appends `name` unless already present. Returns its position.
    pub fn insert(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&pos) = self.positions.get(&name) {
            return pos;
        }
        let pos = self.names.len();
        self.positions.insert(name.clone(), pos);
        self.names.push(name);
        pos
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `name` in the declared order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

/// Builds a set in the given order; repeated names keep their first position.
impl<S: Into<String>> FromIterator<S> for VarSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vars = Self::new();
        for name in iter {
            vars.insert(name);
        }
        vars
    }
}
