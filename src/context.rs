//! Variable assignments read by the evaluator.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use num_bigint::BigUint;

use crate::vars::VarSet;

/// Source of variable values for evaluation.
pub trait Context {
    /// Value of the variable `name`, or `None` if it is unbound.
    fn lookup(&self, name: &str) -> Option<bool>;
}

impl Context for HashMap<String, bool> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Context for HashMap<&str, bool> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Context for BTreeMap<String, bool> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

/// One complete assignment of values to the variables of a [`VarSet`].
///
/// Assignments are built once per truth-table row and never modified afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Assignment {
    vars: Rc<VarSet>,
    values: Vec<bool>,
}

impl Assignment {
    /// Creates an assignment from explicit values, given in the order of `vars`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != vars.len()`.
    pub fn new(vars: Rc<VarSet>, values: Vec<bool>) -> Self {
        assert_eq!(
            values.len(),
            vars.len(),
            "Expected {} values, got {}",
            vars.len(),
            values.len()
        );
        Self { vars, values }
    }

    /// Decodes the row `index`: variable `k` is true iff bit `k` of `index` is set.
    pub fn from_index(vars: Rc<VarSet>, index: &BigUint) -> Self {
        let values = (0..vars.len()).map(|k| index.bit(k as u64)).collect();
        Self { vars, values }
    }

    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    /// Values in the order of [`Assignment::vars`].
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.vars.position(name).map(|pos| self.values[pos])
    }

    /// Pairs `(name, value)` in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.vars.iter().zip(self.values.iter().copied())
    }
}

impl Context for Assignment {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
