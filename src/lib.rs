//! # truthtab: truth tables for propositional formulas
//!
//! **`truthtab`** models propositional formulas as expression trees and evaluates them
//! over every assignment of their free variables, producing a truth table.
//!
//! ## Key Features
//!
//! - **Plain trees**: a formula is a [`Node`][crate::node::Node] with an operator kind, an optional name, and children.
//!   Arity is checked at evaluation time, so malformed trees can be built and fail with a typed error.
//! - **Typed errors**: unbound symbols, arity mismatches and unsupported operators are reported as
//!   [`EvalError`][crate::error::EvalError] values instead of terminating the process.
//! - **Diagnostics**: implications that fail (`true => false`) are reported next to the row they occur in.
//! - **Deterministic order**: rows follow binary counting, the first declared variable being the least significant bit.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truthtab::config::EvalConfig;
//! use truthtab::node::Node;
//! use truthtab::report::LineReport;
//! use truthtab::table::Enumerator;
//!
//! // 1. Build a formula: p => q
//! let f = Node::implies(Node::symbol("p"), Node::symbol("q"));
//!
//! // 2. Enumerate all assignments of {p, q}
//! let driver = Enumerator::for_formula(&f, EvalConfig::default());
//! let mut report = LineReport::new(Vec::new());
//! let summary = driver.run(&mut report).unwrap();
//!
//! // 3. Inspect the outcome
//! assert_eq!(summary.rows, 4);
//! assert_eq!(summary.falsified, 1);
//! let text = String::from_utf8(report.into_inner()).unwrap();
//! assert!(text.contains("Failed implication \"p(true) => q(false)\""));
//! ```
//!
//! ## Core Components
//!
//! - **[`node`]** and **[`kind`]**: the expression tree.
//! - **[`eval`]**: the recursive evaluator.
//! - **[`table`]**: the enumeration driver and collected truth tables.
//! - **[`report`]**: line-oriented output of rows.

pub mod config;
pub mod context;
pub mod error;
pub mod eval;
pub mod kind;
pub mod node;
pub mod report;
pub mod table;
pub mod vars;
