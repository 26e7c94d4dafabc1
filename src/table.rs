//! Exhaustive enumeration of assignments.
//!
//! For a [`VarSet`] of size `N`, the row counter `i` runs from `0` to `2^N - 1`,
//! and variable `k` is true in row `i` iff bit `k` of `i` is set (least significant first).
//! Row 0 is all-false, the last row is all-true, and rows in between follow binary counting.
//! With no variables there is exactly one (empty) row.
//!
//! The counter is a [`BigUint`], so the row index never overflows;
//! enumeration still visits all `2^N` rows.

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::config::{ErrorPolicy, EvalConfig};
use crate::context::Assignment;
use crate::error::{EvalError, RunError};
use crate::eval::{Evaluator, FailedImplication};
use crate::node::Node;
use crate::report::Report;
use crate::vars::VarSet;

/// Number of rows in the truth table over `num_vars` variables, i.e. `2^num_vars`.
pub fn row_count(num_vars: usize) -> BigUint {
    BigUint::from(1u32) << num_vars
}

/// Iterator over all assignments of a [`VarSet`], in ascending row order.
#[derive(Debug, Clone)]
pub struct Assignments {
    vars: Rc<VarSet>,
    next: BigUint,
    end: BigUint,
}

impl Assignments {
    pub fn new(vars: Rc<VarSet>) -> Self {
        let end = row_count(vars.len());
        Self {
            vars,
            next: BigUint::ZERO,
            end,
        }
    }
}

impl Iterator for Assignments {
    type Item = (BigUint, Assignment);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next.clone();
        self.next += 1u32;
        let assignment = Assignment::from_index(Rc::clone(&self.vars), &index);
        Some((index, assignment))
    }
}

/// One evaluated row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub index: BigUint,
    pub assignment: Assignment,
    pub outcome: Result<bool, EvalError>,
    pub diagnostics: Vec<FailedImplication>,
}

/// Row counts of a finished run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Summary {
    pub rows: u64,
    pub satisfied: u64,
    pub falsified: u64,
    pub failed: u64,
    pub diagnostics: u64,
}

impl Summary {
    fn record(&mut self, row: &Row) {
        self.rows += 1;
        match row.outcome {
            Ok(true) => self.satisfied += 1,
            Ok(false) => self.falsified += 1,
            Err(_) => self.failed += 1,
        }
        self.diagnostics += row.diagnostics.len() as u64;
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows: {} true, {} false, {} failed",
            self.rows, self.satisfied, self.falsified, self.failed
        )
    }
}

/// Drives the evaluation of a formula over all assignments of its variables.
///
/// # Examples
///
/// ```
/// use truthtab::config::EvalConfig;
/// use truthtab::node::Node;
/// use truthtab::table::Enumerator;
///
/// let f = Node::implies(Node::symbol("p"), Node::symbol("q"));
/// let table = Enumerator::for_formula(&f, EvalConfig::default()).collect().unwrap();
/// let results: Vec<_> = table.results().collect();
/// // Rows: p=false q=false, p=true q=false, p=false q=true, p=true q=true
/// assert_eq!(results, vec![Some(true), Some(false), Some(true), Some(true)]);
/// ```
#[derive(Debug)]
pub struct Enumerator<'a> {
    root: &'a Node,
    vars: Rc<VarSet>,
    evaluator: Evaluator,
}

impl<'a> Enumerator<'a> {
    /// Creates a driver with an explicitly declared variable order.
    pub fn new(root: &'a Node, vars: VarSet, config: EvalConfig) -> Self {
        Self {
            root,
            vars: Rc::new(vars),
            evaluator: Evaluator::new(config),
        }
    }

    /// Creates a driver over the free variables of `root`, in order of first appearance.
    pub fn for_formula(root: &'a Node, config: EvalConfig) -> Self {
        Self::new(root, root.variables(), config)
    }

    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    /// Number of rows this driver will visit.
    pub fn row_count(&self) -> BigUint {
        row_count(self.vars.len())
    }

    fn eval_row(&self, index: BigUint, assignment: Assignment) -> Row {
        let mut diagnostics = Vec::new();
        let outcome = self.evaluator.evaluate_traced(self.root, &assignment, &mut diagnostics);
        Row {
            index,
            assignment,
            outcome,
            diagnostics,
        }
    }

    /// All rows in order, evaluated lazily.
    ///
    /// Under [`ErrorPolicy::Abort`] the first failing row is yielded as `Err` and iteration ends.
    pub fn rows(&self) -> impl Iterator<Item = Result<Row, EvalError>> + '_ {
        let abort = self.evaluator.config().on_error == ErrorPolicy::Abort;
        let mut done = false;
        Assignments::new(Rc::clone(&self.vars)).map_while(move |(index, assignment)| {
            if done {
                return None;
            }
            let row = self.eval_row(index, assignment);
            match &row.outcome {
                Err(e) if abort => {
                    done = true;
                    Some(Err(e.clone()))
                }
                _ => Some(Ok(row)),
            }
        })
    }

    /// Evaluates every row, handing each one to `report` before the next row is started.
    pub fn run<R>(&self, report: &mut R) -> Result<Summary, RunError>
    where
        R: Report + ?Sized,
    {
        let label = self.root.label();
        debug!("run(formula = {:?}, vars = {:?}, rows = {})", label, self.vars.names(), self.row_count());

        let mut summary = Summary::default();
        for row in self.rows() {
            let row = row.map_err(|e| {
                warn!("aborting \"{}\" after {} rows: {}", label, summary.rows, e);
                e
            })?;
            if let Err(e) = &row.outcome {
                warn!("skipping row {} ({}): {}", row.index, row.assignment, e);
            }
            summary.record(&row);
            report.row(&label, &row)?;
        }

        info!("\"{}\": {}", label, summary);
        Ok(summary)
    }

    /// Evaluates every row and collects the complete table.
    pub fn collect(&self) -> Result<TruthTable, EvalError> {
        let rows = self.rows().collect::<Result<Vec<_>, _>>()?;
        Ok(TruthTable {
            label: self.root.label(),
            vars: Rc::clone(&self.vars),
            rows,
        })
    }
}

/// A fully evaluated truth table.
#[derive(Debug, Clone)]
pub struct TruthTable {
    label: String,
    vars: Rc<VarSet>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row results in order; `None` for rows that failed to evaluate.
    pub fn results(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        self.rows.iter().map(|row| row.outcome.as_ref().ok().copied())
    }

    /// Whether every row evaluates to true.
    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r == Some(true))
    }

    /// Whether every row evaluates to false.
    pub fn is_contradiction(&self) -> bool {
        self.results().all(|r| r == Some(false))
    }

    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|r| r == Some(true))
    }

    /// Assignments of the rows that evaluate to true.
    pub fn models(&self) -> impl Iterator<Item = &Assignment> {
        self.rows
            .iter()
            .filter(|row| row.outcome == Ok(true))
            .map(|row| &row.assignment)
    }
}
