//! Recursive evaluation of formula trees.
//!
//! The evaluator walks a [`Node`] tree bottom-up, reading variables from a [`Context`].
//! Every child is evaluated exactly once, and the arity of each node is checked
//! before any of its children are visited.
//!
//! Implications that fail (`true => false`) are recorded as [`FailedImplication`]
//! diagnostics. Diagnostics are informational: they never change the result.

use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::config::{EvalConfig, ExtendedOps};
use crate::context::Context;
use crate::error::{EvalError, Result};
use crate::kind::OpKind;
use crate::node::Node;

/// An implication whose antecedent holds while its consequent does not.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FailedImplication {
    pub antecedent: String,
    pub antecedent_value: bool,
    pub consequent: String,
    pub consequent_value: bool,
}

impl Display for FailedImplication {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed implication \"{}({}) => {}({})\"",
            self.antecedent, self.antecedent_value, self.consequent, self.consequent_value
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates `node` under `ctx`, discarding diagnostics.
    pub fn evaluate<C>(&self, node: &Node, ctx: &C) -> Result<bool>
    where
        C: Context + ?Sized,
    {
        let mut diagnostics = Vec::new();
        self.evaluate_traced(node, ctx, &mut diagnostics)
    }

    /// Evaluates `node` under `ctx`, appending failed implications to `diagnostics`
    /// in the order they are encountered (inner before outer).
    pub fn evaluate_traced<C>(&self, node: &Node, ctx: &C, diagnostics: &mut Vec<FailedImplication>) -> Result<bool>
    where
        C: Context + ?Sized,
    {
        debug!("evaluate(node = {})", node);
        let result = self.eval_node(node, ctx, diagnostics);
        debug!("evaluate => {:?}", result);
        result
    }

    fn eval_node<C>(&self, node: &Node, ctx: &C, diagnostics: &mut Vec<FailedImplication>) -> Result<bool>
    where
        C: Context + ?Sized,
    {
        trace!("eval_node(kind = {:?}, name = {:?})", node.kind(), node.name());
        check_arity(node)?;

        let value = match node.kind() {
            OpKind::Symbol => {
                let name = node.name().unwrap_or_default();
                ctx.lookup(name)
                    .ok_or_else(|| EvalError::UnboundSymbol(name.to_string()))?
            }
            OpKind::True => true,
            OpKind::False => false,
            OpKind::Not => !self.eval_node(&node.children()[0], ctx, diagnostics)?,
            OpKind::And => {
                let (a, b) = self.eval_pair(node, ctx, diagnostics)?;
                a && b
            }
            OpKind::Or => {
                let (a, b) = self.eval_pair(node, ctx, diagnostics)?;
                a || b
            }
            OpKind::Implication => {
                let (p, q) = self.eval_pair(node, ctx, diagnostics)?;
                if p && !q {
                    let failed = FailedImplication {
                        antecedent: node.children()[0].operand_label(),
                        antecedent_value: p,
                        consequent: node.children()[1].operand_label(),
                        consequent_value: q,
                    };
                    debug!("{}", failed);
                    diagnostics.push(failed);
                }
                !p || q
            }
            kind @ (OpKind::Nor | OpKind::Nand | OpKind::Xor) => {
                if self.config.extended == ExtendedOps::Reject {
                    return Err(EvalError::UnsupportedOperator(kind));
                }
                let (a, b) = self.eval_pair(node, ctx, diagnostics)?;
                match kind {
                    OpKind::Nor => !(a || b),
                    OpKind::Nand => !(a && b),
                    _ => a != b,
                }
            }
        };

        Ok(value)
    }

    /// Evaluates both children of a binary node, left first.
    fn eval_pair<C>(&self, node: &Node, ctx: &C, diagnostics: &mut Vec<FailedImplication>) -> Result<(bool, bool)>
    where
        C: Context + ?Sized,
    {
        let a = self.eval_node(&node.children()[0], ctx, diagnostics)?;
        let b = self.eval_node(&node.children()[1], ctx, diagnostics)?;
        Ok((a, b))
    }
}

fn check_arity(node: &Node) -> Result<()> {
    let expected = node.kind().arity();
    let actual = node.children().len();
    if expected != actual {
        return Err(EvalError::Arity {
            kind: node.kind(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Evaluates `node` under `ctx` with the default configuration.
pub fn evaluate<C>(node: &Node, ctx: &C) -> Result<bool>
where
    C: Context + ?Sized,
{
    Evaluator::default().evaluate(node, ctx)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    use test_log::test;

    const BOOLS: [bool; 2] = [false, true];

    fn ctx(p: bool, q: bool) -> HashMap<&'static str, bool> {
        HashMap::from([("p", p), ("q", q)])
    }

    fn pq(f: fn(Node, Node) -> Node) -> Node {
        f(Node::symbol("p"), Node::symbol("q"))
    }

    #[test]
    fn test_connectives() {
        for p in BOOLS {
            for q in BOOLS {
                let c = ctx(p, q);
                assert_eq!(evaluate(&pq(Node::implies), &c), Ok(!p || q));
                assert_eq!(evaluate(&pq(Node::and), &c), Ok(p && q));
                assert_eq!(evaluate(&pq(Node::or), &c), Ok(p || q));
                assert_eq!(evaluate(&pq(Node::nor), &c), Ok(!(p || q)));
                assert_eq!(evaluate(&pq(Node::nand), &c), Ok(!(p && q)));
                assert_eq!(evaluate(&pq(Node::xor), &c), Ok(p != q));
            }
            assert_eq!(evaluate(&Node::not(Node::symbol("p")), &ctx(p, false)), Ok(!p));
        }
    }

    #[test]
    fn test_constants_ignore_context() {
        let empty: HashMap<&str, bool> = HashMap::new();
        assert_eq!(evaluate(&Node::top(), &empty), Ok(true));
        assert_eq!(evaluate(&Node::bottom(), &empty), Ok(false));
        assert_eq!(evaluate(&Node::not(Node::top()), &empty), Ok(false));
    }

    #[test]
    fn test_failed_implication_diagnostic() {
        let evaluator = Evaluator::default();
        let f = pq(Node::implies);

        let mut diagnostics = Vec::new();
        assert_eq!(evaluator.evaluate_traced(&f, &ctx(true, false), &mut diagnostics), Ok(false));
        assert_eq!(
            diagnostics,
            vec![FailedImplication {
                antecedent: "p".to_string(),
                antecedent_value: true,
                consequent: "q".to_string(),
                consequent_value: false,
            }]
        );
        assert_eq!(diagnostics[0].to_string(), "Failed implication \"p(true) => q(false)\"");

        for (p, q) in [(false, false), (false, true), (true, true)] {
            let mut diagnostics = Vec::new();
            assert_eq!(evaluator.evaluate_traced(&f, &ctx(p, q), &mut diagnostics), Ok(true));
            assert!(diagnostics.is_empty());
        }
    }

    #[test]
    fn test_nested_failed_implication_uses_labels() {
        // (p => q) OR k: the inner implication fails but the disjunction holds.
        let f = Node::or(pq(Node::implies), Node::symbol("k"));
        let c = HashMap::from([("p", true), ("q", false), ("k", true)]);
        let mut diagnostics = Vec::new();
        assert_eq!(Evaluator::default().evaluate_traced(&f, &c, &mut diagnostics), Ok(true));
        assert_eq!(diagnostics.len(), 1);

        let g = Node::implies(Node::symbol("p"), Node::or(Node::symbol("q"), Node::symbol("k")));
        let c = HashMap::from([("p", true), ("q", false), ("k", false)]);
        let mut diagnostics = Vec::new();
        assert_eq!(Evaluator::default().evaluate_traced(&g, &c, &mut diagnostics), Ok(false));
        assert_eq!(diagnostics[0].consequent, "(q OR k)");
    }

    #[test]
    fn test_nested_failed_implications_inner_first() {
        // p => (q => r) with p, q true and r false: both implications fail.
        let f = Node::implies(
            Node::symbol("p"),
            Node::implies(Node::symbol("q"), Node::symbol("r")),
        );
        let c = HashMap::from([("p", true), ("q", true), ("r", false)]);
        let mut diagnostics = Vec::new();
        assert_eq!(Evaluator::default().evaluate_traced(&f, &c, &mut diagnostics), Ok(false));
        let lines: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Failed implication \"q(true) => r(false)\"",
                "Failed implication \"p(true) => (q => r)(false)\"",
            ]
        );
    }

    #[test]
    fn test_unbound_symbol() {
        let f = Node::and(Node::symbol("p"), Node::symbol("k"));
        assert_eq!(evaluate(&f, &ctx(true, true)), Err(EvalError::UnboundSymbol("k".to_string())));
    }

    #[test]
    fn test_unbound_symbol_in_consequent_with_false_antecedent() {
        let f = Node::implies(Node::symbol("p"), Node::symbol("k"));
        assert_eq!(evaluate(&f, &ctx(false, false)), Err(EvalError::UnboundSymbol("k".to_string())));
    }

    #[test]
    fn test_not_arity() {
        let c = ctx(true, true);
        let zero = Node::new(OpKind::Not, None, vec![]);
        let two = Node::new(OpKind::Not, None, vec![Node::symbol("p"), Node::symbol("q")]);
        for (node, actual) in [(zero, 0), (two, 2)] {
            assert_eq!(
                evaluate(&node, &c),
                Err(EvalError::Arity {
                    kind: OpKind::Not,
                    expected: 1,
                    actual
                })
            );
        }
    }

    #[test]
    fn test_binary_arity() {
        let c = ctx(true, true);
        for kind in [OpKind::And, OpKind::Or, OpKind::Implication, OpKind::Xor] {
            for actual in [0, 1, 3] {
                let children = vec![Node::symbol("p"); actual];
                let node = Node::new(kind, None, children);
                assert_eq!(
                    evaluate(&node, &c),
                    Err(EvalError::Arity {
                        kind,
                        expected: 2,
                        actual
                    })
                );
            }
        }
    }

    #[test]
    fn test_arity_checked_before_children() {
        // The only child is unbound, so evaluating it first would report `UnboundSymbol`.
        let node = Node::new(OpKind::And, None, vec![Node::symbol("z")]);
        let empty: HashMap<&str, bool> = HashMap::new();
        assert_eq!(
            evaluate(&node, &empty),
            Err(EvalError::Arity {
                kind: OpKind::And,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_strict_checks_arity_first() {
        let evaluator = Evaluator::new(EvalConfig::default().strict());
        let node = Node::new(OpKind::Nand, None, vec![Node::symbol("p")]);
        assert_eq!(
            evaluator.evaluate(&node, &ctx(true, true)),
            Err(EvalError::Arity {
                kind: OpKind::Nand,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_leaf_with_children_is_malformed() {
        let node = Node::new(OpKind::True, None, vec![Node::bottom()]);
        let empty: HashMap<&str, bool> = HashMap::new();
        assert_eq!(
            evaluate(&node, &empty),
            Err(EvalError::Arity {
                kind: OpKind::True,
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_strict_rejects_extended_ops() {
        let evaluator = Evaluator::new(EvalConfig::default().strict());
        let c = ctx(true, false);
        for (f, kind) in [
            (pq(Node::nor), OpKind::Nor),
            (pq(Node::nand), OpKind::Nand),
            (pq(Node::xor), OpKind::Xor),
        ] {
            assert_eq!(evaluator.evaluate(&f, &c), Err(EvalError::UnsupportedOperator(kind)));
        }
        // Core connectives are unaffected.
        assert_eq!(evaluator.evaluate(&pq(Node::implies), &c), Ok(false));
    }

    #[test]
    fn test_error_aborts_whole_pass() {
        // The left subtree fails, so no diagnostic from the right subtree is recorded.
        let f = Node::and(Node::symbol("z"), pq(Node::implies));
        let mut diagnostics = Vec::new();
        let res = Evaluator::default().evaluate_traced(&f, &ctx(true, false), &mut diagnostics);
        assert!(res.is_err());
        assert!(diagnostics.is_empty());
    }
}
