//! The evaluation engine
//!
//! Depth-first, synchronous, single-threaded recursion over a rule tree.
//! Siblings are evaluated strictly in declaration order, because the
//! short-circuit and skip-marking semantics depend on ordering. The
//! cancellation token is polled (non-blockingly) at entry to every node; the
//! first node visited after the token fires reports a failing verdict with
//! the fixed message `"context cancelled"` and its subtree is not entered.
//!
//! `validate` is total: business-rule failures, structural misuse (a
//! malformed `not`), and cancellation are all represented as verdict data,
//! never as a panic or an `Err`.

use tokio_util::sync::CancellationToken;

use crate::foundation::{RuleKind, Status, Verdict};
use crate::rule::{Node, Rule};

/// Fixed message reported by the node at which cancellation is observed.
pub(crate) const CANCELLED_MESSAGE: &str = "context cancelled";

impl<T> Rule<T> {
    /// Evaluates this rule against `value`, producing the full verdict tree.
    ///
    /// Always returns a verdict; check [`Verdict::ok`] for the overall
    /// outcome and inspect the tree for diagnostics on failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use verdict::prelude::*;
    ///
    /// let rule = all(vec![not_empty(), contains("@")]);
    /// let verdict = rule.validate(&CancellationToken::new(), &"a@b".to_string());
    ///
    /// if !verdict.ok() {
    ///     eprintln!("{verdict}");
    /// }
    /// ```
    pub fn validate(&self, token: &CancellationToken, value: &T) -> Verdict {
        tracing::debug!(label = %self.label(), kind = %self.kind(), "evaluating rule tree");
        self.eval(token, value)
    }

    pub(crate) fn eval(&self, token: &CancellationToken, value: &T) -> Verdict {
        if token.is_cancelled() {
            tracing::trace!(label = %self.label(), "cancellation token fired, aborting subtree");
            return Verdict::fail(self.label_cow(), self.kind()).with_message(CANCELLED_MESSAGE);
        }

        match self.node() {
            Node::Test(test_fn) => match test_fn(token, value) {
                Ok(()) => Verdict::pass(self.label_cow(), RuleKind::Test),
                Err(error) => {
                    Verdict::fail(self.label_cow(), RuleKind::Test).with_message(error.to_string())
                }
            },
            Node::All(children) => self.eval_all(token, value, children),
            Node::Any(children) => self.eval_any(token, value, children),
            Node::Not(children) => self.eval_not(token, value, children),
        }
    }

    fn eval_all(&self, token: &CancellationToken, value: &T, rules: &[Rule<T>]) -> Verdict {
        let mut children = Vec::with_capacity(rules.len());

        for (index, child) in rules.iter().enumerate() {
            let child_verdict = child.eval(token, value);
            let failed = child_verdict.status() == Status::Fail;
            children.push(child_verdict);

            if failed {
                // Remaining siblings are never evaluated, only marked.
                children.extend(rules[index + 1..].iter().map(Rule::skip_placeholder));
                return Verdict::fail(self.label_cow(), RuleKind::All).with_children(children);
            }
        }

        Verdict::pass(self.label_cow(), RuleKind::All).with_children(children)
    }

    fn eval_any(&self, token: &CancellationToken, value: &T, rules: &[Rule<T>]) -> Verdict {
        let mut children = Vec::with_capacity(rules.len());

        for (index, child) in rules.iter().enumerate() {
            let child_verdict = child.eval(token, value);
            let passed = child_verdict.status() == Status::Pass;
            children.push(child_verdict);

            if passed {
                children.extend(rules[index + 1..].iter().map(Rule::skip_placeholder));
                return Verdict::pass(self.label_cow(), RuleKind::Any).with_children(children);
            }
        }

        Verdict::fail(self.label_cow(), RuleKind::Any).with_children(children)
    }

    fn eval_not(&self, token: &CancellationToken, value: &T, rules: &[Rule<T>]) -> Verdict {
        // Structural misuse degrades to a failing verdict, keeping
        // evaluation total even for a misbuilt tree.
        let [child] = rules else {
            return Verdict::fail(self.label_cow(), RuleKind::Not)
                .with_message("not rule must have exactly one child");
        };

        let child_verdict = child.eval(token, value);
        let verdict = match child_verdict.status() {
            Status::Pass => Verdict::fail(self.label_cow(), RuleKind::Not)
                .with_message("not rule failed (child passed)"),
            Status::Fail => Verdict::pass(self.label_cow(), RuleKind::Not),
            // A skipped child is unreachable through the public combinators,
            // but negating an unevaluated result has no defined meaning, so
            // the skip propagates instead of being inverted.
            Status::Skip => Verdict::skipped(self.label_cow(), RuleKind::Not),
        };
        verdict.with_children(vec![child_verdict])
    }

    fn skip_placeholder(&self) -> Verdict {
        Verdict::skipped(self.label_cow(), self.kind())
    }
}

// ============================================================================
// TESTS
// ============================================================================
