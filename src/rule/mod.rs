//! Rule trees — composable validation rules over a single value type
//!
//! A [`Rule<T>`] is an immutable node that is either a leaf test (a
//! caller-supplied closure) or a combinator (`all`, `any`, `not`) over child
//! rules of the same value type. Rules are built once, then evaluated any
//! number of times — including concurrently against different inputs — via
//! [`Rule::validate`], which produces a traceable
//! [`Verdict`](crate::foundation::Verdict) tree.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict::prelude::*;
//!
//! let email = all(vec![
//!     not_empty(),
//!     length_range(3, 254),
//!     contains("@"),
//! ]);
//!
//! let verdict = email.validate(&CancellationToken::new(), &"a@b".to_string());
//! assert!(verdict.ok());
//! ```

mod eval;
pub mod then;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::foundation::{RuleKind, ValidationError};

/// The leaf-test contract: a synchronous closure from (cancellation token,
/// value) to success or a failure description.
///
/// The engine treats the closure as opaque; it may have side effects and may
/// ignore the token (a leaf that ignores it simply runs to completion).
pub type TestFn<T> =
    Arc<dyn Fn(&CancellationToken, &T) -> Result<(), ValidationError> + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// An immutable validation rule over values of type `T`.
///
/// Construct rules with [`test`], [`all`], [`any`], [`not`], [`one_of`],
/// [`group`], or the dynamic [`Rule::combinator`]. Evaluate with
/// [`Rule::validate`].
pub struct Rule<T> {
    label: Cow<'static, str>,
    node: Node<T>,
}

/// Closed node tag: each variant carries only the fields its kind needs,
/// so a leaf can never have children and a combinator never has a closure.
pub(crate) enum Node<T> {
    Test(TestFn<T>),
    All(Vec<Rule<T>>),
    Any(Vec<Rule<T>>),
    Not(Vec<Rule<T>>),
}

impl<T> Rule<T> {
    /// Creates a leaf test rule.
    ///
    /// The closure receives the cancellation token and the value, and returns
    /// `Ok(())` to accept or a [`ValidationError`] whose message becomes the
    /// failing verdict's message.
    pub fn test<F>(label: impl Into<Cow<'static, str>>, test_fn: F) -> Self
    where
        F: Fn(&CancellationToken, &T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            node: Node::Test(Arc::new(test_fn)),
        }
    }

    /// Creates an AND combinator: passes iff every child passes, evaluated
    /// left-to-right, stopping at the first failure.
    ///
    /// Zero children passes vacuously.
    pub fn all(children: Vec<Rule<T>>) -> Self {
        Self {
            label: Cow::Borrowed("all"),
            node: Node::All(children),
        }
    }

    /// Creates an OR combinator: passes iff at least one child passes,
    /// evaluated left-to-right, stopping at the first success.
    ///
    /// Zero children fails (no child could pass).
    pub fn any(children: Vec<Rule<T>>) -> Self {
        Self {
            label: Cow::Borrowed("any"),
            node: Node::Any(children),
        }
    }

    /// Creates a negation rule: passes iff the child fails.
    pub fn not(child: Rule<T>) -> Self {
        Self {
            label: Cow::Borrowed("not"),
            node: Node::Not(vec![child]),
        }
    }

    /// Creates a labeled AND group.
    pub fn group(label: impl Into<Cow<'static, str>>, children: Vec<Rule<T>>) -> Self {
        Self {
            label: label.into(),
            node: Node::All(children),
        }
    }

    /// Dynamic constructor for combinator nodes, for trees built at runtime
    /// (for example from configuration).
    ///
    /// No child-count invariant is enforced here: a `Not` with anything other
    /// than exactly one child degrades to a failing verdict at evaluation
    /// time, never a panic. `RuleKind::Test` has no children form — such a
    /// node fails at evaluation with a fixed diagnostic.
    pub fn combinator(kind: RuleKind, children: Vec<Rule<T>>) -> Self {
        let node = match kind {
            RuleKind::All => Node::All(children),
            RuleKind::Any => Node::Any(children),
            RuleKind::Not => Node::Not(children),
            RuleKind::Test => Node::Test(Arc::new(|_, _| {
                Err(ValidationError::new(
                    "missing_test",
                    "test rule requires a test function",
                ))
            })),
        };
        Self {
            label: Cow::Borrowed(kind.as_str()),
            node,
        }
    }

    /// Replaces the rule's label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// The rule's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule's kind tag.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self.node {
            Node::Test(_) => RuleKind::Test,
            Node::All(_) => RuleKind::All,
            Node::Any(_) => RuleKind::Any,
            Node::Not(_) => RuleKind::Not,
        }
    }

    /// Child rules, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Rule<T>] {
        match &self.node {
            Node::Test(_) => &[],
            Node::All(children) | Node::Any(children) | Node::Not(children) => children,
        }
    }

    pub(crate) fn node(&self) -> &Node<T> {
        &self.node
    }

    pub(crate) fn label_cow(&self) -> Cow<'static, str> {
        self.label.clone()
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            node: match &self.node {
                Node::Test(test_fn) => Node::Test(Arc::clone(test_fn)),
                Node::All(children) => Node::All(children.clone()),
                Node::Any(children) => Node::Any(children.clone()),
                Node::Not(children) => Node::Not(children.clone()),
            },
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Rule");
        out.field("label", &self.label).field("kind", &self.kind());
        if !self.children().is_empty() {
            out.field("children", &self.children());
        }
        out.finish_non_exhaustive()
    }
}

// ============================================================================
// FREE CONSTRUCTORS
// ============================================================================

/// Creates a leaf test rule. See [`Rule::test`].
pub fn test<T, F>(label: impl Into<Cow<'static, str>>, test_fn: F) -> Rule<T>
where
    F: Fn(&CancellationToken, &T) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    Rule::test(label, test_fn)
}

/// Creates an AND combinator. See [`Rule::all`].
pub fn all<T>(children: Vec<Rule<T>>) -> Rule<T> {
    Rule::all(children)
}

/// Creates an OR combinator. See [`Rule::any`].
pub fn any<T>(children: Vec<Rule<T>>) -> Rule<T> {
    Rule::any(children)
}

/// Creates a negation rule. See [`Rule::not`].
pub fn not<T>(child: Rule<T>) -> Rule<T> {
    Rule::not(child)
}

/// Creates a labeled AND group. See [`Rule::group`].
pub fn group<T>(label: impl Into<Cow<'static, str>>, children: Vec<Rule<T>>) -> Rule<T> {
    Rule::group(label, children)
}

/// Creates a rule that passes iff exactly one of the candidates passes.
///
/// Unlike [`any`], every candidate is evaluated — there is no short-circuit,
/// because "exactly one" cannot be decided early. The failure message
/// distinguishes "none passed" (embedding the last candidate failure) from
/// "multiple passed". Zero candidates fails.
pub fn one_of<T: 'static>(candidates: Vec<Rule<T>>) -> Rule<T> {
    Rule::test("one-of", move |token, value| {
        let mut passed = 0usize;
        let mut last_failure: Option<String> = None;

        for candidate in &candidates {
            let verdict = candidate.eval(token, value);
            if verdict.ok() {
                passed += 1;
            } else {
                last_failure = verdict
                    .failure_message()
                    .map(str::to_owned)
                    .or(last_failure);
            }
        }

        match passed {
            1 => Ok(()),
            0 => Err(ValidationError::new(
                "one_of_none",
                format!(
                    "none of the rules passed: {}",
                    last_failure.unwrap_or_default()
                ),
            )),
            _ => Err(ValidationError::new(
                "one_of_many",
                "multiple rules passed (expected exactly one)",
            )),
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================
