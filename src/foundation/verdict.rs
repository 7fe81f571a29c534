//! The verdict tree — the traceable outcome of one evaluation
//!
//! A [`Verdict`] mirrors the shape of the rule tree actually visited during
//! one evaluation: every node carries the label and kind of its source rule,
//! a [`Status`], an optional failure message, and the verdicts of its
//! children — including [`Status::Skip`] placeholders for siblings that
//! short-circuiting prevented from being evaluated.
//!
//! Verdicts are constructed only by the evaluation engine, never mutated
//! afterwards, and owned exclusively by the caller that receives them.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// STATUS
// ============================================================================

/// Outcome of evaluating a single rule node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The rule accepted the value.
    Pass,
    /// The rule rejected the value (or was cancelled, or was malformed).
    Fail,
    /// The rule was never evaluated because a sibling short-circuited.
    Skip,
}

impl Status {
    /// Lowercase name, as used in rendered and serialized verdicts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Skip => "skip",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULE KIND
// ============================================================================

/// The closed set of rule node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// A leaf test backed by a caller-supplied closure.
    Test,
    /// AND over children; stops at the first failure.
    All,
    /// OR over children; stops at the first success.
    Any,
    /// Negation of exactly one child.
    Not,
}

impl RuleKind {
    /// Lowercase name, as used in rendered and serialized verdicts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Test => "test",
            RuleKind::All => "all",
            RuleKind::Any => "any",
            RuleKind::Not => "not",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// The immutable outcome tree produced by evaluating a rule against one value.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict::prelude::*;
///
/// let rule = all(vec![not_empty(), contains("@")]);
/// let verdict = rule.validate(&CancellationToken::new(), &"a@b".to_string());
///
/// assert!(verdict.ok());
/// assert_eq!(verdict.children().len(), 2);
/// println!("{verdict}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    status: Status,
    label: Cow<'static, str>,
    kind: RuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Verdict>,
}

impl Verdict {
    pub(crate) fn new(status: Status, label: impl Into<Cow<'static, str>>, kind: RuleKind) -> Self {
        Self {
            status,
            label: label.into(),
            kind,
            message: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn pass(label: impl Into<Cow<'static, str>>, kind: RuleKind) -> Self {
        Self::new(Status::Pass, label, kind)
    }

    pub(crate) fn fail(label: impl Into<Cow<'static, str>>, kind: RuleKind) -> Self {
        Self::new(Status::Fail, label, kind)
    }

    pub(crate) fn skipped(label: impl Into<Cow<'static, str>>, kind: RuleKind) -> Self {
        Self::new(Status::Skip, label, kind)
    }

    #[must_use = "builder methods must be chained or built"]
    pub(crate) fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub(crate) fn with_children(mut self, children: Vec<Verdict>) -> Self {
        self.children = children;
        self
    }

    /// True iff the overall evaluation passed.
    ///
    /// Equivalent to `self.status() == Status::Pass`; the two never disagree.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.status == Status::Pass
    }

    /// Status of this node.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Label copied from the source rule node.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Kind copied from the source rule node.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Failure message, present on failing and synthetic nodes.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Child verdicts, in the declaration order of the source rule's children.
    #[must_use]
    pub fn children(&self) -> &[Verdict] {
        &self.children
    }

    /// Total number of nodes in this verdict tree (including this one).
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Verdict::node_count).sum::<usize>()
    }

    /// First failure message found in this tree (depth-first).
    ///
    /// Only failing branches are searched, so a passing `not` node never
    /// reports the message of the child it inverted.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        if self.status != Status::Fail {
            return None;
        }
        if let Some(message) = self.message.as_deref() {
            return Some(message);
        }
        self.children.iter().find_map(Verdict::failure_message)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::render(self))
    }
}

// ============================================================================
// TESTS
// ============================================================================
