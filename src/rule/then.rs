//! Type-narrowing pipelines
//!
//! A [`Then<T, U>`] composes a rule over `T`, a fallible transform
//! `T -> U`, and a rule over `U` into a single evaluable unit over `T`: the
//! first rule must pass before the transform is attempted, and the second
//! rule only ever sees a value obtained from a successful transform.
//!
//! Pipelines chain across more than two types with [`Then::then`], which
//! composes the transforms; [`narrow`] instead collapses a transform plus an
//! inner rule into a single leaf rule, trading the inner trace for
//! embeddability in a plain rule tree.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict::prelude::*;
//!
//! // String rule -> parse -> integer rule
//! let pipeline = then(not_empty(), parse_int(), in_range(10, 100));
//!
//! let verdict = pipeline.validate(&CancellationToken::new(), &"42".to_string());
//! assert!(verdict.ok());
//! ```

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::foundation::{RuleKind, Status, ValidationError, Verdict};
use crate::rule::Rule;
use crate::rule::eval::CANCELLED_MESSAGE;

/// The transform contract: a fallible conversion from `&T` to an owned `U`.
pub type TransformFn<T, U> = Arc<dyn Fn(&T) -> Result<U, ValidationError> + Send + Sync>;

/// Label and kind carried by pipeline verdicts. Pipelines are not rule-tree
/// nodes, so they borrow the leaf tag.
const THEN_LABEL: &str = "then";

// ============================================================================
// THEN PIPELINE
// ============================================================================

/// A type-narrowing pipeline from `T` to `U`.
pub struct Then<T, U> {
    first: Rule<T>,
    transform: TransformFn<T, U>,
    second: Rule<U>,
}

impl<T: 'static, U: 'static> Then<T, U> {
    /// Creates a pipeline: `first` over the original value, a fallible
    /// `transform`, and `second` over the transformed value.
    pub fn new<F>(first: Rule<T>, transform: F, second: Rule<U>) -> Self
    where
        F: Fn(&T) -> Result<U, ValidationError> + Send + Sync + 'static,
    {
        Self {
            first,
            transform: Arc::new(transform),
            second,
        }
    }

    /// The rule evaluated against the original value.
    #[must_use]
    pub fn first(&self) -> &Rule<T> {
        &self.first
    }

    /// The rule evaluated against the transformed value.
    #[must_use]
    pub fn second(&self) -> &Rule<U> {
        &self.second
    }

    /// Evaluates the pipeline against `value`, producing the full verdict.
    ///
    /// Stages run in order and stop at the first failure:
    ///
    /// 1. `first` is evaluated against `value`; on failure the transform is
    ///    never invoked and the verdict's single child is `first`'s verdict.
    /// 2. the transform is applied; on failure the verdict embeds the
    ///    transform error and keeps `first`'s (passing) verdict as its child.
    /// 3. `second` is evaluated against the transformed value; the pipeline
    ///    passes iff `second` passes, and both sub-verdicts become children,
    ///    in stage order.
    ///
    /// The cancellation token is polled at pipeline entry exactly as at a
    /// tree node.
    pub fn validate(&self, token: &CancellationToken, value: &T) -> Verdict {
        tracing::debug!(
            first = %self.first.label(),
            second = %self.second.label(),
            "evaluating pipeline"
        );

        if token.is_cancelled() {
            return Verdict::fail(THEN_LABEL, RuleKind::Test).with_message(CANCELLED_MESSAGE);
        }

        let first_verdict = self.first.eval(token, value);
        if first_verdict.status() == Status::Fail {
            return Verdict::fail(THEN_LABEL, RuleKind::Test)
                .with_message("first rule failed")
                .with_children(vec![first_verdict]);
        }

        let transformed = match (self.transform)(value) {
            Ok(transformed) => transformed,
            Err(error) => {
                return Verdict::fail(THEN_LABEL, RuleKind::Test)
                    .with_message(format!("transform failed: {error}"))
                    .with_children(vec![first_verdict]);
            }
        };

        let second_verdict = self.second.eval(token, &transformed);
        let verdict = match second_verdict.status() {
            Status::Pass => Verdict::pass(THEN_LABEL, RuleKind::Test),
            Status::Fail => {
                Verdict::fail(THEN_LABEL, RuleKind::Test).with_message("second rule failed")
            }
            Status::Skip => Verdict::skipped(THEN_LABEL, RuleKind::Test),
        };
        verdict.with_children(vec![first_verdict, second_verdict])
    }

    /// Chains a further transform and rule, producing a `Then<T, V>`.
    ///
    /// The result behaves identically to a single pipeline whose transform is
    /// the composition of the two transforms: `first` is evaluated, then the
    /// composed transform (stopping at whichever stage fails), then `next`.
    /// The terminal rule of `self` is replaced by `next`.
    pub fn then<V, F>(self, transform: F, next: Rule<V>) -> Then<T, V>
    where
        V: 'static,
        F: Fn(&U) -> Result<V, ValidationError> + Send + Sync + 'static,
    {
        let previous = self.transform;
        Then {
            first: self.first,
            transform: Arc::new(move |value: &T| {
                let intermediate = previous(value)?;
                transform(&intermediate)
            }),
            second: next,
        }
    }
}

impl<T, U> Clone for Then<T, U> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            transform: Arc::clone(&self.transform),
            second: self.second.clone(),
        }
    }
}

impl<T, U> fmt::Debug for Then<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Then")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Then`] pipeline. See [`Then::new`].
pub fn then<T, U, F>(first: Rule<T>, transform: F, second: Rule<U>) -> Then<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> Result<U, ValidationError> + Send + Sync + 'static,
{
    Then::new(first, transform, second)
}

// ============================================================================
// NARROW
// ============================================================================

/// Wraps a transform and an inner rule as a single leaf rule over `T`.
///
/// Unlike [`then`], the result is an ordinary [`Rule<T>`] and can be nested
/// anywhere in a rule tree; the price is that the inner rule's trace is
/// collapsed into the leaf's failure message.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict::prelude::*;
///
/// let rule = all(vec![
///     not_empty(),
///     narrow("as-number", parse_int(), in_range(10, 100)),
/// ]);
/// ```
pub fn narrow<T, U, F>(
    label: impl Into<std::borrow::Cow<'static, str>>,
    transform: F,
    rule: Rule<U>,
) -> Rule<T>
where
    U: 'static,
    F: Fn(&T) -> Result<U, ValidationError> + Send + Sync + 'static,
{
    Rule::test(label, move |token, value| {
        let narrowed = transform(value).map_err(|error| {
            ValidationError::new("transform_failed", format!("transform failed: {error}"))
        })?;

        let verdict = rule.eval(token, &narrowed);
        if verdict.ok() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "narrow_failed",
                format!(
                    "validation failed: {}",
                    verdict.failure_message().unwrap_or_default()
                ),
            ))
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================
