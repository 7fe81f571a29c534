//! Failure descriptions produced by leaf tests and transforms
//!
//! A [`ValidationError`] is the value a caller-supplied closure returns to
//! reject an input. It carries a machine-readable code, a human-readable
//! message, and optional parameters for message templating.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured failure description with a code, message, and parameters.
///
/// The engine renders the message into the failing verdict node; the code and
/// params stay available for programmatic handling while the error is in
/// flight.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict::foundation::ValidationError;
///
/// // Static strings — zero allocation:
/// let error = ValidationError::new("not_empty", "value is empty");
///
/// // Dynamic strings — allocates only when needed:
/// let error = ValidationError::new("too_short", format!("need at least {} chars", 5))
///     .with_param("min", "5")
///     .with_param("got", "3");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_empty", "too_short", "not_numeric"
    pub code: Cow<'static, str>,

    /// Human-readable message. This is what ends up in the verdict.
    pub message: Cow<'static, str>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    /// Example: `[("min", "5"), ("got", "3")]`
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates a "custom" error carrying only a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

// ============================================================================
// TESTS
// ============================================================================
