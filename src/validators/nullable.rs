//! Presence validators over `Option<T>`

use crate::foundation::ValidationError;
use crate::rule::Rule;

/// Rule that rejects `None`.
///
/// Validating the inner value is a separate concern; compose with a pipeline
/// whose transform unwraps the option when the contents matter.
#[must_use]
pub fn required<T: 'static>() -> Rule<Option<T>> {
    Rule::test("required", |_, value: &Option<T>| {
        if value.is_none() {
            Err(ValidationError::new("required", "value is required"))
        } else {
            Ok(())
        }
    })
}
