//! String leaf validators
//!
//! Ready-made leaves over `String` values: length, emptiness, substring,
//! suffix, and equality checks. Each factory returns an ordinary
//! [`Rule<String>`] built on the leaf-test contract; none of them inspect
//! the cancellation token.

use crate::foundation::ValidationError;
use crate::rule::Rule;

/// Rule that rejects the empty string.
#[must_use]
pub fn not_empty() -> Rule<String> {
    Rule::test("not-empty", |_, value: &String| {
        if value.is_empty() {
            Err(ValidationError::new("not_empty", "value is empty"))
        } else {
            Ok(())
        }
    })
}

/// Rule that requires the string's byte length to be within `min..=max`.
#[must_use]
pub fn length_range(min: usize, max: usize) -> Rule<String> {
    Rule::test("length-range", move |_, value: &String| {
        let length = value.len();
        if length < min {
            return Err(ValidationError::new(
                "too_short",
                format!("string too short (min: {min}, got: {length})"),
            )
            .with_param("min", min.to_string())
            .with_param("got", length.to_string()));
        }
        if length > max {
            return Err(ValidationError::new(
                "too_long",
                format!("string too long (max: {max}, got: {length})"),
            )
            .with_param("max", max.to_string())
            .with_param("got", length.to_string()));
        }
        Ok(())
    })
}

/// Rule that requires the string to contain `substring`.
#[must_use]
pub fn contains(substring: impl Into<String>) -> Rule<String> {
    let substring = substring.into();
    Rule::test("contains", move |_, value: &String| {
        if value.contains(&substring) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "contains",
                format!("string does not contain {substring}"),
            ))
        }
    })
}

/// Rule that requires the string to end with `suffix`.
#[must_use]
pub fn ends_with(suffix: impl Into<String>) -> Rule<String> {
    let suffix = suffix.into();
    Rule::test("ends-with", move |_, value: &String| {
        if value.ends_with(&suffix) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "ends_with",
                format!("string does not end with {suffix}"),
            ))
        }
    })
}

/// Rule that requires the string to equal `expected`.
#[must_use]
pub fn equals(expected: impl Into<String>) -> Rule<String> {
    let expected = expected.into();
    Rule::test("equals", move |_, value: &String| {
        if *value == expected {
            Ok(())
        } else {
            Err(ValidationError::new(
                "equals",
                format!("string is not {expected}"),
            ))
        }
    })
}
