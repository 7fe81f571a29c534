//! Numeric leaf validators
//!
//! Generic over any ordered, displayable value type, so the same factories
//! serve `i64`, `f64`, or anything comparable.

use std::fmt::Display;

use crate::foundation::ValidationError;
use crate::rule::Rule;

/// Rule that requires `min <= value <= max`.
#[must_use]
pub fn in_range<T>(min: T, max: T) -> Rule<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::test("in-range", move |_, value: &T| {
        if value < &min || value > &max {
            Err(ValidationError::new(
                "out_of_range",
                format!("value must be between {min} and {max} (got: {value})"),
            )
            .with_param("min", min.to_string())
            .with_param("max", max.to_string()))
        } else {
            Ok(())
        }
    })
}

/// Rule that requires the value to equal `expected`.
#[must_use]
pub fn equal_to<T>(expected: T) -> Rule<T>
where
    T: PartialEq + Display + Send + Sync + 'static,
{
    Rule::test("equal-to", move |_, value: &T| {
        if *value == expected {
            Ok(())
        } else {
            Err(ValidationError::new(
                "not_equal",
                format!("value is not {expected}"),
            ))
        }
    })
}
