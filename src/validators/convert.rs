//! Transforms for pipeline stages
//!
//! These factories return closures satisfying the transform contract of
//! [`then`](crate::rule::then::then) and [`narrow`](crate::rule::then::narrow):
//! a fallible conversion from the pipeline's current type to the next one.

use crate::foundation::ValidationError;

/// Transform from a string to its UTF-8 bytes. Infallible, but typed
/// fallibly to satisfy the transform contract.
pub fn as_bytes() -> impl Fn(&String) -> Result<Vec<u8>, ValidationError> + Send + Sync + 'static {
    |value: &String| Ok(value.clone().into_bytes())
}

/// Transform that parses a string as a signed integer.
pub fn parse_int() -> impl Fn(&String) -> Result<i64, ValidationError> + Send + Sync + 'static {
    |value: &String| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new("not_numeric", "value is not numeric"))
    }
}
