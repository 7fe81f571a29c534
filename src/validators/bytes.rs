//! Byte-slice leaf validators
//!
//! Length and encoding checks over `Vec<u8>` values, typically used as the
//! second stage of a pipeline after [`as_bytes`](crate::validators::as_bytes).

use crate::foundation::ValidationError;
use crate::rule::Rule;

/// Rule that requires at least `min` bytes.
#[must_use]
pub fn bytes_min(min: usize) -> Rule<Vec<u8>> {
    Rule::test("bytes-min", move |_, value: &Vec<u8>| {
        let length = value.len();
        if length < min {
            Err(ValidationError::new(
                "bytes_min",
                format!("bytes too short (min: {min}, got: {length})"),
            )
            .with_param("min", min.to_string())
            .with_param("got", length.to_string()))
        } else {
            Ok(())
        }
    })
}

/// Rule that allows at most `max` bytes.
#[must_use]
pub fn bytes_max(max: usize) -> Rule<Vec<u8>> {
    Rule::test("bytes-max", move |_, value: &Vec<u8>| {
        let length = value.len();
        if length > max {
            Err(ValidationError::new(
                "bytes_max",
                format!("bytes too long (max: {max}, got: {length})"),
            )
            .with_param("max", max.to_string())
            .with_param("got", length.to_string()))
        } else {
            Ok(())
        }
    })
}

/// Rule that requires the bytes to be valid UTF-8.
#[must_use]
pub fn valid_utf8() -> Rule<Vec<u8>> {
    Rule::test("valid-utf8", |_, value: &Vec<u8>| {
        if std::str::from_utf8(value).is_ok() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_utf8",
                "bytes are not valid UTF-8",
            ))
        }
    })
}
