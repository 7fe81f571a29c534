//! Core data types of the validation engine
//!
//! This module contains the fundamental building blocks the rest of the
//! crate is written against:
//!
//! - **Errors**: [`ValidationError`] — the failure description returned by
//!   leaf tests and transforms
//! - **Verdicts**: [`Verdict`], [`Status`], [`RuleKind`] — the immutable
//!   outcome tree produced by every evaluation
//!
//! Rule construction and evaluation live in [`crate::rule`]; these types are
//! pure data.

pub mod error;
pub mod verdict;

pub use error::ValidationError;
pub use verdict::{RuleKind, Status, Verdict};
