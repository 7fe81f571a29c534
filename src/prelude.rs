//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict::prelude::*;` import that brings in the
//! core types, rule constructors, the validator catalogue, and the
//! cancellation token.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict::prelude::*;
//!
//! let rule = all(vec![not_empty(), length_range(3, 254), contains("@")]);
//! let verdict = rule.validate(&CancellationToken::new(), &"a@b".to_string());
//! assert!(verdict.ok());
//! ```

// ============================================================================
// FOUNDATION: Core data types
// ============================================================================

pub use crate::foundation::{RuleKind, Status, ValidationError, Verdict};

// ============================================================================
// RULES: Constructors and pipelines
// ============================================================================

pub use crate::rule::then::{Then, narrow, then};
pub use crate::rule::{Rule, TestFn, all, any, group, not, one_of, test};

// ============================================================================
// VALIDATORS: The built-in catalogue
// ============================================================================

pub use crate::validators::{
    as_bytes, bytes_max, bytes_min, contains, ends_with, equal_to, equals, in_range, length_range,
    not_empty, parse_int, required, valid_utf8,
};

// ============================================================================
// FORMATTING AND CANCELLATION
// ============================================================================

pub use crate::format::render;
pub use tokio_util::sync::CancellationToken;
