//! # verdict
//!
//! Composable rule-tree validation with traceable verdicts.
//!
//! Build a tree of rules over a value type, evaluate it against one input,
//! and get back a [`Verdict`](foundation::Verdict) describing exactly which
//! sub-rules passed, failed, or were skipped by short-circuiting — not just
//! a boolean.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict::prelude::*;
//!
//! let email = all(vec![not_empty(), length_range(3, 254), contains("@")]);
//!
//! let verdict = email.validate(&CancellationToken::new(), &"test@example.com".to_string());
//! assert!(verdict.ok());
//!
//! let verdict = email.validate(&CancellationToken::new(), &String::new());
//! assert!(!verdict.ok());
//! println!("{verdict}"); // indented trace with [FAIL]/[SKIP] markers
//! ```
//!
//! ## Crossing types
//!
//! A [`then`](rule::then::then) pipeline validates a value, transforms it,
//! and hands the result to a rule over the new type:
//!
//! ```rust,ignore
//! use verdict::prelude::*;
//!
//! let rule = then(not_empty(), parse_int(), in_range(10, 100));
//! ```
//!
//! ## Guarantees
//!
//! - `validate` is total: rejection, cancellation, and malformed trees all
//!   come back as verdict data, never as a panic or a Rust error.
//! - Rule trees are immutable and safe to share across threads; evaluation
//!   of a single input is synchronous and depth-first.
//! - Skipped siblings are never invoked — their closures do not run.

pub mod format;
pub mod foundation;
pub mod prelude;
pub mod rule;
pub mod validators;
