//! Human-readable verdict rendering
//!
//! A pure presentation layer over the verdict tree: one node per line,
//! indented two spaces per depth, with a status marker, the node's label and
//! kind, and the failure message where present. Consumes the verdict
//! strictly through its public shape.
//!
//! ```text
//! [FAIL] email (all)
//!   [FAIL] not-empty (test): value is empty
//!   [SKIP] length-range (test)
//!   [SKIP] contains (test)
//! ```

use std::fmt::Write;

use crate::foundation::{Status, Verdict};

/// Renders a verdict tree as indented text, one node per line.
#[must_use]
pub fn render(verdict: &Verdict) -> String {
    let mut out = String::new();
    render_into(verdict, 0, &mut out);
    out
}

fn render_into(verdict: &Verdict, depth: usize, out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }

    let marker = match verdict.status() {
        Status::Pass => "[PASS]",
        Status::Fail => "[FAIL]",
        Status::Skip => "[SKIP]",
    };
    // String's fmt::Write never fails; ignore the Ok.
    let _ = write!(out, "{marker} {} ({})", verdict.label(), verdict.kind());
    if let Some(message) = verdict.message() {
        let _ = write!(out, ": {message}");
    }

    for child in verdict.children() {
        render_into(child, depth + 1, out);
    }
}

// ============================================================================
// TESTS
// ============================================================================
