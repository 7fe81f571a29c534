//! End-to-end engine behavior: short-circuiting, skip marking, negation,
//! one-of, cancellation, and the email-style composition scenario.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use verdict::prelude::*;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Leaf with a call counter, so tests can prove which closures ran.
fn counted(label: &'static str, calls: &Arc<AtomicUsize>, pass: bool) -> Rule<u32> {
    let calls = Arc::clone(calls);
    test(label, move |_, _: &u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        if pass {
            Ok(())
        } else {
            Err(ValidationError::custom("deliberate failure"))
        }
    })
}

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

fn email_rule() -> Rule<String> {
    group(
        "email",
        vec![
            test("not-empty", |_, s: &String| {
                if s.is_empty() {
                    Err(ValidationError::new("not_empty", "value is empty"))
                } else {
                    Ok(())
                }
            }),
            test("len-5-100", |_, s: &String| {
                if (5..=100).contains(&s.len()) {
                    Ok(())
                } else {
                    Err(ValidationError::custom("length out of range"))
                }
            }),
            test("has-at", |_, s: &String| {
                if s.contains('@') {
                    Ok(())
                } else {
                    Err(ValidationError::custom("missing @"))
                }
            }),
        ],
    )
}

// ---------------------------------------------------------------------------
// Short-circuiting
// ---------------------------------------------------------------------------

#[test]
fn all_short_circuits_and_marks_remaining_as_skipped() {
    let (a, b, c) = (counter(), counter(), counter());
    let rule = all(vec![
        counted("a", &a, false),
        counted("b", &b, true),
        counted("c", &c, true),
    ]);

    let verdict = rule.validate(&CancellationToken::new(), &42);

    assert!(!verdict.ok());
    assert_eq!(verdict.children().len(), 3);
    assert_eq!(verdict.children()[0].status(), Status::Fail);
    assert_eq!(verdict.children()[1].status(), Status::Skip);
    assert_eq!(verdict.children()[2].status(), Status::Skip);

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 0);
    assert_eq!(c.load(Ordering::SeqCst), 0);
}

#[test]
fn any_stops_at_first_pass() {
    let (a, b, c) = (counter(), counter(), counter());
    let rule = any(vec![
        counted("a", &a, false),
        counted("b", &b, true),
        counted("c", &c, true),
    ]);

    let verdict = rule.validate(&CancellationToken::new(), &42);

    assert!(verdict.ok());
    assert_eq!(verdict.children()[0].status(), Status::Fail);
    assert_eq!(verdict.children()[1].status(), Status::Pass);
    assert_eq!(verdict.children()[2].status(), Status::Skip);

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
    assert_eq!(c.load(Ordering::SeqCst), 0);
}

#[test]
fn any_with_all_failing_children_fails_without_skips() {
    let rule = any(vec![
        counted("a", &counter(), false),
        counted("b", &counter(), false),
    ]);
    let verdict = rule.validate(&CancellationToken::new(), &42);

    assert!(!verdict.ok());
    assert_eq!(verdict.children()[0].status(), Status::Fail);
    assert_eq!(verdict.children()[1].status(), Status::Fail);
}

#[test]
fn empty_combinators() {
    let token = CancellationToken::new();
    assert!(all::<u32>(vec![]).validate(&token, &0).ok());
    assert!(!any::<u32>(vec![]).validate(&token, &0).ok());
}

// ---------------------------------------------------------------------------
// Negation
// ---------------------------------------------------------------------------

#[test]
fn not_inverts_pass_and_fail() {
    let token = CancellationToken::new();

    let verdict = not(counted("p", &counter(), true)).validate(&token, &0);
    assert_eq!(verdict.status(), Status::Fail);
    assert_eq!(verdict.message(), Some("not rule failed (child passed)"));

    let verdict = not(counted("f", &counter(), false)).validate(&token, &0);
    assert_eq!(verdict.status(), Status::Pass);
}

#[test]
fn malformed_not_degrades_to_failure() {
    let token = CancellationToken::new();

    for children in [
        vec![],
        vec![counted("a", &counter(), true), counted("b", &counter(), true)],
    ] {
        let verdict = Rule::combinator(RuleKind::Not, children).validate(&token, &0);
        assert_eq!(verdict.status(), Status::Fail);
        assert_eq!(verdict.message(), Some("not rule must have exactly one child"));
    }
}

// ---------------------------------------------------------------------------
// One-of
// ---------------------------------------------------------------------------

#[test]
fn one_of_passes_iff_exactly_one_candidate_passes() {
    let token = CancellationToken::new();

    let exactly_one = one_of(vec![
        counted("a", &counter(), true),
        counted("b", &counter(), false),
    ]);
    assert!(exactly_one.validate(&token, &0).ok());

    let both_pass = one_of(vec![
        counted("a", &counter(), true),
        counted("b", &counter(), true),
    ]);
    let verdict = both_pass.validate(&token, &0);
    assert!(!verdict.ok());
    assert_eq!(
        verdict.message(),
        Some("multiple rules passed (expected exactly one)")
    );

    let none_pass = one_of(vec![
        counted("a", &counter(), false),
        counted("b", &counter(), false),
    ]);
    let verdict = none_pass.validate(&token, &0);
    assert!(!verdict.ok());
    assert_eq!(
        verdict.message(),
        Some("none of the rules passed: deliberate failure")
    );
}

#[test]
fn one_of_evaluates_every_candidate() {
    let (a, b, c) = (counter(), counter(), counter());
    let rule = one_of(vec![
        counted("a", &a, true),
        counted("b", &b, true),
        counted("c", &c, false),
    ]);

    rule.validate(&CancellationToken::new(), &0);

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
    assert_eq!(c.load(Ordering::SeqCst), 1);
}

#[test]
fn one_of_with_no_candidates_fails() {
    let verdict = one_of::<u32>(vec![]).validate(&CancellationToken::new(), &0);
    assert!(!verdict.ok());
    assert_eq!(verdict.message(), Some("none of the rules passed: "));
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[test]
fn pre_cancelled_token_fails_root_without_running_leaves() {
    let calls = counter();
    let rule = all(vec![
        counted("a", &calls, true),
        any(vec![counted("b", &calls, true)]),
    ]);

    let token = CancellationToken::new();
    token.cancel();
    let verdict = rule.validate(&token, &0);

    assert_eq!(verdict.status(), Status::Fail);
    assert_eq!(verdict.message(), Some("context cancelled"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn cancellation_mid_tree_stops_later_siblings() {
    // The first leaf cancels the token itself; the sibling then observes it.
    let token = CancellationToken::new();
    let calls = counter();
    let cancelling = {
        let token = token.clone();
        test("cancel-self", move |_, _: &u32| {
            token.cancel();
            Ok(())
        })
    };
    let rule = all(vec![cancelling, counted("late", &calls, true)]);

    let verdict = rule.validate(&token, &0);

    assert!(!verdict.ok());
    assert_eq!(verdict.children()[0].status(), Status::Pass);
    assert_eq!(verdict.children()[1].status(), Status::Fail);
    assert_eq!(verdict.children()[1].message(), Some("context cancelled"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn email_rule_accepts_valid_address() {
    let verdict = email_rule().validate(&CancellationToken::new(), &"test@example.com".to_string());

    assert!(verdict.ok());
    assert_eq!(verdict.children().len(), 3);
    assert!(verdict.children().iter().all(|c| c.status() == Status::Pass));
}

#[test]
fn email_rule_rejects_empty_input_with_skips() {
    let verdict = email_rule().validate(&CancellationToken::new(), &String::new());

    assert!(!verdict.ok());
    assert_eq!(verdict.children()[0].status(), Status::Fail);
    assert_eq!(verdict.children()[0].message(), Some("value is empty"));
    assert_eq!(verdict.children()[1].status(), Status::Skip);
    assert_eq!(verdict.children()[2].status(), Status::Skip);
}

#[test]
fn ok_never_disagrees_with_status() {
    let token = CancellationToken::new();
    for input in ["", "abc", "test@example.com"] {
        let verdict = email_rule().validate(&token, &input.to_string());
        assert_eq!(verdict.ok(), verdict.status() == Status::Pass);
    }
}

#[test]
fn rendered_trace_matches_expected_layout() {
    let verdict = email_rule().validate(&CancellationToken::new(), &String::new());

    assert_eq!(
        render(&verdict),
        "[FAIL] email (all)\n\
         \x20 [FAIL] not-empty (test): value is empty\n\
         \x20 [SKIP] len-5-100 (test)\n\
         \x20 [SKIP] has-at (test)"
    );
}

#[test]
fn shared_rule_evaluates_concurrently() {
    let rule = Arc::new(email_rule());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rule = Arc::clone(&rule);
            std::thread::spawn(move || {
                let input = format!("user{i}@example.com");
                rule.validate(&CancellationToken::new(), &input).ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("evaluation thread panicked"));
    }
}

#[test]
fn verdict_serializes_for_export() {
    let verdict = email_rule().validate(&CancellationToken::new(), &String::new());
    let value = serde_json::to_value(&verdict).expect("verdicts are serializable");

    assert_eq!(value["status"], "fail");
    assert_eq!(value["kind"], "all");
    assert_eq!(value["children"][1]["status"], "skip");
}
