//! Cross-type validation: string input, numeric rules.
//!
//! Run with: `cargo run --example numeric`

use verdict::prelude::*;

fn main() {
    // Validate the raw string, parse it, then validate the number:
    // between 10 and 100, and never 13.
    let rule = then(
        not_empty(),
        parse_int(),
        all(vec![in_range(10i64, 100), not(equal_to(13))]),
    );

    let token = CancellationToken::new();
    for candidate in ["42", "13", "7", "abc", ""] {
        let verdict = rule.validate(&token, &candidate.to_string());
        println!("{candidate:?} -> valid: {}", verdict.ok());
        println!("{verdict}\n");
    }
}
