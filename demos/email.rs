//! Email-shaped validation with a full diagnostic trace.
//!
//! Run with: `cargo run --example email`

use verdict::prelude::*;

fn main() {
    let email = group(
        "email",
        vec![not_empty(), length_range(3, 254), contains("@")],
    );

    let token = CancellationToken::new();
    for candidate in ["test@example.com", "", "a@", "no-at-sign.example"] {
        let verdict = email.validate(&token, &candidate.to_string());
        println!("{candidate:?} -> valid: {}", verdict.ok());
        println!("{verdict}\n");
    }
}
