//! Compare factorial implementations.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=interview=debug cargo run --example factorial
//! ```

use interview::prelude::*;
use tracing_subscriber::EnvFilter;

fn iterative(n: u64) -> u64 {
    (1..=n).product()
}

fn recursive(n: u64) -> u64 {
    if n <= 1 { 1 } else { n * recursive(n - 1) }
}

fn fold(n: u64) -> u64 {
    (2..=n).fold(1, |acc, k| acc * k)
}

// Off by one for every input above 3.
fn buggy(n: u64) -> u64 {
    if n <= 3 { iterative(n) } else { iterative(n - 1) * n + 1 }
}

fn main() -> Result<(), InterviewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut interview = Interview::<u64, u64>::new();
    interview
        .add_cases(&[0, 1, 2, 3, 4, 5, 10], &[1, 1, 2, 6, 24, 120, 3_628_800])?
        .add_solutions(&[
            solution!(iterative),
            solution!(recursive),
            solution!(fold),
            solution!(buggy),
        ]);

    interview.print()
}
