//! Solutions over byte slices, shown as text.
//!
//! `to_upper_in_place` mutates its input; every run still starts from the
//! registered case.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example byte_slice
//! ```

use interview::prelude::*;
use tracing_subscriber::EnvFilter;

fn to_upper_in_place(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.make_ascii_uppercase();
    bytes
}

fn to_upper_copy(bytes: Vec<u8>) -> Vec<u8> {
    bytes.iter().map(u8::to_ascii_uppercase).collect()
}

fn first_only(mut bytes: Vec<u8>) -> Vec<u8> {
    if let Some(first) = bytes.first_mut() {
        first.make_ascii_uppercase();
    }
    bytes
}

fn main() -> Result<(), InterviewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut interview = Interview::<Vec<u8>, Vec<u8>>::new();
    interview
        .add_case_text("hello world", "HELLO WORLD")?
        .add_case_text("helloWORLD", "HELLOWORLD")?
        .add_case_text("", "")?
        .add_solutions(&[
            solution!(to_upper_in_place),
            solution!(to_upper_copy),
            solution!(first_only),
        ])
        .show_bytes_as_text();

    interview.print()
}
