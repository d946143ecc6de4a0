//! Swap two strings, printing field names in the result.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example two_inputs
//! ```

use interview::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Shape)]
struct Pair {
    #[shape(rename = "A")]
    a: String,
    #[shape(rename = "B")]
    b: String,
}

fn pair(a: &str, b: &str) -> Pair {
    Pair {
        a: a.to_string(),
        b: b.to_string(),
    }
}

fn good_swap(a: String, b: String) -> Pair {
    Pair { a: b, b: a }
}

fn bad_swap(a: String, b: String) -> Pair {
    Pair { a, b }
}

fn main() -> Result<(), InterviewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut interview = Interview2::<String, String, Pair>::new();
    interview
        .add_case("hello".into(), "world".into(), pair("world", "hello"))?
        .add_case("123".into(), ".".into(), pair(".", "123"))?
        .add_solutions(&[solution!(good_swap), solution!(bad_swap)])
        .show_field_names();

    interview.print()?;

    for report in interview.check_solution("bad_swap")? {
        println!("\n{report}");
    }
    Ok(())
}
