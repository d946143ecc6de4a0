#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::items_after_test_module)]

//! # Interview
//!
//! A small harness for comparing candidate solutions to a programming
//! problem. Register test cases (inputs and expected output) and any number
//! of named solutions, then print a receipt per solution showing every case
//! as an aligned pass/fail line.
//!
//! ## Quick Start
//!
//! ```rust
//! use interview::Interview;
//!
//! fn factorial(n: u64) -> u64 {
//!     (1..=n).product()
//! }
//!
//! fn square(n: u64) -> u64 {
//!     n * n
//! }
//!
//! let mut interview = Interview::<u64, u64>::new();
//! interview.add_cases(&[3, 4], &[6, 24]).unwrap();
//! interview.add_solution("factorial", factorial);
//! interview.add_solution("square", square);
//!
//! assert_eq!(
//!     interview.all_solutions_to_string(),
//!     "factorial\n=========\n(OK) 3 -> 6\n(OK) 4 -> 24\n\n\
//!      square\n======\n(  ) 3 -> 9 != 6\n(  ) 4 -> 16 != 24"
//! );
//! ```
//!
//! ## Case Types
//!
//! Inputs and outputs implement [`Shape`]: scalars, strings, `Vec`, arrays,
//! maps, `Option`, `Box`, `Rc` and tuples do already, and structs can derive
//! it:
//!
//! ```rust
//! use interview::{Interview2, Shape};
//!
//! #[derive(Shape)]
//! struct Pair {
//!     #[shape(rename = "A")]
//!     a: String,
//!     #[shape(rename = "B")]
//!     b: String,
//! }
//!
//! let mut interview = Interview2::<String, String, Pair>::new();
//! interview
//!     .add_case("hello".into(), "world".into(), Pair { a: "world".into(), b: "hello".into() })
//!     .unwrap();
//! interview.add_solution("swap", |a, b| Pair { a: b, b: a });
//! interview.show_field_names();
//!
//! assert_eq!(
//!     interview.all_solutions_to_string(),
//!     "swap\n====\n(OK) hello, world -> {A: world, B: hello}"
//! );
//! ```
//!
//! Every case stores deep copies of its values and every solution call gets
//! fresh copies, so a solution that mutates its input cannot corrupt later
//! runs.
//!
//! ## Formatting
//!
//! [`FormatOptions`] switches byte and codepoint sequences to text, shows
//! aggregate field names and renders matrices one row per line. Multi-line
//! values are aligned column by column in the receipt.

extern crate self as interview;

pub mod case;
pub mod copy;
pub mod data;
pub mod diff;
pub mod error;
pub mod format;
pub mod harness;
pub mod receipt;
pub mod render;
pub mod shape;

pub use case::{Report, TestCase};
pub use copy::{deep_copy, hidden_field, is_fully_visible};
pub use data::{from_text, read_data};
pub use diff::{Mismatch, deep_eq, find_mismatches};
pub use error::{InterviewError, Result};
pub use format::{FormatOptions, display, format};
pub use harness::{Interview, Interview2};
pub use interview_macros::Shape;
pub use receipt::{Receipt, ReceiptCollection, ReceiptLine};
pub use render::{render_line_group, render_receipt, render_receipt_collection};
pub use shape::{DynShape, Field, Inspect, Kind, Scalar, ScalarKind, Shape, View};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::solution;
    pub use crate::{
        DynShape, FormatOptions, Interview, Interview2, InterviewError, Mismatch, Receipt,
        ReceiptCollection, Report, Shape,
    };
}
