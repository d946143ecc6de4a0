#![forbid(unsafe_code)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # interview-macros
//!
//! Procedural macros for the interview harness.
//!
//! This crate provides `#[derive(Shape)]`, which lets a struct be used as a
//! case input or expected output: the engine can then deep-copy it, format
//! it field by field and diff it against another value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use interview::Shape;
//!
//! #[derive(Shape)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//! ```
//!
//! ## Field Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `rename = "Name"` | Name shown when field names are displayed |
//! | `skip` | Hide the field from copy, format and diff |
//!
//! ```rust,ignore
//! #[derive(Shape)]
//! struct Account {
//!     #[shape(rename = "ID")]
//!     id: u64,
//!
//!     #[shape(skip)]
//!     session: Option<String>,
//! }
//! ```
//!
//! A type with skipped fields is rejected as a case type: registering a case
//! with it returns `InterviewError::HiddenField`. Skipped field types must
//! implement `Default`, which is what copies receive.
//!
//! ## Supported Items
//!
//! Named, tuple and unit structs, including generic ones. Each type
//! parameter gets a `Shape` bound. Enums and unions produce a compile error.

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

mod attributes;
mod error;
mod shape;

/// Derive macro for implementing `Inspect` and `Shape`.
///
/// # Field Attributes
///
/// - `#[shape(rename = "Name")]` - Display name for the field
/// - `#[shape(skip)]` - Hide the field from the engine
///
/// # Example
///
/// ```rust,ignore
/// use interview::{Interview2, Shape};
///
/// #[derive(Shape)]
/// struct Pair {
///     #[shape(rename = "A")]
///     a: String,
///     #[shape(rename = "B")]
///     b: String,
/// }
///
/// let mut interview = Interview2::<String, String, Pair>::new();
/// interview.add_solution("swap", |a, b| Pair { a: b, b: a });
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
#[proc_macro_error]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    shape::derive_shape_impl(input.into()).into()
}
