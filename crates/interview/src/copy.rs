//! Deep copy and visibility checks.
//!
//! A deep copy follows every reference, sequence and map so the copy shares
//! no mutable storage with the source. Fields marked `#[shape(skip)]` are
//! invisible to the engine: they are not copied (the copy gets
//! `Default::default()`), not formatted and not compared. Case types must
//! not contain any, which [`hidden_field`] checks.

use crate::shape::Shape;

/// Returns an independent copy of `value`.
pub fn deep_copy<T: Shape>(value: &T) -> T {
    value.deep_copy()
}

/// Path to the first hidden field reachable from `T`, if any.
pub fn hidden_field<T: Shape>() -> Option<String> {
    let mut visited = Vec::new();
    T::hidden_field(&mut visited)
}

/// True when every field reachable from `T` is visible to the engine.
pub fn is_fully_visible<T: Shape>() -> bool {
    hidden_field::<T>().is_none()
}
