//! Structural comparison of actual and expected values.

use std::fmt;

use crate::format::display;
use crate::shape::{Inspect, View};

/// Field name used when the two values have different concrete types.
pub const TYPE_FIELD: &str = "Type";
/// Field name used when two non-aggregate values differ.
pub const VALUE_FIELD: &str = "Value";

/// A single difference between two values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mismatch {
    pub field: String,
    pub left: String,
    pub right: String,
}

impl Mismatch {
    pub fn new(field: impl Into<String>, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" != \"{}\"", self.field, self.left, self.right)
    }
}

/// Deep structural equality.
///
/// Floats compare with `==`, so `NaN` never equals itself. Type-erased values
/// must also agree on their concrete type.
pub fn deep_eq<A: Inspect + ?Sized, B: Inspect + ?Sized>(a: &A, b: &B) -> bool {
    views_equal(a.view(), b.view())
}

fn views_equal(a: View<'_>, b: View<'_>) -> bool {
    match (a, b) {
        (View::Scalar(x), View::Scalar(y)) => x == y,
        (View::Absent, View::Absent) => true,
        (View::Reference(x), View::Reference(y)) => views_equal(x.view(), y.view()),
        (View::Boxed(x), View::Boxed(y)) => {
            x.type_name() == y.type_name() && views_equal(x.view(), y.view())
        }
        (View::Aggregate(x), View::Aggregate(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(&y)
                    .all(|(l, r)| l.name == r.name && deep_eq(l.value, r.value))
        }
        (View::Sequence { items: x, .. }, View::Sequence { items: y, .. })
        | (View::Array { items: x, .. }, View::Array { items: y, .. }) => {
            x.len() == y.len() && x.iter().zip(&y).all(|(l, r)| deep_eq(*l, *r))
        }
        (View::Map(x), View::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(&y)
                    .all(|((lk, lv), (rk, rv))| deep_eq(*lk, *rk) && deep_eq(*lv, *rv))
        }
        _ => false,
    }
}

fn unboxed(view: View<'_>) -> View<'_> {
    match view {
        View::Boxed(inner) => unboxed(inner.view()),
        other => other,
    }
}

/// Lists the differences between `actual` and `expected`.
///
/// Values of different concrete types produce a single `Type` mismatch.
/// Aggregates produce one mismatch per differing visible field, in
/// declaration order. Anything else produces at most one `Value` mismatch.
/// The result is empty exactly when the values are deeply equal.
pub fn find_mismatches<T: Inspect + ?Sized>(actual: &T, expected: &T) -> Vec<Mismatch> {
    let (left_type, right_type) = (actual.type_name(), expected.type_name());
    if left_type != right_type {
        return vec![Mismatch::new(TYPE_FIELD, left_type, right_type)];
    }

    match (unboxed(actual.view()), unboxed(expected.view())) {
        (View::Aggregate(left), View::Aggregate(right)) => left
            .iter()
            .zip(&right)
            .filter(|(l, r)| !deep_eq(l.value, r.value))
            .map(|(l, r)| Mismatch::new(l.name, display(l.value), display(r.value)))
            .collect(),
        (left, right) => {
            if views_equal(left, right) {
                Vec::new()
            } else {
                vec![Mismatch::new(VALUE_FIELD, display(actual), display(expected))]
            }
        }
    }
}
