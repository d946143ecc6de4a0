//! Test that tuple and unit structs derive correctly.

use interview::{Shape, display};

#[derive(Shape)]
struct Meters(f64);

#[derive(Shape)]
struct Pair(String, u8);

#[derive(Shape)]
struct Marker;

fn main() {
    assert_eq!(display(&Meters(2.5)), "{2.5}");
    assert_eq!(display(&Pair("a".to_string(), 7)), "{a 7}");
    assert_eq!(display(&Marker), "{}");

    let copy = Pair("b".to_string(), 1).deep_copy();
    assert_eq!(copy.0, "b");
    let _ = Marker.deep_copy();
}
