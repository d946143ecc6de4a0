//! Test that a named struct derives correctly.

use interview::{FormatOptions, Shape, format};

#[derive(Shape)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let point = Point { x: 1, y: -2 };
    assert_eq!(format(&point, &FormatOptions::new()), "{1, -2}");
    assert_eq!(
        format(&point, &FormatOptions::new().show_field_names(true)),
        "{x: 1, y: -2}"
    );

    let copy = point.deep_copy();
    assert_eq!((copy.x, copy.y), (1, -2));
    assert!(interview::is_fully_visible::<Point>());
}
