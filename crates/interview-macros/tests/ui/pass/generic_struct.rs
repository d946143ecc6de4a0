//! Test that generic structs get a Shape bound per type parameter.

use interview::{Shape, display, find_mismatches};

#[derive(Shape)]
struct Labeled<T> {
    label: String,
    value: T,
}

#[derive(Shape)]
struct Grid<T, const N: usize>
where
    T: Copy,
{
    cells: [T; N],
}

fn main() {
    let a = Labeled { label: "n".to_string(), value: vec![1u8, 2] };
    let b = Labeled { label: "n".to_string(), value: vec![1u8, 3] };
    assert_eq!(display(&a), "{n [1 2]}");

    let found = find_mismatches(&a, &b);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "value");

    let grid = Grid { cells: [1i64, 2, 3] };
    assert_eq!(display(&grid.deep_copy()), "{[1 2 3]}");
}
