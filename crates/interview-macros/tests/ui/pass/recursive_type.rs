//! Test that recursive types derive and their visibility check terminates.

use interview::{Shape, display, is_fully_visible};

#[derive(Shape)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

fn main() {
    let list = Node {
        value: 1,
        next: Some(Box::new(Node { value: 2, next: None })),
    };
    assert_eq!(display(&list), "{1 {2 nil}}");
    assert_eq!(display(&list.deep_copy()), "{1 {2 nil}}");
    assert!(is_fully_visible::<Node>());
}
