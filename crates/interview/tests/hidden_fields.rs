//! Case types with fields hidden from the engine are rejected.

use interview::prelude::*;

#[derive(Debug, Default, Shape)]
struct Secretive {
    visible: i32,
    #[shape(skip)]
    hidden: i32,
}

#[derive(Debug, Shape)]
struct Wrapper {
    inner: Vec<Secretive>,
}

#[derive(Debug, Shape)]
struct Open {
    value: i32,
}

#[test]
fn test_hidden_input_field_is_rejected() {
    let mut interview = Interview::<Secretive, i32>::new();
    let err = interview
        .add_case(Secretive { visible: 1, hidden: 2 }, 1)
        .unwrap_err();

    assert!(err.is_misuse());
    match err {
        InterviewError::HiddenField {
            role,
            type_name,
            path,
        } => {
            assert_eq!(role, "input");
            assert_eq!(type_name, "Secretive");
            assert_eq!(path, "hidden");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(interview.case_count(), 0);
}

#[test]
fn test_nested_hidden_output_field_is_rejected() {
    let mut interview = Interview::<i32, Wrapper>::new();
    let err = interview
        .add_case(1, Wrapper { inner: Vec::new() })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected output type Wrapper has a hidden field: Wrapper.inner.hidden"
    );
}

#[test]
fn test_second_input_is_checked() {
    let mut interview = Interview2::<Open, Secretive, i32>::new();
    let err = interview
        .add_case(Open { value: 1 }, Secretive::default(), 1)
        .unwrap_err();
    assert!(matches!(err, InterviewError::HiddenField { role: "second input", .. }));
}

#[test]
fn test_bulk_registration_stores_nothing_on_failure() {
    let mut interview = Interview::<Secretive, i32>::new();
    let inputs = [Secretive::default(), Secretive::default()];
    assert!(interview.add_cases(&inputs, &[0, 0]).is_err());
    assert_eq!(interview.case_count(), 0);
}

#[test]
fn test_visible_types_are_accepted() {
    let mut interview = Interview::<Open, i32>::new();
    interview.add_case(Open { value: 3 }, 3).unwrap();
    interview.add_solution("value", |open: Open| open.value);
    assert_eq!(
        interview.all_solutions_to_string(),
        "value\n=====\n(OK) {3} -> 3"
    );
}

#[test]
fn test_skipped_field_resets_in_copies() {
    let original = Secretive { visible: 4, hidden: 9 };
    let copy = interview::deep_copy(&original);
    assert_eq!(copy.visible, 4);
    assert_eq!(copy.hidden, 0);
    assert!(!interview::is_fully_visible::<Secretive>());
}

#[test]
fn test_boxed_value_with_hidden_field_is_rejected() {
    let mut interview = Interview::<Box<dyn DynShape>, i32>::new();
    let err = interview
        .add_case(Box::new(Secretive { visible: 1, hidden: 2 }), 1)
        .unwrap_err();

    assert!(err.is_misuse());
    assert_eq!(
        err.to_string(),
        "input type Secretive has a hidden field: Secretive.hidden"
    );
    assert_eq!(interview.case_count(), 0);
}

#[test]
fn test_boxed_values_are_checked_case_by_case() {
    let mut interview = Interview::<i32, Box<dyn DynShape>>::new();
    interview.add_case(1, Box::new(Open { value: 1 })).unwrap();

    let expected: Vec<Box<dyn DynShape>> = vec![
        Box::new(Open { value: 2 }),
        Box::new(Secretive::default()),
    ];
    let err = interview.add_cases(&[2, 3], &expected).unwrap_err();
    assert!(matches!(
        err,
        InterviewError::HiddenField { role: "expected output", .. }
    ));
    assert_eq!(interview.case_count(), 1);
}
