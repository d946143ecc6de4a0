//! Byte and codepoint sequences, and solutions that mutate their input.

use interview::prelude::*;

fn count_upper(bytes: Vec<u8>) -> usize {
    bytes.iter().filter(|b| b.is_ascii_uppercase()).count()
}

fn clobber_first(mut bytes: Vec<u8>) -> Vec<u8> {
    if let Some(first) = bytes.first_mut() {
        *first = b'a';
    }
    bytes
}

fn identity(bytes: Vec<u8>) -> Vec<u8> {
    bytes
}

#[test]
fn test_bytes_shown_as_numbers_by_default() {
    let mut interview = Interview::<Vec<u8>, usize>::new();
    interview.add_case(b"hiYO".to_vec(), 2).unwrap();
    interview.add_solution("count_upper", count_upper);
    assert_eq!(
        interview.all_solutions_to_string(),
        "count_upper\n===========\n(OK) [104 105 89 79] -> 2"
    );
}

#[test]
fn test_bytes_shown_as_text() {
    let mut interview = Interview::<Vec<u8>, usize>::new();
    interview.add_case(b"helloWORLD".to_vec(), 5).unwrap();
    interview.add_solution("count_upper", count_upper);
    interview.show_bytes_as_text();
    assert_eq!(
        interview.all_solutions_to_string(),
        "count_upper\n===========\n(OK) helloWORLD -> 5"
    );
}

#[test]
fn test_mutating_solution_does_not_corrupt_cases() {
    let mut interview = Interview::<Vec<u8>, Vec<u8>>::new();
    interview.add_case_text("helloWORLD", "helloWORLD").unwrap();
    interview.add_solution("clobber_first", clobber_first);
    interview.add_solution("identity", identity);
    interview.show_bytes_as_text();

    let expected = "\
clobber_first
=============
(  ) helloWORLD -> aelloWORLD != helloWORLD

identity
========
(OK) helloWORLD -> helloWORLD";
    assert_eq!(interview.all_solutions_to_string(), expected);
    assert_eq!(interview.all_solutions_to_string(), expected);
}

#[test]
fn test_caller_buffer_is_not_shared() {
    let mut buffer = b"abc".to_vec();
    let mut interview = Interview::<Vec<u8>, Vec<u8>>::new();
    interview.add_case(buffer.clone(), buffer.clone()).unwrap();
    buffer[0] = b'z';
    interview.add_solution("identity", identity);
    interview.show_bytes_as_text();
    assert!(interview.run_solution("identity").unwrap().all_passed());
    assert_eq!(
        interview.all_solutions_to_string(),
        "identity\n========\n(OK) abc -> abc"
    );
}

#[test]
fn test_codepoint_text_cases() {
    fn reverse(runes: Vec<i32>) -> Vec<i32> {
        runes.into_iter().rev().collect()
    }

    let mut interview = Interview::<Vec<i32>, Vec<i32>>::new();
    interview.add_case_text("héllo", "olléh").unwrap();
    interview.add_solution("reverse", reverse);
    interview.show_bytes_as_text();
    assert_eq!(
        interview.all_solutions_to_string(),
        "reverse\n=======\n(OK) héllo -> olléh"
    );
}

#[test]
fn test_text_case_for_unsupported_type() {
    let mut interview = Interview::<u64, u64>::new();
    let err = interview.add_case_text("12", "12").unwrap_err();
    assert!(matches!(err, InterviewError::ShapeConversion { .. }));
    assert_eq!(interview.case_count(), 0);
}
