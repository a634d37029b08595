//! Error taxonomy rendering and ergonomics.

use uniview::AccessError;

fn assert_error<E: std::error::Error>() {}

#[test]
fn not_found_names_the_id() {
    let err = AccessError::ObjectNotFound("42".to_string());
    assert_eq!(err.to_string(), "no object found for id '42'");
}

#[test]
fn ambiguity_names_the_id() {
    let err = AccessError::MultipleObjectsFound("42".to_string());
    assert_eq!(err.to_string(), "multiple objects found for id '42'");
}

#[test]
fn errors_are_ordinary_values() {
    assert_error::<AccessError<String>>();

    let err: AccessError<String> = AccessError::ObjectNotFound("a".into());
    assert_eq!(err.clone(), err);
}
