#![cfg(feature = "serde")]

//! Integration tests for serde support in failables.
//!
//! These tests verify that the containers serialize as externally tagged
//! enums and read back unchanged.

use failables::{Failable, Maybe, Option, Validation};
use rstest::rstest;

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let some = Maybe::some(42);
    let none = Maybe::<i32>::none();

    let some_json = serde_json::to_string(&some).unwrap();
    let none_json = serde_json::to_string(&none).unwrap();

    assert_eq!(some_json, r#"{"Some":42}"#);
    assert_eq!(none_json, r#""None""#);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&some_json).unwrap(), some);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&none_json).unwrap(), none);
}

#[rstest]
fn test_validation_json_roundtrip() {
    let failure: Validation<String> = Validation::failure("denied".to_string());
    let json = serde_json::to_string(&failure).unwrap();
    assert_eq!(json, r#"{"Failure":"denied"}"#);
    assert_eq!(serde_json::from_str::<Validation<String>>(&json).unwrap(), failure);
    assert_eq!(
        serde_json::from_str::<Validation<String>>(r#""Success""#).unwrap(),
        Validation::success()
    );
}

#[rstest]
#[case(Failable::success(7))]
#[case(Failable::failure("broken".to_string()))]
fn test_failable_json_roundtrip(#[case] failable: Failable<u8, String>) {
    let json = serde_json::to_string(&failable).unwrap();
    let restored: Failable<u8, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, failable);
}

#[rstest]
#[case(Option::some(vec![1, 2]))]
#[case(Option::none())]
#[case(Option::failure("broken".to_string()))]
fn test_option_json_roundtrip(#[case] option: Option<Vec<i32>, String>) {
    let json = serde_json::to_string(&option).unwrap();
    let restored: Option<Vec<i32>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, option);
}

#[rstest]
fn test_nested_option_json_roundtrip() {
    let nested: Option<Maybe<i32>, String> = Option::some(Maybe::none());
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"{"Some":"None"}"#);
    let restored: Option<Maybe<i32>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.flatten(), Option::none());
}

#[rstest]
fn test_unknown_variant_is_rejected() {
    assert!(serde_json::from_str::<Maybe<i32>>(r#"{"Value":1}"#).is_err());
}
