//! Integration tests for Display trait implementations.
//!
//! Containers render as their state name wrapping the payload's own
//! `Display` output; errors render their container and method.

use failables::{
    AccessErrorKind, ConstructionError, EFailable, Exception, Failable, Maybe, Option, Validation,
};

// =============================================================================
// Containers
// =============================================================================

#[test]
fn test_maybe_display() {
    assert_eq!(format!("{}", Maybe::some(42)), "Some(42)");
    assert_eq!(format!("{}", Maybe::<i32>::none()), "None");
}

#[test]
fn test_validation_display() {
    assert_eq!(format!("{}", Validation::<String>::success()), "Success");
    assert_eq!(format!("{}", Validation::failure("denied")), "Failure(denied)");
}

#[test]
fn test_failable_display() {
    let success: Failable<i32, String> = Failable::success(1);
    let failure: Failable<i32, String> = Failable::failure("io".to_string());
    assert_eq!(format!("{success}"), "Success(1)");
    assert_eq!(format!("{failure}"), "Failure(io)");
}

#[test]
fn test_option_display() {
    assert_eq!(format!("{}", Option::<i32, &str>::some(1)), "Some(1)");
    assert_eq!(format!("{}", Option::<i32, &str>::none()), "None");
    assert_eq!(format!("{}", Option::<i32, &str>::failure("bad")), "Failure(bad)");
}

#[test]
fn test_nested_display() {
    let nested: Option<Maybe<i32>, &str> = Option::some(Maybe::none());
    assert_eq!(format!("{nested}"), "Some(None)");
}

#[test]
fn test_evariant_display_uses_error_message() {
    let failure: EFailable<i32> = EFailable::failure(Exception::msg("disk full"));
    assert_eq!(format!("{failure}"), "Failure(disk full)");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_access_error_display() {
    let empty = Maybe::<u32>::none().or_error().unwrap_err();
    assert_eq!(
        empty.to_string(),
        "Maybe::or_error: no value present, the container is empty (type `u32`)"
    );

    let succeeded = Failable::<u8, u32>::success(1).failure_or_error().unwrap_err();
    assert_eq!(succeeded.kind, AccessErrorKind::Succeeded);
    assert_eq!(
        succeeded.to_string(),
        "Failable::failure_or_error: no failure present, the container succeeded (type `u32`)"
    );
}

#[test]
fn test_construction_error_display() {
    let error: ConstructionError = Option::<u64, String>::try_some(None).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Option::try_some: cannot construct from an absent `u64` payload"
    );
}

#[test]
fn test_exception_debug_shows_inner_error() {
    let parse = "x".parse::<u8>().unwrap_err();
    let exception = Exception::new(parse.clone());
    assert_eq!(format!("{exception:?}"), format!("Exception({parse:?})"));
}
