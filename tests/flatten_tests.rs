//! Integration tests for collapsing nested containers.

use failables::{Failable, Maybe, Option};
use rstest::rstest;

#[rstest]
#[case(Maybe::some(Maybe::some(1)), Maybe::some(1))]
#[case(Maybe::some(Maybe::none()), Maybe::none())]
#[case(Maybe::none(), Maybe::none())]
fn maybe_flatten(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
    assert_eq!(nested.flatten(), expected);
}

#[rstest]
#[case(Failable::success(Failable::success(1)), Failable::success(1))]
#[case(Failable::success(Failable::failure("inner")), Failable::failure("inner"))]
#[case(Failable::failure("outer"), Failable::failure("outer"))]
fn failable_flatten(
    #[case] nested: Failable<Failable<i32, &'static str>, &'static str>,
    #[case] expected: Failable<i32, &'static str>,
) {
    assert_eq!(nested.flatten(), expected);
}

#[rstest]
#[case(Option::some(Option::some(1)), Option::some(1))]
#[case(Option::some(Option::none()), Option::none())]
#[case(Option::some(Option::failure("inner")), Option::failure("inner"))]
#[case(Option::none(), Option::none())]
#[case(Option::failure("outer"), Option::failure("outer"))]
fn option_flatten(
    #[case] nested: Option<Option<i32, &'static str>, &'static str>,
    #[case] expected: Option<i32, &'static str>,
) {
    assert_eq!(nested.flatten(), expected);
}

#[rstest]
fn option_flatten_with_converts_inner_failure_type() {
    let nested: Option<Option<i32, std::num::ParseIntError>, String> =
        Option::some(Option::failure("x".parse::<i32>().unwrap_err()));
    let flat = nested.flatten_with(|error| error.to_string());
    assert_eq!(flat, Option::failure("invalid digit found in string".to_string()));
}

#[rstest]
fn failable_flatten_with_keeps_outer_failure() {
    let nested: Failable<Failable<i32, u8>, String> = Failable::failure("outer".to_string());
    assert_eq!(nested.flatten_with(|code| code.to_string()), Failable::failure("outer".to_string()));
}

#[rstest]
fn flatten_after_map_equals_flat_map() {
    let step = |x: i32| if x > 0 { Option::some(x - 1) } else { Option::failure("negative") };
    for start in [-1, 0, 3] {
        let source: Option<i32, &str> = Option::some(start);
        assert_eq!(source.map(step).flatten(), source.flat_map(step));
    }
}
