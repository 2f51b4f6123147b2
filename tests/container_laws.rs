//! Property-based tests for the container laws.
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//! - **Round Trip**: `maybe.to_failable(e).to_maybe() == maybe`
//! - **Flatten**: `fa.map(f).flatten() == fa.flat_map(f)`
//! - **Hash Consistency**: equal instances hash equally

use failables::{Failable, Maybe, Option, Validation};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<core::option::Option<i32>>().prop_map(Maybe::from_option)
}

fn failable_strategy() -> impl Strategy<Value = Failable<i32, String>> {
    any::<Result<i32, String>>().prop_map(Failable::from)
}

fn option_strategy() -> impl Strategy<Value = Option<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Option::some),
        Just(Option::none()),
        "[a-z]{0,8}".prop_map(Option::failure),
    ]
}

fn validation_strategy() -> impl Strategy<Value = Validation<String>> {
    any::<core::option::Option<String>>().prop_map(Validation::from_option)
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_composition_law(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(
            maybe.map(function1).map(function2),
            maybe.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_maybe_failable_round_trip(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.to_failable("missing").to_maybe(), maybe);
    }

    #[test]
    fn prop_maybe_option_round_trip(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.to_option::<String>().to_maybe(), maybe);
    }

    #[test]
    fn prop_maybe_flatten_matches_flat_map(maybe in maybe_strategy()) {
        let step = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
        prop_assert_eq!(maybe.map(step).flatten(), maybe.flat_map(step));
    }

    #[test]
    fn prop_maybe_std_option_round_trip(value in any::<core::option::Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();
        prop_assert_eq!(maybe.into_value(), value);
    }
}

// =============================================================================
// Failable
// =============================================================================

proptest! {
    #[test]
    fn prop_failable_identity_law(failable in failable_strategy()) {
        prop_assert_eq!(failable.clone().map(|x| x), failable);
    }

    #[test]
    fn prop_failable_composition_law(failable in failable_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(3);
        let function2 = |n: i32| n.to_string();
        prop_assert_eq!(
            failable.clone().map(function1).map(function2),
            failable.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_failable_map_failure_identity_law(failable in failable_strategy()) {
        prop_assert_eq!(failable.clone().map_failure(|f| f), failable);
    }

    #[test]
    fn prop_failable_option_round_trip(failable in failable_strategy()) {
        let restored = failable.clone().to_option().to_failable("unused".to_string());
        prop_assert_eq!(restored, failable);
    }

    #[test]
    fn prop_failable_result_round_trip(result in any::<Result<i32, String>>()) {
        let failable: Failable<i32, String> = result.clone().into();
        let restored: Result<i32, String> = failable.into();
        prop_assert_eq!(restored, result);
    }

    #[test]
    fn prop_failable_nested_flatten(failable in failable_strategy()) {
        prop_assert_eq!(Failable::<_, String>::success(failable.clone()).flatten(), failable);
    }
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(option in option_strategy()) {
        prop_assert_eq!(option.clone().map(|x| x), option);
    }

    #[test]
    fn prop_option_composition_law(option in option_strategy()) {
        let function1 = |n: i32| n.wrapping_add(7);
        let function2 = |n: i32| n.wrapping_mul(-1);
        prop_assert_eq!(
            option.clone().map(function1).map(function2),
            option.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_option_flatten_matches_flat_map(option in option_strategy()) {
        let step = |n: i32| match n.rem_euclid(3) {
            0 => Option::some(n),
            1 => Option::none(),
            _ => Option::failure(format!("{n}")),
        };
        prop_assert_eq!(option.clone().map(step).flatten(), option.flat_map(step));
    }

    #[test]
    fn prop_option_some_flatten_is_inner(option in option_strategy()) {
        prop_assert_eq!(Option::<_, String>::some(option.clone()).flatten(), option);
    }

    #[test]
    fn prop_option_std_encoding_round_trip(option in option_strategy()) {
        let encoded: Result<core::option::Option<i32>, String> = option.clone().into();
        prop_assert_eq!(Option::from_result(encoded), option);
    }

    #[test]
    fn prop_option_validation_agrees_on_failure(option in option_strategy()) {
        prop_assert_eq!(option.is_failure(), option.clone().to_validation().is_failure());
    }

    #[test]
    fn prop_option_hash_consistent_with_eq(left in option_strategy(), right in option_strategy()) {
        if left == right {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
        prop_assert_eq!(hash_of(&left), hash_of(&left.clone()));
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_fail_map_identity_law(validation in validation_strategy()) {
        prop_assert_eq!(validation.clone().fail_map(|f| f), validation);
    }

    #[test]
    fn prop_validation_and_success_is_identity(validation in validation_strategy()) {
        prop_assert_eq!(validation.clone().and(Validation::success()), validation.clone());
        prop_assert_eq!(Validation::success().and(validation.clone()), validation);
    }

    #[test]
    fn prop_validation_failable_round_trip(validation in validation_strategy()) {
        prop_assert_eq!(validation.clone().to_failable(0_u8).to_validation(), validation);
    }
}
