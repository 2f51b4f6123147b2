//! Collapsing one level of nesting.
//!
//! For the ternary [`Option`] the rule is: an outer failure wins over
//! anything inside, an outer `Some` unwraps to the inner instance as is, and
//! an outer `None` stays `None`. The `flatten_with` variants accept inner
//! and outer failures of different types and convert the inner failure only
//! when it is the one that surfaces.

use crate::container::{Failable, Maybe, Option};

impl<V> Maybe<Maybe<V>> {
    /// Collapses a nested maybe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<V> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<V, F> Failable<Failable<V, F>, F> {
    /// Collapses a nested failable.
    ///
    /// An outer success returns the inner instance unchanged; an outer
    /// failure is kept.
    #[inline]
    pub fn flatten(self) -> Failable<V, F> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }
}

impl<V, G, F> Failable<Failable<V, G>, F> {
    /// Collapses a nested failable whose inner failure type differs.
    ///
    /// `convert` runs only when the inner failure surfaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let nested: Failable<Failable<i32, u8>, String> = Failable::success(Failable::failure(4));
    /// assert_eq!(nested.flatten_with(|code| format!("code {code}")), Failable::failure("code 4".to_string()));
    /// ```
    #[inline]
    pub fn flatten_with<C>(self, convert: C) -> Failable<V, F>
    where
        C: FnOnce(G) -> F,
    {
        match self {
            Self::Success(inner) => inner.map_failure(convert),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }
}

impl<V, F> Option<Option<V, F>, F> {
    /// Collapses a nested option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Option;
    ///
    /// let nested: Option<Option<i32, &str>, &str> = Option::some(Option::failure("inner"));
    /// assert_eq!(nested.flatten(), Option::failure("inner"));
    ///
    /// let outer: Option<Option<i32, &str>, &str> = Option::failure("outer");
    /// assert_eq!(outer.flatten(), Option::failure("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<V, F> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }
}

impl<V, G, F> Option<Option<V, G>, F> {
    /// Collapses a nested option whose inner failure type differs.
    ///
    /// `convert` runs only when the inner failure surfaces.
    #[inline]
    pub fn flatten_with<C>(self, convert: C) -> Option<V, F>
    where
        C: FnOnce(G) -> F,
    {
        match self {
            Self::Some(inner) => inner.map_failure(convert),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }
}

impl<V, F> Option<Maybe<V>, F> {
    /// Collapses an option holding a maybe; an inner `None` becomes `None`.
    #[inline]
    pub fn flatten(self) -> Option<V, F> {
        match self {
            Self::Some(inner) => inner.to_option(),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }
}

impl<V, F> Option<Failable<V, F>, F> {
    /// Collapses an option holding a failable; an inner failure surfaces.
    #[inline]
    pub fn flatten(self) -> Option<V, F> {
        match self {
            Self::Some(inner) => inner.to_option(),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_option_flatten_with_skips_converter_for_outer_failure() {
        let calls = Cell::new(0);
        let nested: Option<Option<i32, u8>, String> = Option::failure("outer".to_string());
        let flat = nested.flatten_with(|code| {
            calls.set(calls.get() + 1);
            code.to_string()
        });
        assert_eq!(flat, Option::failure("outer".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_option_flatten_with_converts_inner_failure() {
        let nested: Option<Option<i32, u8>, String> = Option::some(Option::failure(9));
        assert_eq!(nested.flatten_with(|code| code.to_string()), Option::failure("9".to_string()));
    }

    #[rstest]
    fn test_option_of_maybe_flatten() {
        let nested: Option<Maybe<i32>, &str> = Option::some(Maybe::none());
        assert_eq!(nested.flatten(), Option::none());
    }

    #[rstest]
    fn test_option_of_failable_flatten() {
        let nested: Option<Failable<i32, &str>, &str> = Option::some(Failable::failure("inner"));
        assert_eq!(nested.flatten(), Option::failure("inner"));
    }

    #[rstest]
    fn test_failable_flatten_keeps_outer_failure() {
        let nested: Failable<Failable<i32, &str>, &str> = Failable::failure("outer");
        assert_eq!(nested.flatten(), Failable::failure("outer"));
    }
}
