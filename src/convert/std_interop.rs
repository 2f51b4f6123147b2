//! `From` implementations bridging the containers and the std
//! `Option` / `Result` types, plus lossless embeddings between families.

use crate::container::{Failable, Maybe, Option, Validation};

type StdOption<T> = core::option::Option<T>;

// =============================================================================
// Maybe <-> std Option
// =============================================================================

impl<V> From<StdOption<V>> for Maybe<V> {
    /// Converts a std `Option`; `None` becomes the empty maybe.
    #[inline]
    fn from(value: StdOption<V>) -> Self {
        Self::from_option(value)
    }
}

impl<V> From<Maybe<V>> for StdOption<V> {
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        maybe.into_value()
    }
}

// =============================================================================
// Validation <-> Result<(), F>
// =============================================================================

impl<F> From<Result<(), F>> for Validation<F> {
    /// Converts a unit `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Validation;
    ///
    /// let checked: Validation<String> = Err::<(), _>("denied".to_string()).into();
    /// assert!(checked.failure_is("denied"));
    /// ```
    #[inline]
    fn from(result: Result<(), F>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<F> From<Validation<F>> for Result<(), F> {
    #[inline]
    fn from(validation: Validation<F>) -> Self {
        match validation {
            Validation::Success => Ok(()),
            Validation::Failure(failure) => Err(failure),
        }
    }
}

// =============================================================================
// Failable <-> Result<V, F>
// =============================================================================

impl<V, F> From<Result<V, F>> for Failable<V, F> {
    /// Converts a `Result`.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(f)` becomes `Failure(f)`.
    #[inline]
    fn from(result: Result<V, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<V, F> From<Failable<V, F>> for Result<V, F> {
    /// Converts a `Failable` into a `Result`, so `?` can be used on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// fn total(parts: [Failable<u32, String>; 2]) -> Result<u32, String> {
    ///     let [first, second] = parts;
    ///     Ok(Result::from(first)? + Result::from(second)?)
    /// }
    ///
    /// assert_eq!(total([Failable::success(1), Failable::success(2)]), Ok(3));
    /// ```
    #[inline]
    fn from(failable: Failable<V, F>) -> Self {
        match failable {
            Failable::Success(value) => Ok(value),
            Failable::Failure(failure) => Err(failure),
        }
    }
}

// =============================================================================
// Option <-> std Option / Result
// =============================================================================

impl<V, F> From<StdOption<V>> for Option<V, F> {
    #[inline]
    fn from(value: StdOption<V>) -> Self {
        Self::from_option(value)
    }
}

impl<V, F> From<Result<V, F>> for Option<V, F> {
    #[inline]
    fn from(result: Result<V, F>) -> Self {
        match result {
            Ok(value) => Self::Some(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<V, F> Option<V, F> {
    /// Converts the std encoding of a ternary outcome.
    ///
    /// `Ok(None)` becomes `None`, unlike `From<Result<V, F>>`, which would
    /// keep the std `Option` as the value.
    #[inline]
    pub fn from_result(result: Result<StdOption<V>, F>) -> Self {
        match result {
            Ok(value) => Self::from_option(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<V, F> From<Option<V, F>> for Result<StdOption<V>, F> {
    /// Converts into the std encoding of a ternary outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Option;
    ///
    /// let none: Result<core::option::Option<i32>, &str> = Option::<i32, &str>::none().into();
    /// assert_eq!(none, Ok(None));
    /// ```
    #[inline]
    fn from(option: Option<V, F>) -> Self {
        match option {
            Option::Some(value) => Ok(Some(value)),
            Option::None => Ok(None),
            Option::Failure(failure) => Err(failure),
        }
    }
}

// =============================================================================
// Lossless embeddings
// =============================================================================

impl<V, F> From<Maybe<V>> for Option<V, F> {
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        maybe.to_option()
    }
}

impl<V, F> From<Failable<V, F>> for Option<V, F> {
    #[inline]
    fn from(failable: Failable<V, F>) -> Self {
        failable.to_option()
    }
}
