//! Conversions between container families.
//!
//! Each `to_*` method maps a state onto the semantically closest state of
//! the target family. Where the target cannot represent a source state the
//! caller supplies the substitute, as with [`Maybe::to_failable`] or
//! [`Option::to_failable`]. Lossy directions say so on the method.

use std::convert::Infallible;

use crate::container::{Failable, Maybe, Option, Validation};
use crate::exceptional::{EFailable, EOption, EValidation, Exception};

// =============================================================================
// Maybe
// =============================================================================

impl<V> Maybe<V> {
    /// Converts into a `Failable`, using `failure` for the `None` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::{Failable, Maybe};
    ///
    /// let found = Maybe::some(1).to_failable("missing");
    /// assert_eq!(found, Failable::success(1));
    ///
    /// let lost = Maybe::<i32>::none().to_failable("missing");
    /// assert_eq!(lost, Failable::failure("missing"));
    /// ```
    #[inline]
    pub fn to_failable<F>(self, failure: F) -> Failable<V, F> {
        match self {
            Self::Some(value) => Failable::Success(value),
            Self::None => Failable::Failure(failure),
        }
    }

    /// Converts into a `Failable`, computing the failure only for `None`.
    #[inline]
    pub fn to_failable_else<F, G>(self, failure: G) -> Failable<V, F>
    where
        G: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Failable::Success(value),
            Self::None => Failable::Failure(failure()),
        }
    }

    /// Converts into an `Option` with failure type `F`.
    ///
    /// Only the failure type is chosen; a maybe never becomes a failure.
    #[inline]
    pub fn to_option<F>(self) -> Option<V, F> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts into an `EFailable`, using `exception` for the `None` case.
    #[inline]
    pub fn to_efailable(self, exception: Exception) -> EFailable<V> {
        self.to_failable(exception)
    }

    /// Converts into an `EFailable`, producing the exception only for `None`.
    #[inline]
    pub fn to_efailable_else<G>(self, exception: G) -> EFailable<V>
    where
        G: FnOnce() -> Exception,
    {
        self.to_failable_else(exception)
    }

    /// Converts into an `EOption`.
    #[inline]
    pub fn to_eoption(self) -> EOption<V> {
        self.to_option()
    }
}

// =============================================================================
// Validation
// =============================================================================

impl<F> Validation<F> {
    /// Converts into an `Option` whose value type is a placeholder.
    ///
    /// `Success` becomes `None` and a failure carries through unchanged; the
    /// `Some` state is unreachable, which [`Infallible`] encodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::{Option, Validation};
    ///
    /// assert!(Validation::<&str>::success().to_option().is_none());
    /// assert_eq!(
    ///     Validation::failure("bad").to_option().into_failure(),
    ///     Some("bad")
    /// );
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<Infallible, F> {
        self.to_option_of()
    }

    /// Converts into an `Option` with a caller-chosen placeholder value type.
    #[inline]
    pub fn to_option_of<V>(self) -> Option<V, F> {
        match self {
            Self::Success => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Converts into a `Failable`, attaching `value` to a success.
    #[inline]
    pub fn to_failable<V>(self, value: V) -> Failable<V, F> {
        match self {
            Self::Success => Failable::Success(value),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Converts the failure into a `Maybe`, losing nothing but the tag.
    #[inline]
    pub fn to_maybe_failure(self) -> Maybe<F> {
        match self {
            Self::Success => Maybe::None,
            Self::Failure(failure) => Maybe::Some(failure),
        }
    }

    /// Converts into an `EValidation`.
    #[inline]
    pub fn to_evalidation(self) -> EValidation
    where
        F: Into<Exception>,
    {
        self.fail_map(Into::into)
    }
}

// =============================================================================
// Failable
// =============================================================================

impl<V, F> Failable<V, F> {
    /// Converts into a `Maybe`, dropping the failure payload.
    #[inline]
    pub fn to_maybe(self) -> Maybe<V> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into an `Option`. Lossless.
    #[inline]
    pub fn to_option(self) -> Option<V, F> {
        match self {
            Self::Success(value) => Option::Some(value),
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Converts into a `Validation`, dropping the success value.
    #[inline]
    pub fn to_validation(self) -> Validation<F> {
        match self {
            Self::Success(_) => Validation::Success,
            Self::Failure(failure) => Validation::Failure(failure),
        }
    }

    /// Converts into an `EFailable`.
    #[inline]
    pub fn to_efailable(self) -> EFailable<V>
    where
        F: Into<Exception>,
    {
        self.map_failure(Into::into)
    }
}

// =============================================================================
// Option
// =============================================================================

impl<V, F> Option<V, F> {
    /// Converts into a `Maybe`; both `None` and failures become `None`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<V> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None | Self::Failure(_) => Maybe::None,
        }
    }

    /// Collapses into a `Failable`, substituting `error_on_none` for `None`.
    ///
    /// A `Failable` has no empty state, so "absent but not broken" needs an
    /// explicit failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::{Failable, Option};
    ///
    /// let some = Option::<i32, &str>::some(1).to_failable("empty");
    /// let none = Option::<i32, &str>::none().to_failable("empty");
    /// let failed = Option::<i32, &str>::failure("broken").to_failable("empty");
    ///
    /// assert_eq!(some, Failable::success(1));
    /// assert_eq!(none, Failable::failure("empty"));
    /// assert_eq!(failed, Failable::failure("broken"));
    /// ```
    #[inline]
    pub fn to_failable(self, error_on_none: F) -> Failable<V, F> {
        match self {
            Self::Some(value) => Failable::Success(value),
            Self::None => Failable::Failure(error_on_none),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Collapses into a `Failable`, computing the substitute only for `None`.
    #[inline]
    pub fn to_failable_else<G>(self, error_on_none: G) -> Failable<V, F>
    where
        G: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Failable::Success(value),
            Self::None => Failable::Failure(error_on_none()),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Converts into a `Validation` where both `Some` and `None` succeed.
    ///
    /// The value is lost.
    #[inline]
    pub fn to_validation(self) -> Validation<F> {
        match self {
            Self::Some(_) | Self::None => Validation::Success,
            Self::Failure(failure) => Validation::Failure(failure),
        }
    }

    /// Converts into a `Validation` where `None` fails with `error_on_none`.
    #[inline]
    pub fn to_validation_with(self, error_on_none: F) -> Validation<F> {
        match self {
            Self::Some(_) => Validation::Success,
            Self::None => Validation::Failure(error_on_none),
            Self::Failure(failure) => Validation::Failure(failure),
        }
    }

    /// Converts into an `EOption`.
    #[inline]
    pub fn to_eoption(self) -> EOption<V>
    where
        F: Into<Exception>,
    {
        self.map_failure(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_to_failable_else_is_lazy() {
        let failable: Failable<i32, String> =
            Maybe::some(1).to_failable_else(|| panic!("failure must not be built"));
        assert_eq!(failable, Failable::success(1));
    }

    #[rstest]
    fn test_validation_to_option_of_placeholder() {
        let option: Option<u8, &str> = Validation::failure("bad").to_option_of();
        assert_eq!(option, Option::failure("bad"));
    }

    #[rstest]
    fn test_failable_to_efailable_wraps_std_error() {
        let failable: Failable<u8, std::num::ParseIntError> = "300".parse::<u8>().into();
        let converted = failable.to_efailable();
        assert!(converted.failure_holds(|e| e.is::<std::num::ParseIntError>()));
    }

    #[rstest]
    fn test_option_to_eoption_keeps_exception_identity() {
        let exception = Exception::msg("kept");
        let option: Option<i32, Exception> = Option::failure(exception.clone());
        assert!(option.to_eoption().failure_is(&exception));
    }
}
