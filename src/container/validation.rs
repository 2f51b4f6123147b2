//! Validation type - a check that either passed or failed.
//!
//! `Validation<F>` is the mirror image of [`Maybe`](crate::Maybe): the
//! success side carries nothing and only the failure side has a payload.
//! There is therefore no value `map`; [`Validation::fail_map`] transforms
//! the failure instead.

use std::fmt;

use crate::error::{AccessError, AccessErrorKind, ConstructionError};

const CONTAINER: &str = "Validation";

/// The outcome of a check: `Success` or `Failure(failure)`.
///
/// # Examples
///
/// ```rust
/// use failables::Validation;
///
/// fn check_age(age: u32) -> Validation<String> {
///     if age >= 18 {
///         Validation::success()
///     } else {
///         Validation::failure(format!("{age} is under age"))
///     }
/// }
///
/// assert!(check_age(30).is_success());
/// assert!(check_age(12).failure_is("12 is under age"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<F> {
    /// The check passed.
    Success,
    /// The check failed with a payload.
    Failure(F),
}

impl<F> Validation<F> {
    /// The canonical success instance.
    pub const SUCCESS: Self = Self::Success;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the success instance.
    #[inline]
    pub const fn success() -> Self {
        Self::Success
    }

    /// Wraps a failure payload.
    #[inline]
    pub const fn failure(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Wraps a failure payload that may be absent at the call site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `failure` is `None`.
    pub fn try_failure(failure: Option<F>) -> Result<Self, ConstructionError> {
        failure
            .map(Self::Failure)
            .ok_or_else(|| ConstructionError::absent::<F>(CONTAINER, "try_failure"))
    }

    /// Ingests an optional failure: absence means the check passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Validation;
    ///
    /// assert_eq!(Validation::<&str>::from_option(None), Validation::success());
    /// assert_eq!(Validation::from_option(Some("broken")), Validation::failure("broken"));
    /// ```
    #[inline]
    pub fn from_option(failure: Option<F>) -> Self {
        match failure {
            Some(failure) => Self::Failure(failure),
            None => Self::Success,
        }
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if the check passed.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the check failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if this is a failure equal to `expected`.
    #[inline]
    pub fn failure_is<Q>(&self, expected: &Q) -> bool
    where
        F: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Self::Success => false,
            Self::Failure(failure) => failure == expected,
        }
    }

    /// Returns `true` if this is a failure satisfying `predicate`.
    #[inline]
    pub fn failure_holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&F) -> bool,
    {
        match self {
            Self::Success => false,
            Self::Failure(failure) => predicate(failure),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms the failure payload; a success stays a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Validation;
    ///
    /// let failed: Validation<&str> = Validation::failure("io");
    /// assert_eq!(failed.fail_map(str::len), Validation::failure(2));
    ///
    /// let passed: Validation<&str> = Validation::success();
    /// assert_eq!(passed.fail_map(str::len), Validation::success());
    /// ```
    #[inline]
    pub fn fail_map<G, M>(self, function: M) -> Validation<G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success => Validation::Success,
            Self::Failure(failure) => Validation::Failure(function(failure)),
        }
    }

    /// Returns `other` if this check passed, otherwise keeps this failure.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Success => other,
            Self::Failure(failure) => Self::Failure(failure),
        }
    }

    /// Runs the next check only if this one passed.
    #[inline]
    pub fn and_then<N>(self, next: N) -> Self
    where
        N: FnOnce() -> Self,
    {
        match self {
            Self::Success => next(),
            Self::Failure(failure) => Self::Failure(failure),
        }
    }

    // =========================================================================
    // Failure Extraction
    // =========================================================================

    /// Returns a reference to the failure if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Converts into the optional failure, consuming the validation.
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Succeeded`]
    /// when the check passed.
    pub fn failure_or_error(self) -> Result<F, AccessError> {
        match self {
            Self::Success => Err(AccessError::new::<F>(
                AccessErrorKind::Succeeded,
                CONTAINER,
                "failure_or_error",
            )),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Returns the failure payload, reporting success with a custom message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Succeeded`]
    /// carrying `message` when the check passed.
    pub fn failure_or_error_message(self, message: impl fmt::Display) -> Result<F, AccessError> {
        self.failure_or_error().map_err(|error| {
            AccessError {
                method: "failure_or_error_message",
                ..error
            }
            .with_message(message)
        })
    }

    /// Borrows the payload, producing a `Validation<&F>`.
    #[inline]
    pub const fn as_ref(&self) -> Validation<&F> {
        match self {
            Self::Success => Validation::Success,
            Self::Failure(failure) => Validation::Failure(failure),
        }
    }
}

impl<F> Default for Validation<F> {
    fn default() -> Self {
        Self::Success
    }
}

impl<F: fmt::Display> fmt::Display for Validation<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure(failure) => write!(formatter, "Failure({failure})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_validation_and_keeps_first_failure() {
        let first: Validation<&str> = Validation::failure("first");
        let second: Validation<&str> = Validation::failure("second");
        assert_eq!(first.and(second), Validation::failure("first"));
    }

    #[rstest]
    fn test_validation_and_then_skips_after_failure() {
        let failed: Validation<&str> = Validation::failure("stop");
        let result = failed.and_then(|| panic!("next check must not run"));
        assert_eq!(result, Validation::failure("stop"));
    }

    #[rstest]
    fn test_validation_failure_or_error_on_success() {
        let error = Validation::<String>::success().failure_or_error().unwrap_err();
        assert_eq!(error.kind, AccessErrorKind::Succeeded);
        assert_eq!(error.container, "Validation");
    }
}
