//! Failable type - a computation that produced a value or a failure.
//!
//! This module provides the `Failable<V, F>` type, which is either
//! `Success(V)` or `Failure(F)`. Both sides carry a payload, which makes it
//! the natural shape for:
//!
//! - Operations that must return a value unless they break
//! - Boundaries where an empty result is not a meaningful answer
//! - Recovering a value from a failure with [`Failable::or_use`]
//!
//! # Examples
//!
//! ```rust
//! use failables::Failable;
//!
//! fn parse(input: &str) -> Failable<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|_| format!("`{input}` is not a number"))
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Failable::success(42));
//!
//! let recovered = parse("abc").or_use(|message| message.len() as i32);
//! assert_eq!(recovered, 21);
//! ```

use std::fmt;

use crate::error::{AccessError, AccessErrorKind, ConstructionError};

const CONTAINER: &str = "Failable";

/// A value that is either a `Success(V)` or a `Failure(F)`.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `F` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use failables::Failable;
///
/// let success: Failable<i32, String> = Failable::success(42);
/// let failure: Failable<i32, String> = Failable::failure("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Failable::success(84));
/// assert_eq!(failure.map(|x| x * 2), Failable::failure("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failable<V, F> {
    /// The success variant carrying a value.
    Success(V),
    /// The failure variant carrying a failure payload.
    Failure(F),
}

impl<V, F> Failable<V, F> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value.
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure payload.
    #[inline]
    pub const fn failure(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Wraps a success value that may be absent at the call site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let built = Failable::<i32, String>::try_success(Some(1));
    /// assert_eq!(built, Ok(Failable::success(1)));
    ///
    /// let error = Failable::<i32, String>::try_success(None).unwrap_err();
    /// assert_eq!(error.payload_type, "i32");
    /// ```
    pub fn try_success(value: Option<V>) -> Result<Self, ConstructionError> {
        value
            .map(Self::Success)
            .ok_or_else(|| ConstructionError::absent::<V>(CONTAINER, "try_success"))
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

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let success: Failable<i32, String> = Failable::success(42);
    /// assert!(success.is_success());
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if this is a success equal to `expected`.
    #[inline]
    pub fn is<Q>(&self, expected: &Q) -> bool
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Self::Success(value) => value == expected,
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a success whose value satisfies `predicate`.
    #[inline]
    pub fn holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a failure equal to `expected`.
    #[inline]
    pub fn failure_is<Q>(&self, expected: &Q) -> bool
    where
        F: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Self::Success(_) => false,
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
            Self::Success(_) => false,
            Self::Failure(failure) => predicate(failure),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let success: Failable<i32, String> = Failable::success(42);
    /// assert_eq!(success.value_ref(), Some(&42));
    /// assert_eq!(success.failure_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Borrows both sides, producing a `Failable<&V, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Failable<&V, &F> {
        match self {
            Self::Success(value) => Failable::Success(value),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into the optional success value, consuming the failable.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the optional failure, consuming the failable.
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one lazily.
    #[inline]
    pub fn or_else<G>(self, function: G) -> V
    where
        G: FnOnce() -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => function(),
        }
    }

    /// Recovers a value by transforming the failure.
    ///
    /// This collapses the failable into a single concrete value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let failure: Failable<usize, String> = Failable::failure("four".to_string());
    /// assert_eq!(failure.or_use(|message| message.len()), 4);
    /// ```
    #[inline]
    pub fn or_use<G>(self, function: G) -> V
    where
        G: FnOnce(F) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => function(failure),
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Failed`] when
    /// this is a failure.
    pub fn or_error(self) -> Result<V, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(AccessError::new::<V>(
                AccessErrorKind::Failed,
                CONTAINER,
                "or_error",
            )),
        }
    }

    /// Returns the success value, reporting a failure with a custom message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Failed`]
    /// carrying `message` when this is a failure.
    pub fn or_error_message(self, message: impl fmt::Display) -> Result<V, AccessError> {
        self.or_error().map_err(|error| {
            AccessError {
                method: "or_error_message",
                ..error
            }
            .with_message(message)
        })
    }

    /// Returns the success value, or fails with exactly the supplied `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` when this is a failure.
    #[inline]
    pub fn or_error_with<E>(self, error: E) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(error),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Succeeded`]
    /// when this is a success.
    pub fn failure_or_error(self) -> Result<F, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError::new::<F>(
                AccessErrorKind::Succeeded,
                CONTAINER,
                "failure_or_error",
            )),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Returns the success value, consuming the failable.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self.or_error() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the failure payload, consuming the failable.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> F {
        match self.failure_or_error() {
            Ok(failure) => failure,
            Err(error) => panic!("{error}"),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// If this is `Success(v)`, returns `Success(function(v))`.
    /// If this is `Failure(f)`, returns `Failure(f)` unchanged.
    #[inline]
    pub fn map<U, G>(self, function: G) -> Failable<U, F>
    where
        G: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Failable::Success(function(value)),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Applies a function to the failure if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Failable;
    ///
    /// let failure: Failable<i32, &str> = Failable::failure("bad");
    /// assert_eq!(failure.map_failure(str::len), Failable::failure(3));
    ///
    /// let success: Failable<i32, &str> = Failable::success(1);
    /// assert_eq!(success.map_failure(str::len), Failable::success(1));
    /// ```
    #[inline]
    pub fn map_failure<G, M>(self, function: M) -> Failable<V, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Failable::Success(value),
            Self::Failure(failure) => Failable::Failure(function(failure)),
        }
    }

    /// Chains a computation that itself may fail.
    ///
    /// The callback's result is returned as is.
    #[inline]
    pub fn flat_map<U, G>(self, function: G) -> Failable<U, F>
    where
        G: FnOnce(V) -> Failable<U, F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<U, G, S, M>(self, success_function: S, failure_function: M) -> Failable<U, G>
    where
        S: FnOnce(V) -> U,
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Failable::Success(success_function(value)),
            Self::Failure(failure) => Failable::Failure(failure_function(failure)),
        }
    }

    /// Eliminates the failable by applying one of two functions.
    #[inline]
    pub fn fold<T, S, M>(self, success_function: S, failure_function: M) -> T
    where
        S: FnOnce(V) -> T,
        M: FnOnce(F) -> T,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(failure) => failure_function(failure),
        }
    }

    /// Iterates over the success value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&V> {
        self.value_ref().into_iter()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<V: fmt::Display, F: fmt::Display> fmt::Display for Failable<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(failure) => write!(formatter, "Failure({failure})"),
        }
    }
}

impl<V, F> IntoIterator for Failable<V, F> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, V, F> IntoIterator for &'a Failable<V, F> {
    type Item = &'a V;
    type IntoIter = std::option::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
