//! Option type - a value, an absence, or a failure.
//!
//! `Option<V, F>` combines [`Maybe`](crate::Maybe) and
//! [`Failable`](crate::Failable) into a ternary container:
//!
//! - `Some(value)`: the operation produced a value
//! - `None`: the operation legitimately produced nothing
//! - `Failure(failure)`: the operation broke
//!
//! Every operation dispatches on exactly one of these three tags; there is
//! no pair of flags that could disagree.
//!
//! Because this type shares its name with the std prelude's `Option`,
//! modules importing it refer to the std type as `core::option::Option`.
//!
//! # Examples
//!
//! ```rust
//! use failables::Option;
//!
//! let found: Option<i32, String> = Option::some(3);
//! assert_eq!(found.map(|x| x + 1).or(-1), 4);
//!
//! let broken: Option<i32, String> = Option::failure("bad".to_string());
//! assert_eq!(broken.map(|x| x + 1).or(-1), -1);
//!
//! let missing: Option<i32, String> = Option::none();
//! assert!(missing.or_error().unwrap_err().is_empty());
//! ```

use std::fmt;

use crate::error::{AccessError, AccessErrorKind, ConstructionError};

type StdOption<T> = core::option::Option<T>;

const CONTAINER: &str = "Option";

/// A value (`Some`), an absence (`None`), or a failure (`Failure`).
///
/// # Type Parameters
///
/// * `V` - The type of the value
/// * `F` - The type of the failure
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<V, F> {
    /// A present value.
    Some(V),
    /// No value, and no failure either.
    None,
    /// The computation failed.
    Failure(F),
}

impl<V, F> Option<V, F> {
    /// The canonical empty instance.
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: V) -> Self {
        Self::Some(value)
    }

    /// Returns the empty instance.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a failure payload.
    #[inline]
    pub const fn failure(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Wraps a value that may be absent at the call site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `value` is `None`.
    pub fn try_some(value: StdOption<V>) -> Result<Self, ConstructionError> {
        value
            .map(Self::Some)
            .ok_or_else(|| ConstructionError::absent::<V>(CONTAINER, "try_some"))
    }

    /// Wraps a failure payload that may be absent at the call site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `failure` is `None`.
    pub fn try_failure(failure: StdOption<F>) -> Result<Self, ConstructionError> {
        failure
            .map(Self::Failure)
            .ok_or_else(|| ConstructionError::absent::<F>(CONTAINER, "try_failure"))
    }

    /// Ingests a value that may be absent, mapping absence to `None`.
    #[inline]
    pub fn from_option(value: StdOption<V>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if neither a value nor a failure is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if a value is present and equal to `expected`.
    #[inline]
    pub fn is<Q>(&self, expected: &Q) -> bool
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Self::Some(value) => value == expected,
            Self::None | Self::Failure(_) => false,
        }
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None | Self::Failure(_) => false,
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
            Self::Failure(failure) => failure == expected,
            Self::Some(_) | Self::None => false,
        }
    }

    /// Returns `true` if this is a failure satisfying `predicate`.
    #[inline]
    pub fn failure_holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&F) -> bool,
    {
        match self {
            Self::Failure(failure) => predicate(failure),
            Self::Some(_) | Self::None => false,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// `None` stays `None` and a failure passes through untouched; in both
    /// cases `function` is never invoked.
    #[inline]
    pub fn map<U, G>(self, function: G) -> Option<U, F>
    where
        G: FnOnce(V) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Applies a function whose result may be absent.
    ///
    /// An absent result collapses to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Option;
    ///
    /// let even = |n: i32| if n % 2 == 0 { Some(n) } else { None };
    /// assert_eq!(Option::<i32, ()>::some(4).map_optional(even), Option::some(4));
    /// assert_eq!(Option::<i32, ()>::some(3).map_optional(even), Option::none());
    /// ```
    #[inline]
    pub fn map_optional<U, G>(self, function: G) -> Option<U, F>
    where
        G: FnOnce(V) -> StdOption<U>,
    {
        match self {
            Self::Some(value) => Option::from_option(function(value)),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Chains a computation that itself produces an `Option`.
    ///
    /// The callback's `Some`, `None` or `Failure` is returned as is; it is
    /// never wrapped or collapsed further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Option;
    ///
    /// let chained = Option::<i32, String>::some(1).flat_map(|_| Option::<i32, String>::none());
    /// assert_eq!(chained, Option::none());
    /// ```
    #[inline]
    pub fn flat_map<U, G>(self, function: G) -> Option<U, F>
    where
        G: FnOnce(V) -> Option<U, F>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Applies a function to the failure if present.
    #[inline]
    pub fn map_failure<G, M>(self, function: M) -> Option<V, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(function(failure)),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value or `default`.
    #[inline]
    pub fn or(self, default: V) -> V {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Failure(_) => default,
        }
    }

    /// Returns the value or computes one lazily.
    #[inline]
    pub fn or_else<G>(self, function: G) -> V
    where
        G: FnOnce() -> V,
    {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Failure(_) => function(),
        }
    }

    fn access_error<T>(&self, method: &'static str) -> AccessError {
        let kind = match self {
            Self::Some(_) => AccessErrorKind::Succeeded,
            Self::None => AccessErrorKind::Empty,
            Self::Failure(_) => AccessErrorKind::Failed,
        };
        AccessError::new::<T>(kind, CONTAINER, method)
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Empty`] for
    /// `None` and [`AccessErrorKind::Failed`] for a failure, so callers can
    /// pick a recovery strategy per cause.
    pub fn or_error(self) -> Result<V, AccessError> {
        match self {
            Self::Some(value) => Ok(value),
            other => Err(other.access_error::<V>("or_error")),
        }
    }

    /// Returns the value, reporting its absence with a custom message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message`, of kind
    /// [`AccessErrorKind::Empty`] or [`AccessErrorKind::Failed`].
    pub fn or_error_message(self, message: impl fmt::Display) -> Result<V, AccessError> {
        match self {
            Self::Some(value) => Ok(value),
            other => Err(other
                .access_error::<V>("or_error_message")
                .with_message(message)),
        }
    }

    /// Returns the value, or fails with exactly the supplied `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` for `None` and for a failure.
    #[inline]
    pub fn or_error_with<E>(self, error: E) -> Result<V, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None | Self::Failure(_) => Err(error),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Succeeded`]
    /// for `Some` and [`AccessErrorKind::Empty`] for `None`.
    pub fn failure_or_error(self) -> Result<F, AccessError> {
        match self {
            Self::Failure(failure) => Ok(failure),
            other => Err(other.access_error::<F>("failure_or_error")),
        }
    }

    /// Returns the value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics with the access error description for `None` and failures.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self.or_error() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value_ref(&self) -> StdOption<&V> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure if present.
    #[inline]
    pub const fn failure_ref(&self) -> StdOption<&F> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Converts into the optional value, consuming the option.
    #[inline]
    pub fn into_value(self) -> StdOption<V> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Failure(_) => None,
        }
    }

    /// Converts into the optional failure, consuming the option.
    #[inline]
    pub fn into_failure(self) -> StdOption<F> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Borrows the payloads, producing an `Option<&V, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&V, &F> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
            Self::Failure(failure) => Option::Failure(failure),
        }
    }

    /// Iterates over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&V> {
        self.value_ref().into_iter()
    }
}

impl<V: Default, F> Option<V, F> {
    /// Returns the value, or `V::default()` for `None` and failures.
    #[inline]
    pub fn or_default(self) -> V {
        self.or_else(V::default)
    }
}

impl<V, F> Default for Option<V, F> {
    fn default() -> Self {
        Self::None
    }
}

impl<V: fmt::Display, F: fmt::Display> fmt::Display for Option<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
            Self::Failure(failure) => write!(formatter, "Failure({failure})"),
        }
    }
}

impl<V, F> IntoIterator for Option<V, F> {
    type Item = V;
    type IntoIter = core::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, V, F> IntoIterator for &'a Option<V, F> {
    type Item = &'a V;
    type IntoIter = core::option::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
