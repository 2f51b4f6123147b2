//! Maybe type - a value that is either present or absent.
//!
//! `Maybe<V>` is the leaf of the container family: it has no notion of
//! failure, only `Some(value)` or `None`. Absence at an API boundary is
//! expressed with the std `Option<V>` input of [`Maybe::try_some`] and
//! [`Maybe::from_option`], which keeps "the caller passed nothing" apart from
//! the container's own first-class `None` state.
//!
//! # Examples
//!
//! ```rust
//! use failables::Maybe;
//!
//! let port: Maybe<u16> = Maybe::some(8080);
//! assert_eq!(port.map(|p| p + 1).or(0), 8081);
//!
//! let missing: Maybe<u16> = Maybe::from_option(None);
//! assert!(missing.is_none());
//! assert_eq!(missing.or(80), 80);
//! ```

use std::fmt;

use crate::error::{AccessError, AccessErrorKind, ConstructionError};

const CONTAINER: &str = "Maybe";

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `V` - The type of the value
///
/// # Examples
///
/// ```rust
/// use failables::Maybe;
///
/// let name = Maybe::some("ferris".to_string());
/// assert!(name.is("ferris"));
/// assert!(!Maybe::<String>::NONE.holds(|n| n.is_empty()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<V> {
    /// A present value.
    Some(V),
    /// No value.
    None,
}

impl<V> Maybe<V> {
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

    /// Wraps a value that may be absent at the call site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `value` is `None`. Use
    /// [`Maybe::from_option`] to turn absence into the empty state instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Maybe;
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::some(1)));
    /// assert!(Maybe::<i32>::try_some(None).is_err());
    /// ```
    pub fn try_some(value: Option<V>) -> Result<Self, ConstructionError> {
        value
            .map(Self::Some)
            .ok_or_else(|| ConstructionError::absent::<V>(CONTAINER, "try_some"))
    }

    /// Ingests a value that may be absent, mapping absence to `None`.
    #[inline]
    pub fn from_option(value: Option<V>) -> Self {
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

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if the value is present and equal to `expected`.
    ///
    /// String payloads compare byte for byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Maybe;
    ///
    /// assert!(Maybe::some(3).is(&3));
    /// assert!(!Maybe::<i32>::none().is(&3));
    /// ```
    #[inline]
    pub fn is<Q>(&self, expected: &Q) -> bool
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Self::Some(value) => value == expected,
            Self::None => false,
        }
    }

    /// Returns `true` if the value is present and satisfies `predicate`.
    #[inline]
    pub fn holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// `function` is never invoked on `None`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a function whose result may be absent.
    ///
    /// An absent result collapses to `None`, so the output never nests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Maybe;
    ///
    /// let parsed = Maybe::some("12").map_optional(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::some(12));
    ///
    /// let rejected = Maybe::some("twelve").map_optional(|s| s.parse::<i32>().ok());
    /// assert_eq!(rejected, Maybe::none());
    /// ```
    #[inline]
    pub fn map_optional<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(V) -> Option<U>,
    {
        match self {
            Self::Some(value) => Maybe::from_option(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that itself produces a `Maybe`.
    ///
    /// The callback's result is returned as is.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(V) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
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
            Self::None => default,
        }
    }

    /// Returns the value or computes one from `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Empty`] when
    /// no value is present.
    pub fn or_error(self) -> Result<V, AccessError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AccessError::new::<V>(
                AccessErrorKind::Empty,
                CONTAINER,
                "or_error",
            )),
        }
    }

    /// Returns the value, reporting absence with a custom message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] of kind [`AccessErrorKind::Empty`]
    /// carrying `message` when no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Maybe;
    ///
    /// let error = Maybe::<u32>::none()
    ///     .or_error_message(format_args!("no user with id {}", 42))
    ///     .unwrap_err();
    /// assert_eq!(error.to_string(), "no user with id 42");
    /// ```
    pub fn or_error_message(self, message: impl fmt::Display) -> Result<V, AccessError> {
        self.or_error().map_err(|error| {
            AccessError {
                method: "or_error_message",
                ..error
            }
            .with_message(message)
        })
    }

    /// Returns the value, or fails with exactly the supplied `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` when no value is present.
    #[inline]
    pub fn or_error_with<E>(self, error: E) -> Result<V, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with the [`AccessErrorKind::Empty`] description if no value is
    /// present.
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
    pub const fn value_ref(&self) -> Option<&V> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into a std `Option`, consuming the maybe.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the payload, producing a `Maybe<&V>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&V> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Iterates over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&V> {
        self.value_ref().into_iter()
    }
}

impl<V: Default> Maybe<V> {
    /// Returns the value, or `V::default()` if absent.
    #[inline]
    pub fn or_default(self) -> V {
        self.or_else(V::default)
    }
}

impl<V> Default for Maybe<V> {
    fn default() -> Self {
        Self::None
    }
}

impl<V: fmt::Display> fmt::Display for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<V> IntoIterator for Maybe<V> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Maybe<V> {
    type Item = &'a V;
    type IntoIter = std::option::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
