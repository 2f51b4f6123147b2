//! Error types raised by constructors and extraction methods.
//!
//! Two categories exist and are never mixed:
//!
//! - [`ConstructionError`]: a `try_*` factory was handed an absent payload
//!   where a present one is required. This is a contract violation by the
//!   caller, not a modelled failure.
//! - [`AccessError`]: an extraction method such as `or_error` was called in
//!   a state that cannot satisfy it. The [`AccessErrorKind`] tells an empty
//!   container apart from a failed one.

use std::any::type_name;
use std::fmt;

/// Represents an attempt to build a container state from an absent payload.
///
/// # Examples
///
/// ```rust
/// use failables::Maybe;
///
/// let error = Maybe::<i32>::try_some(None).unwrap_err();
/// assert_eq!(error.container, "Maybe");
/// assert_eq!(error.constructor, "try_some");
/// assert_eq!(error.payload_type, "i32");
/// assert_eq!(
///     format!("{error}"),
///     "Maybe::try_some: cannot construct from an absent `i32` payload"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionError {
    /// The name of the container family (`"Maybe"`, `"Option"`, ...).
    pub container: &'static str,
    /// The name of the constructor that rejected the payload.
    pub constructor: &'static str,
    /// The type name of the payload that was absent.
    pub payload_type: &'static str,
}

impl ConstructionError {
    pub(crate) fn absent<T>(container: &'static str, constructor: &'static str) -> Self {
        Self {
            container,
            constructor,
            payload_type: type_name::<T>(),
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}::{}: cannot construct from an absent `{}` payload",
            self.container, self.constructor, self.payload_type
        )
    }
}

impl std::error::Error for ConstructionError {}

/// Why an extraction method could not produce the requested payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessErrorKind {
    /// No value is present because the container is empty.
    Empty,
    /// No value is present because the container holds a failure.
    Failed,
    /// No failure is present because the container succeeded.
    Succeeded,
}

impl AccessErrorKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::Empty => "no value present, the container is empty",
            Self::Failed => "no value present, the container holds a failure",
            Self::Succeeded => "no failure present, the container succeeded",
        }
    }
}

impl fmt::Display for AccessErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.describe())
    }
}

/// Represents an extraction attempted in a state unable to satisfy it.
///
/// # Examples
///
/// ```rust
/// use failables::{AccessErrorKind, Option};
///
/// let empty = Option::<i32, String>::none().or_error().unwrap_err();
/// assert_eq!(empty.kind, AccessErrorKind::Empty);
///
/// let failed = Option::<i32, String>::failure("bad".to_string())
///     .or_error()
///     .unwrap_err();
/// assert_eq!(failed.kind, AccessErrorKind::Failed);
/// assert_eq!(
///     format!("{failed}"),
///     "Option::or_error: no value present, the container holds a failure (type `i32`)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    /// What prevented the extraction.
    pub kind: AccessErrorKind,
    /// The name of the container family.
    pub container: &'static str,
    /// The name of the extraction method.
    pub method: &'static str,
    /// The type name of the payload that was requested.
    pub payload_type: &'static str,
    /// A caller-supplied message replacing the default description.
    pub message: Option<String>,
}

impl AccessError {
    pub(crate) fn new<T>(
        kind: AccessErrorKind,
        container: &'static str,
        method: &'static str,
    ) -> Self {
        Self {
            kind,
            container,
            method,
            payload_type: type_name::<T>(),
            message: None,
        }
    }

    pub(crate) fn with_message(mut self, message: impl fmt::Display) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Returns `true` if the container was empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, AccessErrorKind::Empty)
    }

    /// Returns `true` if the container held a failure.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self.kind, AccessErrorKind::Failed)
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => formatter.write_str(message),
            None => write!(
                formatter,
                "{}::{}: {} (type `{}`)",
                self.container, self.method, self.kind, self.payload_type
            ),
        }
    }
}

impl std::error::Error for AccessError {}
