//! The opaque error payload carried by the E-variants.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

type SharedError = dyn StdError + Send + Sync + 'static;

/// A shared handle to an arbitrary error value.
///
/// `Exception` is the failure type fixed by [`EValidation`](crate::EValidation),
/// [`EFailable`](crate::EFailable) and [`EOption`](crate::EOption). Clones
/// share the same underlying error, and equality is reference identity:
/// two exceptions are equal only if they are clones of one another, even
/// when their messages coincide. Hashing follows the same rule.
///
/// Like `anyhow::Error`, `Exception` does not itself implement
/// [`std::error::Error`], which is what allows any error to convert into it
/// with `?`.
///
/// # Examples
///
/// ```rust
/// use failables::Exception;
///
/// let error = Exception::msg("disk full");
/// let same = error.clone();
/// let lookalike = Exception::msg("disk full");
///
/// assert_eq!(error, same);
/// assert_ne!(error, lookalike);
/// assert_eq!(error.to_string(), "disk full");
/// ```
#[derive(Clone)]
pub struct Exception(Arc<SharedError>);

impl Exception {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Creates an exception from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(MessageError(message.to_string()))
    }

    /// Returns `true` if both handles share the same underlying error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Borrows the underlying error.
    #[inline]
    pub fn as_error(&self) -> &SharedError {
        &*self.0
    }

    /// Returns the underlying error if it is of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::Exception;
    ///
    /// let parse_error = "x".parse::<i32>().unwrap_err();
    /// let exception = Exception::new(parse_error.clone());
    /// assert_eq!(exception.downcast_ref::<std::num::ParseIntError>(), Some(&parse_error));
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if the underlying error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.0.is::<E>()
    }
}

impl<E> From<E> for Exception
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Exception> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(exception: Exception) -> Self {
        Box::new(Shared(exception.0))
    }
}

impl Deref for Exception {
    type Target = SharedError;

    fn deref(&self) -> &Self::Target {
        self.as_error()
    }
}

impl AsRef<SharedError> for Exception {
    fn as_ref(&self) -> &SharedError {
        self.as_error()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Exception {}

impl Hash for Exception {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Exception").field(&self.0).finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

struct MessageError(String);

impl fmt::Debug for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl StdError for MessageError {}

// Lets an exception leave the crate as a boxed std error.
struct Shared(Arc<SharedError>);

impl fmt::Debug for Shared {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl fmt::Display for Shared {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl StdError for Shared {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// The error recorded when a callback run by `catching` panics.
///
/// # Examples
///
/// ```rust
/// use failables::{EFailable, PanicError};
///
/// let caught: EFailable<i32> = EFailable::catching(|| panic!("boom"));
/// let failure = caught.unwrap_failure();
/// assert_eq!(failure.downcast_ref::<PanicError>().unwrap().message(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }

    /// The panic message, when the payload was a string.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "callback panicked: {}", self.message)
    }
}

impl StdError for PanicError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::DefaultHasher;

    fn hash_of(exception: &Exception) -> u64 {
        let mut hasher = DefaultHasher::new();
        exception.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_exception_clone_is_identical() {
        let exception = Exception::msg("first");
        let clone = exception.clone();
        assert!(exception.ptr_eq(&clone));
        assert_eq!(hash_of(&exception), hash_of(&clone));
    }

    #[rstest]
    fn test_exception_lookalikes_differ() {
        assert_ne!(Exception::msg("same"), Exception::msg("same"));
    }

    #[rstest]
    fn test_exception_from_std_error() {
        let error = "nan".parse::<u8>().unwrap_err();
        let exception: Exception = error.into();
        assert!(exception.is::<std::num::ParseIntError>());
        assert!(!exception.is::<PanicError>());
    }

    #[rstest]
    fn test_exception_into_boxed_error_keeps_message() {
        let boxed: Box<dyn StdError + Send + Sync> = Exception::msg("lost").into();
        assert_eq!(boxed.to_string(), "lost");
    }

    #[rstest]
    fn test_exception_debug_shows_inner() {
        let debug = format!("{:?}", Exception::msg("hidden"));
        assert_eq!(debug, "Exception(\"hidden\")");
    }

    #[rstest]
    #[case(Box::new("static message"), "static message")]
    #[case(Box::new(String::from("owned message")), "owned message")]
    #[case(Box::new(17_u8), "non-string panic payload")]
    fn test_panic_error_payloads(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        assert_eq!(PanicError::from_payload(&*payload).message(), expected);
    }
}
