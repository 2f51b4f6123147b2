//! Constructors bridging error-returning and panicking code into the
//! E-variants.
//!
//! These are the only places where the crate turns an arbitrary error into
//! a failure payload. Construction and access errors raised elsewhere are
//! never caught here.

use std::panic::{self, UnwindSafe};

use super::exception::{Exception, PanicError};
use crate::container::{Failable, Option, Validation};

type StdOption<T> = core::option::Option<T>;

fn caught(payload: &(dyn std::any::Any + Send)) -> Exception {
    Exception::new(PanicError::from_payload(payload))
}

impl Validation<Exception> {
    /// Runs a check that reports problems as errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::{EValidation, Exception};
    ///
    /// let checked = EValidation::wrapping(|| {
    ///     "80".parse::<u16>()?;
    ///     Ok(())
    /// });
    /// assert!(checked.is_success());
    ///
    /// let broken = EValidation::wrapping(|| Err(Exception::msg("refused")));
    /// assert!(broken.is_failure());
    /// ```
    pub fn wrapping<C>(callback: C) -> Self
    where
        C: FnOnce() -> Result<(), Exception>,
    {
        match callback() {
            Ok(()) => Self::Success,
            Err(exception) => Self::Failure(exception),
        }
    }
}

impl<V> Failable<V, Exception> {
    /// Runs `callback`, capturing its error as the failure.
    ///
    /// The returned failure holds exactly the error the callback produced,
    /// so it compares equal to any clone of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::{EFailable, Exception};
    ///
    /// assert_eq!(EFailable::wrapping(|| Ok(5)), EFailable::success(5));
    ///
    /// let error = Exception::msg("unreachable host");
    /// let captured: EFailable<i32> = EFailable::wrapping(|| Err(error.clone()));
    /// assert_eq!(captured, EFailable::failure(error));
    /// ```
    pub fn wrapping<C>(callback: C) -> Self
    where
        C: FnOnce() -> Result<V, Exception>,
    {
        match callback() {
            Ok(value) => Self::Success(value),
            Err(exception) => Self::Failure(exception),
        }
    }

    /// Runs `callback`, turning a panic into a failure holding a
    /// [`PanicError`].
    pub fn catching<C>(callback: C) -> Self
    where
        C: FnOnce() -> V + UnwindSafe,
    {
        match panic::catch_unwind(callback) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(caught(&*payload)),
        }
    }
}

impl<V> Option<V, Exception> {
    /// Runs `callback`, capturing its error as the failure.
    pub fn wrapping<C>(callback: C) -> Self
    where
        C: FnOnce() -> Result<V, Exception>,
    {
        match callback() {
            Ok(value) => Self::Some(value),
            Err(exception) => Self::Failure(exception),
        }
    }

    /// Runs `callback` whose value may be absent.
    ///
    /// An absent value becomes `None`, mirroring [`Option::from_option`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use failables::EOption;
    ///
    /// let words = ["alpha", "beta"];
    /// let third: EOption<&str> = EOption::wrapping_optional(|| Ok(words.get(2).copied()));
    /// assert!(third.is_none());
    /// ```
    pub fn wrapping_optional<C>(callback: C) -> Self
    where
        C: FnOnce() -> Result<StdOption<V>, Exception>,
    {
        match callback() {
            Ok(value) => Self::from_option(value),
            Err(exception) => Self::Failure(exception),
        }
    }

    /// Runs `callback`, turning a panic into a failure holding a
    /// [`PanicError`].
    pub fn catching<C>(callback: C) -> Self
    where
        C: FnOnce() -> V + UnwindSafe,
    {
        match panic::catch_unwind(callback) {
            Ok(value) => Self::Some(value),
            Err(payload) => Self::Failure(caught(&*payload)),
        }
    }
}
