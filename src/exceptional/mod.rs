//! E-variants: containers whose failure type is fixed to [`Exception`].
//!
//! Each E-variant is an alias of its generic counterpart, so every
//! operation, conversion, equality and hash is literally shared:
//!
//! | E-variant        | Generic counterpart          |
//! |------------------|------------------------------|
//! | [`EValidation`]  | `Validation<Exception>`      |
//! | [`EFailable<V>`] | `Failable<V, Exception>`     |
//! | [`EOption<V>`]   | `Option<V, Exception>`       |
//!
//! On top of the shared behavior, `wrapping` constructors run a callback
//! and capture the error it returns, and `catching` constructors capture a
//! panic. These are the only bridges from error-raising code into the
//! container family.
//!
//! # Examples
//!
//! ```rust
//! use failables::{EOption, Exception, Option};
//!
//! let checked: EOption<i32> = EOption::some(1);
//! let generic: Option<i32, Exception> = Option::some(1);
//! assert_eq!(checked, generic);
//! assert_eq!(generic, checked);
//!
//! let loaded: EOption<u8> = EOption::wrapping(|| Ok("7".parse::<u8>()?));
//! assert_eq!(loaded, EOption::some(7));
//! ```

mod exception;
mod wrapping;

pub use exception::{Exception, PanicError};

use crate::container::{Failable, Option, Validation};

/// A [`Validation`] whose failure is an [`Exception`].
pub type EValidation = Validation<Exception>;

/// A [`Failable`] whose failure is an [`Exception`].
pub type EFailable<V> = Failable<V, Exception>;

/// An [`Option`] whose failure is an [`Exception`].
pub type EOption<V> = Option<V, Exception>;
