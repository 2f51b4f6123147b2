//! # failables
//!
//! Monadic containers for values that may be missing or that may carry a
//! failure, with a closed conversion graph between them.
//!
//! ## Overview
//!
//! - **[`Maybe<V>`]**: a value or nothing
//! - **[`Validation<F>`]**: success without a value, or a failure payload
//! - **[`Failable<V, F>`]**: a success value or a failure payload
//! - **[`Option<V, F>`]**: a value, nothing, or a failure payload
//! - **E-variants**: [`EValidation`], [`EFailable`], [`EOption`], the same
//!   shapes with the failure fixed to a shared [`Exception`]
//!
//! Every container is immutable. Transformations return new instances and
//! never run their callback on a state that does not carry a value.
//!
//! Note that [`Option`] shadows the prelude's `Option` when imported by
//! name. The std variants `Some` and `None` remain in scope either way.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for the four containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use failables::prelude::*;
//!
//! fn lookup(id: u32) -> Option<&'static str, String> {
//!     match id {
//!         0 => Option::none(),
//!         1 => Option::some("root"),
//!         _ => Option::failure(format!("id {id} out of range")),
//!     }
//! }
//!
//! assert_eq!(lookup(1).map(str::len).or(0), 4);
//! assert!(lookup(0).or_error().is_err_and(|e| e.is_empty()));
//! assert_eq!(lookup(7).to_maybe(), Maybe::none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the E-variants and the error types.
///
/// # Usage
///
/// ```rust
/// use failables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::equality::DynamicEq;
    pub use crate::error::{AccessError, AccessErrorKind, ConstructionError};
    pub use crate::exceptional::*;
}

pub mod container;
pub mod convert;
pub mod equality;
pub mod error;
pub mod exceptional;

pub use container::{Failable, Maybe, Option, Validation};
pub use equality::DynamicEq;
pub use error::{AccessError, AccessErrorKind, ConstructionError};
pub use exceptional::{EFailable, EOption, EValidation, Exception, PanicError};

static_assertions::assert_impl_all!(Exception: Send, Sync, Clone);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_impl_all!(Validation<String>: Send, Sync);
static_assertions::assert_impl_all!(Failable<String, String>: Send, Sync);
static_assertions::assert_impl_all!(Option<String, String>: Send, Sync);
static_assertions::assert_impl_all!(EOption<String>: Send, Sync);
static_assertions::assert_impl_all!(AccessError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(ConstructionError: Send, Sync, std::error::Error);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<u8>>: Send, Sync);
