//! The container family.
//!
//! Leaves first, each later type generalising the earlier ones:
//!
//! - [`Maybe`]: a value or nothing
//! - [`Validation`]: success or a failure payload
//! - [`Failable`]: a success value or a failure payload
//! - [`Option`]: a value, nothing, or a failure payload
//!
//! All four are plain enums with public variants, so they can be pattern
//! matched directly. Conversions between them live in [`crate::convert`].

mod failable;
mod maybe;
mod option;
mod validation;

pub use failable::Failable;
pub use maybe::Maybe;
pub use option::Option;
pub use validation::Validation;
