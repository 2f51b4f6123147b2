//! Type-respecting equality across erased values.
//!
//! `PartialEq` on the containers only exists between identical
//! instantiations, so `Option<i32, String>` and `Option<i64, String>` cannot
//! even be compared statically. [`DynamicEq`] covers the case where one side
//! has been erased to `&dyn Any`: the comparison succeeds only if the other
//! value has exactly the same concrete type and compares equal.
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//!
//! use failables::{DynamicEq, EOption, Exception, Option};
//!
//! let checked: EOption<i32> = EOption::some(1);
//! let generic: Option<i32, Exception> = Option::some(1);
//! let stringly: Option<i32, String> = Option::some(1);
//!
//! assert!(checked.eq_dyn(&generic));
//! assert!(generic.eq_dyn(&checked));
//! assert!(!checked.eq_dyn(&stringly));
//! assert!(!stringly.eq_dyn(&1_i32 as &dyn Any));
//! ```

use std::any::Any;

/// Equality against a value whose type is only known at runtime.
pub trait DynamicEq: Any {
    /// Returns `true` if `other` has the same concrete type as `self` and
    /// the two compare equal.
    fn eq_dyn(&self, other: &dyn Any) -> bool;
}

impl<T> DynamicEq for T
where
    T: Any + PartialEq,
{
    #[inline]
    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}
