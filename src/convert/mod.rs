//! The conversion lattice between container families.
//!
//! - Cross-family `to_*` methods, tabulated below
//! - `flatten` / `flatten_with` for one level of nesting
//! - `From` bridges to std `Option` and `Result`
//!
//! | From \ To     | `Maybe`          | `Validation`            | `Failable`                 | `Option`                  |
//! |---------------|------------------|-------------------------|----------------------------|---------------------------|
//! | `Maybe`       | -                | -                       | `to_failable(f)`           | `to_option()`             |
//! | `Validation`  | `to_maybe_failure()` | -                   | `to_failable(v)`           | `to_option()`             |
//! | `Failable`    | `to_maybe()`     | `to_validation()`       | -                          | `to_option()`             |
//! | `Option`      | `to_maybe()`     | `to_validation[_with]`  | `to_failable(error_on_none)` | -                       |
//!
//! Every target also has an E-variant form (`to_efailable`, `to_eoption`,
//! `to_evalidation`) that fixes the failure type to
//! [`Exception`](crate::Exception).

mod flatten;
mod lattice;
mod std_interop;
