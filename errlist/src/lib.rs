//! Aggregate and classified errors.
//!
//! [`ErrorList`] collects independent failures (typically from multi-field
//! validation) and reports them as one error. [`BadRequestError`] and
//! [`NotFoundError`] tag an error as caused by the caller, so a boundary
//! layer can tell user errors from internal faults with [`kind_of`],
//! [`is_bad_request`] or [`is_not_found`]. [`Error`] carries the same
//! classification as an enum for code that prefers to match on it.

pub mod compare;
pub mod error;
pub mod kind;
pub mod list;
pub mod report;

#[cfg(test)]
mod testing;

pub use compare::compare_unordered;
pub use error::{BoxError, Error, Result};
pub use kind::{is_bad_request, is_not_found, kind_of, BadRequestError, ErrorKind, NotFoundError};
pub use list::ErrorList;
pub use report::log_error;
