//! Marker wrappers that classify an error as caused by the caller, and the
//! predicates a boundary layer uses to branch on that classification.

use std::error::Error as StdError;
use std::fmt;

use crate::error::{BoxError, Error};
use crate::list::ErrorList;

/// Classification of an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Several independent failures reported together.
    Aggregate,
    /// The caller sent invalid input.
    BadRequest,
    /// The requested resource does not exist.
    NotFound,
    /// Anything unclassified; treated as an internal fault.
    Plain,
}

impl ErrorKind {
    /// True for kinds caused by the caller rather than by the system.
    pub fn is_user_error(self) -> bool {
        matches!(self, Self::BadRequest | Self::NotFound)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggregate => write!(f, "aggregate"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// An error caused by a bad request from the caller.
///
/// Displays exactly as the wrapped error.
#[derive(thiserror::Error, Debug)]
#[error("{err}")]
pub struct BadRequestError {
    #[source]
    err: BoxError,
}

impl BadRequestError {
    /// Wraps `err` without changing its message.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self { err: err.into() }
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.err.as_ref()
    }

    /// Unwraps the error, dropping the tag.
    pub fn into_inner(self) -> BoxError {
        self.err
    }
}

/// An error reporting that a resource was not found.
///
/// Displays exactly as the wrapped error.
#[derive(thiserror::Error, Debug)]
#[error("{err}")]
pub struct NotFoundError {
    #[source]
    err: BoxError,
}

impl NotFoundError {
    /// Wraps `err` without changing its message.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self { err: err.into() }
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.err.as_ref()
    }

    /// Unwraps the error, dropping the tag.
    pub fn into_inner(self) -> BoxError {
        self.err
    }
}

/// Classifies `err` by its concrete type.
///
/// Only the value itself is inspected; the `source()` chain is not walked.
pub fn kind_of(err: &(dyn StdError + 'static)) -> ErrorKind {
    if let Some(e) = err.downcast_ref::<Error>() {
        e.kind()
    } else if err.is::<ErrorList>() {
        ErrorKind::Aggregate
    } else if err.is::<BadRequestError>() {
        ErrorKind::BadRequest
    } else if err.is::<NotFoundError>() {
        ErrorKind::NotFound
    } else {
        ErrorKind::Plain
    }
}

/// Returns true if `err` is itself a bad request error.
pub fn is_bad_request(err: &(dyn StdError + 'static)) -> bool {
    kind_of(err) == ErrorKind::BadRequest
}

/// Returns true if `err` is itself a not found error.
pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    kind_of(err) == ErrorKind::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("no such project")]
    struct MissingProject;

    #[test]
    fn bad_request_is_transparent() {
        let err = BadRequestError::new("invalid name");
        assert_eq!(err.to_string(), "invalid name");
    }

    #[test]
    fn not_found_is_transparent() {
        let err = NotFoundError::new(MissingProject);
        assert_eq!(err.to_string(), "no such project");
    }

    #[test]
    fn source_is_the_wrapped_error() {
        let err = NotFoundError::new(MissingProject);
        let source = err.source().unwrap();
        assert!(source.is::<MissingProject>());
    }

    #[test]
    fn is_bad_request_exact_kind() {
        assert!(is_bad_request(&BadRequestError::new(MissingProject)));
        assert!(!is_bad_request(&MissingProject));
        assert!(!is_bad_request(&NotFoundError::new(MissingProject)));
    }

    #[test]
    fn is_not_found_exact_kind() {
        assert!(is_not_found(&NotFoundError::new(MissingProject)));
        assert!(!is_not_found(&MissingProject));
        assert!(!is_not_found(&BadRequestError::new(MissingProject)));
    }

    #[test]
    fn predicates_do_not_walk_the_chain() {
        let nested = NotFoundError::new(BadRequestError::new(MissingProject));
        assert!(!is_bad_request(&nested));
        assert!(is_not_found(&nested));
    }

    #[test]
    fn predicates_ignore_message_text() {
        let plain = std::io::Error::new(std::io::ErrorKind::Other, "not found");
        assert!(!is_not_found(&plain));
    }

    #[test]
    fn boxed_wrapper_is_detected() {
        let boxed: BoxError = Box::new(BadRequestError::new("bad"));
        assert!(is_bad_request(&*boxed));
    }

    #[test]
    fn kind_of_each_carrier() {
        assert_eq!(kind_of(&ErrorList::new()), ErrorKind::Aggregate);
        assert_eq!(kind_of(&BadRequestError::new("x")), ErrorKind::BadRequest);
        assert_eq!(kind_of(&NotFoundError::new("x")), ErrorKind::NotFound);
        assert_eq!(kind_of(&MissingProject), ErrorKind::Plain);
        assert_eq!(kind_of(&Error::not_found("x")), ErrorKind::NotFound);
    }

    #[test]
    fn user_error_kinds() {
        assert!(ErrorKind::BadRequest.is_user_error());
        assert!(ErrorKind::NotFound.is_user_error());
        assert!(!ErrorKind::Aggregate.is_user_error());
        assert!(!ErrorKind::Plain.is_user_error());
    }

    #[test]
    fn into_inner_returns_wrapped() {
        let err = BadRequestError::new(MissingProject).into_inner();
        assert!(err.is::<MissingProject>());
    }
}
