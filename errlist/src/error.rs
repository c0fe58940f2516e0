//! The classified error type.

use crate::kind::{BadRequestError, ErrorKind, NotFoundError};
use crate::list::ErrorList;

/// Owned, thread-safe, type-erased error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error tagged with its classification.
///
/// Display and `source()` are those of the carried error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Aggregate(#[from] ErrorList),
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Plain(BoxError),
}

impl Error {
    /// Tags `err` as caused by invalid caller input.
    pub fn bad_request(err: impl Into<BoxError>) -> Self {
        Self::BadRequest(BadRequestError::new(err))
    }

    /// Tags `err` as a missing resource.
    pub fn not_found(err: impl Into<BoxError>) -> Self {
        Self::NotFound(NotFoundError::new(err))
    }

    /// Carries `err` unclassified.
    pub fn plain(err: impl Into<BoxError>) -> Self {
        Self::Plain(err.into())
    }

    /// Classification of the carried error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Aggregate(_) => ErrorKind::Aggregate,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Plain(_) => ErrorKind::Plain,
        }
    }

    /// Returns the aggregated list, if this is an aggregate error.
    pub fn as_list(&self) -> Option<&ErrorList> {
        match self {
            Self::Aggregate(list) => Some(list),
            _ => None,
        }
    }
}
