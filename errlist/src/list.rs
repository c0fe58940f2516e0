//! An error that collects many errors and reports them as one.

use std::error::Error as StdError;
use std::fmt;

use crate::compare::compare_unordered;
use crate::error::{BoxError, Error};

/// Errors accumulated in insertion order.
///
/// Appending requires `&mut self`; a list shared between workers must be
/// guarded by the caller (e.g. a `Mutex`) or owned by a single collector.
#[derive(Debug, Default)]
pub struct ErrorList {
    errs: Vec<BoxError>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one error was appended.
    pub fn is_err(&self) -> bool {
        !self.errs.is_empty()
    }

    /// Returns true if nothing was appended.
    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    /// Number of errors appended so far.
    pub fn len(&self) -> usize {
        self.errs.len()
    }

    /// Appends `err`. Duplicates are kept.
    pub fn append(&mut self, err: impl Into<BoxError>) {
        let err = err.into();
        tracing::trace!(error = %err, count = self.errs.len() + 1, "appended error");
        self.errs.push(err);
    }

    /// Iterates over the contained errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn StdError + Send + Sync + 'static)> {
        self.errs.iter().map(|e| &**e)
    }

    /// Messages of the contained errors, in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.errs.iter().map(|e| e.to_string()).collect()
    }

    /// Compares messages with `other`, ignoring order but not multiplicity.
    ///
    /// When `other` is an `ErrorList` (or an aggregate [`Error`]) its
    /// contained messages are compared; any other error counts as a single
    /// message. Only the text is compared, so two different errors with the
    /// same message are equal.
    pub fn equal(&self, other: &(dyn StdError + 'static)) -> bool {
        let theirs = match other_list(other) {
            Some(list) => list.messages(),
            None => vec![other.to_string()],
        };
        compare_unordered(&self.messages(), &theirs)
    }

    /// `Ok(())` when empty, otherwise the list itself as the error.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.is_err() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

fn other_list<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ErrorList> {
    if let Some(list) = err.downcast_ref::<ErrorList>() {
        return Some(list);
    }
    err.downcast_ref::<Error>().and_then(Error::as_list)
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl StdError for ErrorList {}

impl<E: Into<BoxError>> Extend<E> for ErrorList {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.append(err);
        }
    }
}

impl<E: Into<BoxError>> FromIterator<E> for ErrorList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for ErrorList {
    type Item = BoxError;
    type IntoIter = std::vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a BoxError;
    type IntoIter = std::slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errs.iter()
    }
}
