//! Logging of classified errors at the boundary.

use std::error::Error as StdError;

use crate::kind::{kind_of, ErrorKind};

/// Logs `err` at a level chosen by its classification and returns the kind.
///
/// Errors caused by the caller are logged at `debug` so they never show up
/// as server faults; aggregate and plain errors are logged at `error`.
pub fn log_error(err: &(dyn StdError + 'static)) -> ErrorKind {
    let kind = kind_of(err);
    if kind.is_user_error() {
        tracing::debug!(%kind, "request rejected: {}", err);
    } else {
        tracing::error!(%kind, "internal error: {}", err);
    }
    kind
}
