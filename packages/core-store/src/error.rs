//! Error types for the store layer.

use crate::path::PathError;

/// Errors raised by store operations.
///
/// A missing key is not an error: reads report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path validation error.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}
