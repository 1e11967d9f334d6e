//! Core traits: Reader, Writer, Namespace.
//!
//! All methods take `&self`. Implementations are shared across concurrent
//! request handlers and do their own locking.

use std::sync::Arc;

use crate::namespace::{Classification, Entry};
use crate::{Error, Key, Prefix, Record};

/// Exact-match reads.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn Reader>`.
pub trait Reader: Send + Sync {
    /// Read the record stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No value is stored at exactly this key.
    /// * `Ok(Some(record))` - The stored record.
    /// * `Err(Error)` - The store is unusable.
    ///
    /// Never falls back to directory semantics.
    fn read(&self, key: &Key) -> Result<Option<Record>, Error>;
}

/// Whole-value writes.
pub trait Writer: Send + Sync {
    /// Store `record` at `key`, replacing any previous value.
    fn write(&self, key: &Key, record: Record) -> Result<(), Error>;
}

/// The derived directory view.
pub trait Namespace: Send + Sync {
    /// Classify a slash-free path as a file, a directory or missing.
    fn classify(&self, path: &str) -> Result<Classification, Error>;

    /// List the immediate children of `prefix`, directories first.
    fn list(&self, prefix: &Prefix) -> Result<Vec<Entry>, Error>;
}

/// Everything the HTTP layer needs from a store.
pub trait Store: Reader + Writer + Namespace {}
impl<T: Reader + Writer + Namespace> Store for T {}

// Blanket implementations for shared pointers

impl<T: Reader + ?Sized> Reader for Arc<T> {
    fn read(&self, key: &Key) -> Result<Option<Record>, Error> {
        self.as_ref().read(key)
    }
}

impl<T: Writer + ?Sized> Writer for Arc<T> {
    fn write(&self, key: &Key, record: Record) -> Result<(), Error> {
        self.as_ref().write(key, record)
    }
}

impl<T: Namespace + ?Sized> Namespace for Arc<T> {
    fn classify(&self, path: &str) -> Result<Classification, Error> {
        self.as_ref().classify(path)
    }

    fn list(&self, prefix: &Prefix) -> Result<Vec<Entry>, Error> {
        self.as_ref().list(prefix)
    }
}
