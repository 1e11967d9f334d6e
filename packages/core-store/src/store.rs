//! The in-memory store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::namespace::{self, Classification, Entry};
use crate::{Error, Key, Namespace, Prefix, Reader, Record, Writer};

/// A flat `Key -> Record` map behind a single reader-writer lock.
///
/// Writes take the lock exclusively. Lookups, classification and listings
/// share it, and a scan holds the read guard from its first key to its last,
/// so it never sees a write land halfway through.
///
/// # Example
///
/// ```rust
/// use memkv_core_store::{key, ContentType, MemoryStore, Namespace, Prefix, Reader, Record, Writer};
/// use memkv_core_store::namespace::{Classification, Entry};
///
/// let store = MemoryStore::new();
/// store.write(&key!("docs/readme"), Record::new("hi", ContentType::TEXT_PLAIN)).unwrap();
///
/// assert!(store.read(&key!("docs/readme")).unwrap().is_some());
/// assert_eq!(store.classify("docs").unwrap(), Classification::Directory);
/// assert_eq!(store.list(&Prefix::root()).unwrap(), vec![Entry::directory("docs")]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<Key, Record>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.shared()?.len())
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.shared()?.is_empty())
    }

    fn shared(&self) -> Result<RwLockReadGuard<'_, HashMap<Key, Record>>, Error> {
        self.entries.read().map_err(|_| Error::Poisoned)
    }

    fn exclusive(&self) -> Result<RwLockWriteGuard<'_, HashMap<Key, Record>>, Error> {
        self.entries.write().map_err(|_| Error::Poisoned)
    }
}

impl Reader for MemoryStore {
    fn read(&self, key: &Key) -> Result<Option<Record>, Error> {
        Ok(self.shared()?.get(key).cloned())
    }
}

impl Writer for MemoryStore {
    fn write(&self, key: &Key, record: Record) -> Result<(), Error> {
        let size = record.len();
        let previous = self.exclusive()?.insert(key.clone(), record);
        tracing::debug!(
            key = %key,
            size,
            replaced = previous.is_some(),
            "stored value"
        );
        Ok(())
    }
}

impl Namespace for MemoryStore {
    fn classify(&self, path: &str) -> Result<Classification, Error> {
        let entries = self.shared()?;
        if entries.contains_key(path) {
            return Ok(Classification::File);
        }
        Ok(namespace::classify(entries.keys().map(Key::as_str), path))
    }

    fn list(&self, prefix: &Prefix) -> Result<Vec<Entry>, Error> {
        let entries = self.shared()?;
        Ok(namespace::list_children(entries.keys().map(Key::as_str), prefix))
    }
}
