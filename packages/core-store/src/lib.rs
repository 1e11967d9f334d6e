//! memkv store layer: a flat key space with a derived directory view.
//!
//! - `Key`: validated slash-delimited key
//! - `Prefix`: listing prefix (root or a path ending in `/`)
//! - `Record`: stored bytes plus their `ContentType`
//! - `MemoryStore`: the shared `Key -> Record` map
//! - `namespace`: classification and child listings derived from the key set
//!
//! There is no tree. A "directory" is any prefix that some key continues
//! past with a `/`, and it disappears from view as soon as no key does.
//!
//! # Example
//!
//! ```rust
//! use memkv_core_store::{key, ContentType, MemoryStore, Namespace, Prefix, Record, Writer};
//!
//! let store = MemoryStore::new();
//! store.write(&key!("x"), Record::new("1", ContentType::TEXT_PLAIN)).unwrap();
//! store.write(&key!("y/z"), Record::new("2", ContentType::TEXT_PLAIN)).unwrap();
//! store.write(&key!("w"), Record::new("3", ContentType::TEXT_PLAIN)).unwrap();
//!
//! let names: Vec<String> = store
//!     .list(&Prefix::root())
//!     .unwrap()
//!     .into_iter()
//!     .map(|entry| entry.name)
//!     .collect();
//! assert_eq!(names, ["y", "w", "x"]);
//! ```

pub use bytes::Bytes;

mod content_type;
mod error;
pub mod namespace;
mod path;
mod record;
mod store;
mod traits;

pub use content_type::ContentType;
pub use error::Error;
pub use namespace::{Classification, Entry, EntryKind};
pub use path::{Key, PathError, Prefix};
pub use record::Record;
pub use store::MemoryStore;
pub use traits::{Namespace, Reader, Store, Writer};
