//! Directory view derived from a flat key set.
//!
//! Nothing here is stored. Directories exist only while some key sits below
//! them, and both [`classify`] and [`list_children`] recompute the view from
//! whatever key iterator they are given. Callers are expected to pass a
//! consistent snapshot (the store holds its read guard across the scan).

use std::collections::BTreeMap;

use crate::Prefix;

/// Result of resolving a slash-free request path against the key set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Neither a key nor a prefix of any key.
    Missing,
    /// An exact key match. Takes precedence over `Directory`.
    File,
    /// No exact key, but at least one key starts with `path + "/"`.
    Directory,
}

/// What a listing entry refers to.
///
/// The variant order is the listing order: directories sort first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One immediate child beneath a listed prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Classify `path` against `keys`.
///
/// An exact match returns `File` straight away; otherwise the whole key set
/// is checked for a key nested under `path + "/"`.
pub fn classify<'a, I>(keys: I, path: &str) -> Classification
where
    I: IntoIterator<Item = &'a str>,
{
    if path.is_empty() {
        return Classification::Missing;
    }

    let mut is_dir = false;
    for key in keys {
        if key == path {
            return Classification::File;
        }
        if !is_dir && is_nested_under(key, path) {
            is_dir = true;
        }
    }

    if is_dir {
        Classification::Directory
    } else {
        Classification::Missing
    }
}

/// `key` starts with `dir + "/"`.
fn is_nested_under(key: &str, dir: &str) -> bool {
    key.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}

/// List the immediate children of `prefix`.
///
/// Each key under the prefix contributes the first segment of its remainder.
/// A remainder with no further `/` makes that segment a file; one with a
/// further `/` makes it a directory. A name can be both and then appears
/// twice. A key equal to the prefix itself contributes nothing.
///
/// Entries come back directories first, then files, each group sorted by
/// name.
///
/// ```rust
/// use memkv_core_store::namespace::{list_children, Entry};
/// use memkv_core_store::Prefix;
///
/// let keys = ["x", "y/z", "w"];
/// let entries = list_children(keys, &Prefix::root());
/// assert_eq!(
///     entries,
///     vec![Entry::directory("y"), Entry::file("w"), Entry::file("x")]
/// );
/// ```
pub fn list_children<'a, I>(keys: I, prefix: &Prefix) -> Vec<Entry>
where
    I: IntoIterator<Item = &'a str>,
{
    // name -> (is_file, is_dir)
    let mut seen: BTreeMap<&'a str, (bool, bool)> = BTreeMap::new();

    for key in keys {
        let Some(rest) = key.strip_prefix(prefix.as_str()) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let (name, nested) = match rest.split_once('/') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        if name.is_empty() {
            continue;
        }

        let state = seen.entry(name).or_default();
        if nested {
            state.1 = true;
        } else {
            state.0 = true;
        }
    }

    let mut entries = Vec::with_capacity(seen.len());
    for (name, (is_file, is_dir)) in seen {
        if is_dir {
            entries.push(Entry::directory(name));
        }
        if is_file {
            entries.push(Entry::file(name));
        }
    }

    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    entries
}
