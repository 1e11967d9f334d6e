//! Validated keys and listing prefixes.

use std::borrow::Borrow;
use std::fmt;

/// Errors related to key and prefix validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Keys must contain at least one character.
    #[error("key must not be empty")]
    Empty,

    /// Keys and prefixes are relative to the namespace root.
    #[error("'{path}' must not start with '/'")]
    LeadingSlash { path: String },

    /// A trailing slash names a directory, not a key.
    #[error("key '{path}' must not end with '/'")]
    TrailingSlash { path: String },

    /// A non-root prefix must end with a slash.
    #[error("prefix '{path}' must end with '/'")]
    MissingTrailingSlash { path: String },

    /// Two consecutive slashes.
    #[error("empty segment at position {position} in '{path}'")]
    EmptySegment { path: String, position: usize },

    /// `.` and `..` are navigation, not names.
    #[error("dot segment at position {position} in '{path}'")]
    DotSegment { path: String, position: usize },
}

/// Check that every `/`-separated segment of `s` is a real name.
fn validate_segments(s: &str) -> Result<(), PathError> {
    for (position, segment) in s.split('/').enumerate() {
        match segment {
            "" => {
                return Err(PathError::EmptySegment {
                    path: s.to_string(),
                    position,
                })
            }
            "." | ".." => {
                return Err(PathError::DotSegment {
                    path: s.to_string(),
                    position,
                })
            }
            _ => {}
        }
    }
    Ok(())
}

/// A stored key: a non-empty, slash-delimited path with no leading or
/// trailing slash.
///
/// Keys are flat. `a` and `a/b` are unrelated map entries; the directory
/// view is derived from them by [`crate::namespace`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Parse and validate a key.
    ///
    /// ```rust
    /// use memkv_core_store::Key;
    ///
    /// let key = Key::parse("docs/readme.txt").unwrap();
    /// assert_eq!(key.name(), "readme.txt");
    ///
    /// assert!(Key::parse("").is_err());
    /// assert!(Key::parse("docs/").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        if s.starts_with('/') {
            return Err(PathError::LeadingSlash {
                path: s.to_string(),
            });
        }
        if s.ends_with('/') {
            return Err(PathError::TrailingSlash {
                path: s.to_string(),
            });
        }
        validate_segments(s)?;
        Ok(Key(s.to_string()))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The last segment.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// The prefix under which keys nested beneath this one live (`key + "/"`).
    pub fn as_prefix(&self) -> Prefix {
        Prefix(format!("{}/", self.0))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Key {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Key::parse(s)
    }
}

/// A listing prefix: the empty root prefix, or a path ending in `/`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    /// The namespace root.
    pub fn root() -> Self {
        Prefix(String::new())
    }

    /// Parse and validate a prefix.
    ///
    /// ```rust
    /// use memkv_core_store::Prefix;
    ///
    /// assert!(Prefix::parse("").unwrap().is_root());
    /// assert_eq!(Prefix::parse("a/b/").unwrap().as_str(), "a/b/");
    /// assert!(Prefix::parse("a/b").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        if s.starts_with('/') {
            return Err(PathError::LeadingSlash {
                path: s.to_string(),
            });
        }
        let Some(dir) = s.strip_suffix('/') else {
            return Err(PathError::MissingTrailingSlash {
                path: s.to_string(),
            });
        };
        validate_segments(dir)?;
        Ok(Prefix(s.to_string()))
    }

    /// Whether this is the namespace root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The prefix as a string slice (empty for the root).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Macro for key literals.
///
/// # Example
///
/// ```rust
/// use memkv_core_store::key;
///
/// let k = key!("users/alice");
/// assert_eq!(k.segments().count(), 2);
/// ```
#[macro_export]
macro_rules! key {
    ($s:expr) => {
        $crate::Key::parse($s).expect("invalid key literal")
    };
}
