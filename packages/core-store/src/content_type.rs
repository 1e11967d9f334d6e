//! Content-type labels attached to stored values.

use std::borrow::Cow;
use std::fmt;

/// The media type a value was uploaded with.
///
/// The store treats this as an opaque label: it is kept verbatim and handed
/// back on reads, never parsed or validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentType(pub Cow<'static, str>);

impl ContentType {
    /// Plain text (`text/plain`)
    pub const TEXT_PLAIN: ContentType = ContentType(Cow::Borrowed("text/plain"));

    /// HTML form data (`application/x-www-form-urlencoded`)
    pub const FORM_URLENCODED: ContentType =
        ContentType(Cow::Borrowed("application/x-www-form-urlencoded"));

    /// JSON (`application/json`)
    pub const JSON: ContentType = ContentType(Cow::Borrowed("application/json"));

    /// Opaque binary data (`application/octet-stream`)
    pub const OCTET_STREAM: ContentType = ContentType(Cow::Borrowed("application/octet-stream"));

    /// Create a content type from an owned string.
    pub fn new(s: impl Into<String>) -> Self {
        ContentType(Cow::Owned(s.into()))
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::TEXT_PLAIN
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ContentType {
    fn from(s: &'static str) -> Self {
        ContentType(Cow::Borrowed(s))
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        ContentType(Cow::Owned(s))
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
