//! The Record type - stored bytes with their content type.

use bytes::Bytes;

use crate::ContentType;

/// A stored value.
///
/// Records are immutable: an overwrite replaces the whole record. Cloning is
/// cheap because the payload is reference-counted [`Bytes`], so readers can
/// take a copy out of the store without holding its lock.
///
/// ```rust
/// use memkv_core_store::{ContentType, Record};
///
/// let record = Record::new("hello", ContentType::TEXT_PLAIN);
/// assert_eq!(record.len(), 5);
/// assert_eq!(record.content_type().as_str(), "text/plain");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    bytes: Bytes,
    content_type: ContentType,
}

impl Record {
    /// Create a record from a payload and its content type.
    pub fn new(bytes: impl Into<Bytes>, content_type: ContentType) -> Self {
        Record {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// The payload.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// The content type the payload was stored with.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Split into payload and content type.
    pub fn into_parts(self) -> (Bytes, ContentType) {
        (self.bytes, self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let record = Record::new(Bytes::from_static(b"{}"), ContentType::JSON);
        assert_eq!(record.bytes().as_ref(), b"{}");
        assert_eq!(record.content_type(), &ContentType::JSON);
        assert!(!record.is_empty());
    }

    #[test]
    fn empty_payload() {
        let record = Record::new(Vec::new(), ContentType::OCTET_STREAM);
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn into_parts() {
        let (bytes, content_type) = Record::new("abc", ContentType::TEXT_PLAIN).into_parts();
        assert_eq!(bytes, Bytes::from_static(b"abc"));
        assert_eq!(content_type, ContentType::TEXT_PLAIN);
    }

    #[test]
    fn clones_share_payload() {
        let record = Record::new(vec![1u8; 1024], ContentType::OCTET_STREAM);
        let copy = record.clone();
        assert_eq!(record.bytes().as_ptr(), copy.bytes().as_ptr());
    }
}
