//! Request-path canonicalisation.
//!
//! Requests arrive with whatever path the client sent. Before routing, the
//! path is cleaned the way a conventional HTTP multiplexer does it: repeated
//! slashes collapse, `.` segments drop, `..` pops a segment (never above the
//! root) and a trailing slash survives. A request whose path changes under
//! cleaning is answered with a permanent redirect to the clean form.

use std::borrow::Cow;

use http::Uri;

use crate::error::HttpError;

/// A cleaned request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPath {
    /// Still percent-encoded, without the leading `/`.
    raw: String,
    /// Percent-decoded, without the leading `/`. This is the store key.
    decoded: String,
}

impl RequestPath {
    /// The decoded path, e.g. `my dir/a` for `/my%20dir/a`.
    pub fn as_str(&self) -> &str {
        &self.decoded
    }

    /// The encoded path, safe to put back into a `Location` header.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Outcome of canonicalising a request URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The path was already clean.
    Path(RequestPath),
    /// Redirect to this location (clean path plus original query).
    Redirect(String),
}

/// Clean and decode the path of `uri`.
pub fn resolve(uri: &Uri) -> Result<Resolved, HttpError> {
    let requested = uri.path();
    let cleaned = clean(requested);

    if cleaned != requested {
        let location = match uri.query() {
            Some(query) => format!("{}?{}", cleaned, query),
            None => cleaned,
        };
        return Ok(Resolved::Redirect(location));
    }

    let raw = requested.strip_prefix('/').unwrap_or(requested);
    let decoded = urlencoding::decode(raw).map_err(|_| HttpError::InvalidEncoding)?;

    Ok(Resolved::Path(RequestPath {
        raw: raw.to_string(),
        decoded: decoded.into_owned(),
    }))
}

/// Canonicalise `path` into a rooted, slash-normalised form.
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    cleaned.push('/');
    cleaned.push_str(&segments.join("/"));
    if path.ends_with('/') && !segments.is_empty() {
        cleaned.push('/');
    }
    cleaned
}

/// Percent-encode a single path segment for use in a link.
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}
