//! Content-type resolution for uploads.

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::HeaderMap;
use memkv_core_store::ContentType;

/// User agents starting with this are treated as curl.
pub const CURL_USER_AGENT_PREFIX: &str = "curl/";

/// Pick the content type to store an upload under.
///
/// The declared `Content-Type` is used as is, except:
///
/// - a missing or empty header stores `text/plain`;
/// - `curl -d` always declares form encoding, so a curl upload declaring
///   exactly `application/x-www-form-urlencoded` is stored as `text/plain`.
///
/// No other inspection of the header or the body happens.
pub fn resolve(headers: &HeaderMap) -> ContentType {
    let declared = headers
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()));
    let user_agent = header_str(headers, USER_AGENT);

    match declared.as_deref() {
        None | Some("") => ContentType::TEXT_PLAIN,
        Some(declared) if is_curl_form_default(declared, user_agent) => ContentType::TEXT_PLAIN,
        Some(declared) => ContentType::new(declared),
    }
}

fn is_curl_form_default(declared: &str, user_agent: Option<&str>) -> bool {
    declared == ContentType::FORM_URLENCODED.as_str()
        && user_agent.is_some_and(|ua| ua.starts_with(CURL_USER_AGENT_PREFIX))
}

/// A user agent that is not visible ASCII counts as absent.
fn header_str(headers: &HeaderMap, name: http::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(content_type: Option<&'static str>, user_agent: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        if let Some(ua) = user_agent {
            headers.insert(USER_AGENT, HeaderValue::from_static(ua));
        }
        headers
    }

    #[test]
    fn declared_type_is_kept() {
        let h = headers(Some("application/json"), Some("curl/8.5.0"));
        assert_eq!(resolve(&h), ContentType::JSON);
    }

    #[test]
    fn missing_type_is_text_plain() {
        assert_eq!(resolve(&headers(None, None)), ContentType::TEXT_PLAIN);
    }

    #[test]
    fn empty_type_is_text_plain() {
        assert_eq!(resolve(&headers(Some(""), None)), ContentType::TEXT_PLAIN);
    }

    #[test]
    fn curl_form_default_is_text_plain() {
        let h = headers(
            Some("application/x-www-form-urlencoded"),
            Some("curl/7.88.1"),
        );
        assert_eq!(resolve(&h), ContentType::TEXT_PLAIN);
    }

    #[test]
    fn form_type_from_other_clients_is_kept() {
        let h = headers(
            Some("application/x-www-form-urlencoded"),
            Some("Mozilla/5.0"),
        );
        assert_eq!(resolve(&h), ContentType::FORM_URLENCODED);

        let h = headers(Some("application/x-www-form-urlencoded"), None);
        assert_eq!(resolve(&h), ContentType::FORM_URLENCODED);
    }

    #[test]
    fn curl_rule_needs_exact_form_type() {
        let h = headers(
            Some("application/x-www-form-urlencoded; charset=utf-8"),
            Some("curl/8.0"),
        );
        assert_eq!(
            resolve(&h).as_str(),
            "application/x-www-form-urlencoded; charset=utf-8"
        );
    }

    #[test]
    fn non_ascii_type_is_kept() {
        let mut h = HeaderMap::new();
        h.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes(b"text/x-note; title=caf\xe9").unwrap(),
        );
        let resolved = resolve(&h);
        assert_ne!(resolved, ContentType::TEXT_PLAIN);
        assert!(resolved.as_str().starts_with("text/x-note; title=caf"));
    }

    #[test]
    fn curl_rule_needs_curl_prefix() {
        let h = headers(
            Some("application/x-www-form-urlencoded"),
            Some("libcurl-agent/1.0"),
        );
        assert_eq!(resolve(&h), ContentType::FORM_URLENCODED);
    }
}
