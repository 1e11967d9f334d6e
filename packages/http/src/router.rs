//! Request dispatch.
//!
//! Every path is served by a single fallback handler: the key space is
//! open-ended, so there is nothing for a route table to match on.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use http::{HeaderMap, Method, StatusCode};
use http_body_util::LengthLimitError;
use memkv_core_store::{Classification, Key, Prefix, Record, Store};

use crate::config::ServerConfig;
use crate::content_type;
use crate::error::HttpError;
use crate::render;
use crate::request_path::{self, RequestPath, Resolved};

/// Reserved path serving the usage guide. Cannot be written to.
pub const HELP_PATH: &str = "help";

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn Store>,
    max_upload_bytes: usize,
    max_upload_mib: u64,
}

impl AppState {
    fn new(store: Arc<dyn Store>, config: &ServerConfig) -> Self {
        Self {
            store,
            max_upload_bytes: config.max_upload_bytes(),
            max_upload_mib: config.max_upload_mib,
        }
    }
}

/// Build the application router over `store`.
pub fn router(store: Arc<dyn Store>, config: &ServerConfig) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(AppState::new(store, config))
}

async fn dispatch(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();
    match connect_info {
        Some(ConnectInfo(remote)) => {
            tracing::info!(method = %parts.method, path = %parts.uri.path(), %remote, "request")
        }
        None => tracing::info!(method = %parts.method, path = %parts.uri.path(), "request"),
    }

    let path = match request_path::resolve(&parts.uri) {
        Ok(Resolved::Path(path)) => path,
        Ok(Resolved::Redirect(location)) => return moved_permanently(location),
        Err(e) => return e.into_response(),
    };

    let result = match parts.method {
        Method::GET => get(&state, &path),
        Method::POST => post(&state, &path, &parts.headers, body).await,
        _ => Err(HttpError::MethodNotAllowed),
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

fn get(state: &AppState, path: &RequestPath) -> Result<Response, HttpError> {
    let p = path.as_str();

    if p == HELP_PATH {
        return Ok(Html(render::help(state.max_upload_mib)?).into_response());
    }

    if p.is_empty() || p.ends_with('/') {
        let prefix = Prefix::parse(p).map_err(|_| HttpError::NotFound)?;
        let entries = state.store.list(&prefix)?;
        return Ok(Html(render::listing(&prefix, &entries)?).into_response());
    }

    let key = Key::parse(p).map_err(|_| HttpError::NotFound)?;
    if let Some(record) = state.store.read(&key)? {
        return Ok(value_response(record));
    }

    match state.store.classify(key.as_str())? {
        Classification::Directory => Ok(moved_permanently(format!("/{}/", path.raw()))),
        // File here means the key was written after the read above missed.
        Classification::File | Classification::Missing => Err(HttpError::NotFound),
    }
}

async fn post(
    state: &AppState,
    path: &RequestPath,
    headers: &HeaderMap,
    body: Body,
) -> Result<Response, HttpError> {
    let key = writable_key(path.as_str())?;

    let limit = state.max_upload_bytes;
    if declared_length(headers).is_some_and(|len| len > limit as u64) {
        return Err(HttpError::PayloadTooLarge { limit });
    }
    let bytes = read_body(body, limit).await?;

    let content_type = content_type::resolve(headers);
    let size = bytes.len();
    state.store.write(&key, Record::new(bytes, content_type))?;

    Ok((
        StatusCode::CREATED,
        [(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
        format!("Stored {} bytes at {}\n", size, key),
    )
        .into_response())
}

/// Validate a POST target. Empty paths, directory paths and the help page
/// are not writable.
fn writable_key(path: &str) -> Result<Key, HttpError> {
    if path.is_empty() || path.ends_with('/') || path == HELP_PATH {
        return Err(HttpError::InvalidPostPath);
    }
    Key::parse(path).map_err(|_| HttpError::InvalidPostPath)
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Read the whole body, stopping at `limit` bytes.
async fn read_body(body: Body, limit: usize) -> Result<Bytes, HttpError> {
    match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => Ok(bytes),
        Err(err) if exceeds_limit(&err) => Err(HttpError::PayloadTooLarge { limit }),
        Err(err) => Err(HttpError::BodyRead(err)),
    }
}

fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

fn value_response(record: Record) -> Response {
    let (bytes, content_type) = record.into_parts();
    let content_type = HeaderValue::from_str(content_type.as_str())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    ([(CONTENT_TYPE, content_type)], bytes).into_response()
}

fn moved_permanently(location: String) -> Response {
    let body = format!(
        "<a href=\"{}\">Moved Permanently</a>.\n",
        render::escape_html(&location)
    );
    match HeaderValue::try_from(location) {
        Ok(location) => (
            StatusCode::MOVED_PERMANENTLY,
            [
                (LOCATION, location),
                (CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8")),
            ],
            body,
        )
            .into_response(),
        Err(_) => HttpError::NotFound.into_response(),
    }
}
