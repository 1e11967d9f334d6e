use axum::response::{IntoResponse, Response};
use http::header::{HeaderValue, ALLOW, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::StatusCode;

/// Everything a request can fail with.
///
/// Each variant maps to exactly one status code. The `Display` text is the
/// plain-text response body.
#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("Invalid path for POST")]
    InvalidPostPath,

    #[error("Invalid request path encoding")]
    InvalidEncoding,

    #[error("Request body too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("Error reading request body")]
    BodyRead(#[source] axum::Error),

    #[error("404 page not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error")]
    Store(#[from] memkv_core_store::Error),

    #[error("Internal server error")]
    Render(#[from] std::fmt::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::InvalidPostPath | HttpError::InvalidEncoding | HttpError::BodyRead(_) => {
                StatusCode::BAD_REQUEST
            }
            HttpError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            HttpError::NotFound => StatusCode::NOT_FOUND,
            HttpError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HttpError::Store(_) | HttpError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else if status != StatusCode::NOT_FOUND {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let mut response = (status, format!("{}\n", self)).into_response();
        let headers = response.headers_mut();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        if matches!(self, HttpError::MethodNotAllowed) {
            headers.insert(ALLOW, HeaderValue::from_static("GET, POST"));
        }
        response
    }
}
