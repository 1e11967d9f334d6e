//! # memkv-http
//!
//! HTTP front end for the memkv store.
//!
//! Keys are URL paths and values are raw request bodies:
//!
//! | Request          | Result                                                  |
//! |------------------|---------------------------------------------------------|
//! | `POST /a/b`      | store the body at `a/b` (201), 400 or 413 on rejection   |
//! | `GET /a/b`       | the stored bytes with their content type                |
//! | `GET /a`         | 301 to `/a/` when `a` is only a directory, else 404     |
//! | `GET /a/`, `GET /` | HTML listing, directories first                      |
//! | `GET /help`      | usage guide                                             |
//! | anything else    | 405                                                     |
//!
//! ```ignore
//! use std::sync::Arc;
//! use memkv_core_store::MemoryStore;
//! use memkv_http::{serve, ServerConfig};
//!
//! serve(ServerConfig::default(), Arc::new(MemoryStore::new())).await?;
//! ```

pub mod config;
pub mod content_type;
pub mod error;
pub mod render;
pub mod request_path;
pub mod router;
pub mod serve;

pub use config::{ServerConfig, DEFAULT_LISTEN, DEFAULT_MAX_UPLOAD_MIB};
pub use error::HttpError;
pub use router::{router, HELP_PATH};
pub use serve::{serve, serve_listener, ServeError};
