//! Outbound HTTP header modification.
//!
//! A [`Transport`] wraps any [`Sender`] and, before each request goes out,
//! overwrites the headers in its `set` collection and appends the headers in
//! its `add` collection. Requests pass through untouched when nothing is
//! configured; otherwise a copy is modified so the caller's request never is.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bytes::Bytes;
//! use header_modification::{HeaderSet, Sender, Transport};
//! use http_body_util::Full;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut set = HeaderSet::new();
//! set.try_append("User-Agent", "my-agent/1.0")?;
//! let mut add = HeaderSet::new();
//! add.try_append("X-Custom-1", "custom")?;
//!
//! let transport = Transport::new(set, add);
//! let request = http::Request::get("http://127.0.0.1:8080/headers")
//!     .body(Full::new(Bytes::new()))?;
//! let response = transport.send(Arc::new(request)).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod headers;
pub mod http;
pub mod observability;

pub use config::HeaderModConfig;
pub use headers::{merge_headers, modify_headers, HeaderSet};
pub use self::http::{DefaultSender, Sender, Transport, TransportConfig, TransportLayer};
