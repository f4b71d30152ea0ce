//! Request copying.
//!
//! # Responsibilities
//! - Copy a request so its header collection can be changed independently
//! - Hand senders an owned request, copying only when the handle is shared
//!
//! # Design Decisions
//! - Method, URI, version, extensions and body are carried over as-is
//! - The body is cloned as a handle; `Bytes`-backed bodies share one buffer
//! - Only the headers are duplicated

use std::sync::Arc;

use http::Request;

/// Copy `original` into a distinct request with its own headers.
///
/// Mutating the copy's headers is never visible through `original`, and
/// the other way around.
pub fn clone_request<B: Clone>(original: &Request<B>) -> Request<B> {
    let mut clone = Request::new(original.body().clone());
    *clone.method_mut() = original.method().clone();
    *clone.uri_mut() = original.uri().clone();
    *clone.version_mut() = original.version();
    *clone.headers_mut() = original.headers().clone();
    *clone.extensions_mut() = original.extensions().clone();
    clone
}

/// Turn a shared request into an owned one.
///
/// Unwraps without copying when `request` is the only handle; otherwise
/// the caller still holds it and we work from a copy.
pub fn take_request<B: Clone>(request: Arc<Request<B>>) -> Request<B> {
    Arc::try_unwrap(request).unwrap_or_else(|shared| clone_request(&shared))
}
