//! Header-modifying transport.
//!
//! # Responsibilities
//! - Decide whether any header modification is configured
//! - Forward untouched requests as-is
//! - Otherwise copy the request, merge `set` and `add`, and forward the copy
//!
//! # Design Decisions
//! - The caller's request is never mutated
//! - Configuration is fixed at construction and read-only afterwards
//! - Responses and errors from the base sender pass through unchanged
//! - No retries, timeouts or pooling here; those belong to the base

use std::sync::Arc;

use tower::Layer;

use crate::config::HeaderModConfig;
use crate::headers::{merge_headers, HeaderSet};
use crate::http::client::DefaultSender;
use crate::http::clone::clone_request;
use crate::http::sender::{SendFuture, Sender, SharedRequest};

/// Settings for a [`Transport`].
///
/// A missing `base` falls back to `S::default()`.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig<S = DefaultSender> {
    /// Sender used after the headers are modified.
    pub base: Option<S>,
    /// Headers overwritten before sending.
    pub set: HeaderSet,
    /// Headers appended before sending, after `set` is applied.
    pub add: HeaderSet,
}

/// Sender that rewrites outbound request headers before handing the request
/// to its base sender.
///
/// Values in `set` replace existing values for their header; values in
/// `add` are appended afterwards. When both are empty the request is
/// forwarded untouched. Otherwise a copy is modified and sent, so the
/// caller's request keeps its original headers.
#[derive(Debug, Clone)]
pub struct Transport<S = DefaultSender> {
    base: S,
    set: HeaderSet,
    add: HeaderSet,
}

impl Transport<DefaultSender> {
    /// Create a transport over a [`DefaultSender`].
    pub fn new(set: HeaderSet, add: HeaderSet) -> Self {
        Self::with_base(DefaultSender::new(), set, add)
    }
}

impl<S> Transport<S> {
    /// Create a transport over `base`.
    pub fn with_base(base: S, set: HeaderSet, add: HeaderSet) -> Self {
        Self { base, set, add }
    }

    /// Create a transport from a [`TransportConfig`].
    pub fn from_config(config: TransportConfig<S>) -> Self
    where
        S: Default,
    {
        let base = config.base.unwrap_or_default();
        Self::with_base(base, config.set, config.add)
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn set(&self) -> &HeaderSet {
        &self.set
    }

    pub fn add(&self) -> &HeaderSet {
        &self.add
    }

    /// True when nothing is configured and requests go through unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.set.is_empty() && self.add.is_empty()
    }
}

impl<S: Default> From<TransportConfig<S>> for Transport<S> {
    fn from(config: TransportConfig<S>) -> Self {
        Self::from_config(config)
    }
}

impl From<&HeaderModConfig> for Transport<DefaultSender> {
    fn from(config: &HeaderModConfig) -> Self {
        Self::with_base(
            DefaultSender::from_config(&config.client),
            config.headers.set.clone(),
            config.headers.add.clone(),
        )
    }
}

impl<S, B> Sender<B> for Transport<S>
where
    S: Sender<B>,
    B: Clone,
{
    type Response = S::Response;
    type Error = S::Error;

    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error> {
        if self.is_passthrough() {
            tracing::trace!(
                method = %request.method(),
                uri = %request.uri(),
                "No header modification configured, forwarding request"
            );
            return self.base.send(request);
        }

        let mut modified = clone_request(&request);
        merge_headers(modified.headers_mut(), &self.set, &self.add);

        tracing::debug!(
            method = %modified.method(),
            uri = %modified.uri(),
            set_headers = self.set.len(),
            add_headers = self.add.len(),
            "Forwarding request with modified headers"
        );

        self.base.send(Arc::new(modified))
    }
}

/// [`Layer`] that wraps a base sender in a [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct TransportLayer {
    set: HeaderSet,
    add: HeaderSet,
}

impl TransportLayer {
    pub fn new(set: HeaderSet, add: HeaderSet) -> Self {
        Self { set, add }
    }
}

impl<S> Layer<S> for TransportLayer {
    type Service = Transport<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Transport::with_base(inner, self.set.clone(), self.add.clone())
    }
}
