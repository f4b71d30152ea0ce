//! Default outbound sender.
//!
//! # Responsibilities
//! - Own a pooled hyper-util client
//! - Apply connect and idle-pool settings from `ClientConfig`
//! - Serve as the delegate when no base sender is configured
//!
//! # Design Decisions
//! - Injected explicitly; there is no process-wide default to swap
//! - Plain HTTP connector; TLS comes from supplying another base sender

use std::time::Duration;

use bytes::Bytes;
use http::Response;
use http_body_util::Full;
use hyper::body::{Body, Incoming};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client, Error},
    rt::TokioExecutor,
};

use crate::config::ClientConfig;
use crate::http::clone::take_request;
use crate::http::sender::{SendFuture, Sender, SharedRequest};

/// Sender backed by a pooled hyper-util client.
#[derive(Debug, Clone)]
pub struct DefaultSender<B = Full<Bytes>> {
    client: Client<HttpConnector, B>,
}

impl<B> DefaultSender<B>
where
    B: Body + Send + Unpin + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    /// Create a sender with default client settings.
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a sender from client settings.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.connect_secs)));

        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(Duration::from_secs(config.idle_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build(connector);

        tracing::debug!(
            connect_secs = config.connect_secs,
            idle_secs = config.idle_secs,
            max_idle_per_host = config.max_idle_per_host,
            "HTTP client initialized"
        );

        Self { client }
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client<HttpConnector, B>) -> Self {
        Self { client }
    }
}

impl<B> Default for DefaultSender<B>
where
    B: Body + Send + Unpin + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Sender<B> for DefaultSender<B>
where
    B: Body + Clone + Send + Sync + Unpin + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Response = Response<Incoming>;
    type Error = Error;

    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error> {
        let request = take_request(request);
        Box::pin(self.client.request(request))
    }
}
