//! The sender capability.
//!
//! A [`Sender`] transmits one request and resolves to whatever response or
//! error its transport produces. The default client, the header-modifying
//! [`Transport`](crate::http::Transport), tower services wrapped in
//! [`ServiceSender`] and test doubles all implement it, so they can be
//! stacked in any order.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use http::Request;
use tower::{Service, ServiceExt};

use crate::http::clone::take_request;

/// A request shared between the caller and the sender.
///
/// Senders must not mutate a shared request; the caller may still be
/// holding the same handle.
pub type SharedRequest<B> = Arc<Request<B>>;

/// Future returned by [`Sender::send`].
pub type SendFuture<R, E> = BoxFuture<'static, Result<R, E>>;

/// Something that can transmit a request.
pub trait Sender<B>: Send + Sync {
    type Response;
    type Error;

    /// Transmit `request`.
    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error>;
}

impl<S, B> Sender<B> for Arc<S>
where
    S: Sender<B> + ?Sized,
{
    type Response = S::Response;
    type Error = S::Error;

    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error> {
        (**self).send(request)
    }
}

impl<S, B> Sender<B> for Box<S>
where
    S: Sender<B> + ?Sized,
{
    type Response = S::Response;
    type Error = S::Error;

    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error> {
        (**self).send(request)
    }
}

/// Adapts a [`tower::Service`] over owned requests into a [`Sender`].
///
/// Each call works on a clone of the service, driven to readiness with
/// `oneshot`. The request is unwrapped if this is the last handle and
/// copied otherwise.
#[derive(Debug, Clone)]
pub struct ServiceSender<T> {
    inner: T,
}

impl<T> ServiceSender<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T, B> Sender<B> for ServiceSender<T>
where
    T: Service<Request<B>> + Clone + Send + Sync + 'static,
    T::Future: Send + 'static,
    T::Response: 'static,
    T::Error: 'static,
    B: Clone + Send + 'static,
{
    type Response = T::Response;
    type Error = T::Error;

    fn send(&self, request: SharedRequest<B>) -> SendFuture<Self::Response, Self::Error> {
        let request = take_request(request);
        Box::pin(self.inner.clone().oneshot(request))
    }
}
