//! The transport seam between the dispatcher and the network.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::{HttpRequest, TransportError};
use crate::context::RequestContext;

/// The undecoded result of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// The absolute URL that was requested.
    pub url: String,
}

/// Sends one HTTP request and returns the raw response.
///
/// Implementations apply base URL, default headers and credentials, and must
/// honor the context's cancellation and deadline. They perform exactly one
/// exchange per call and never retry.
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation; tests may substitute their own.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends `request` and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange fails or is interrupted.
    async fn send(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<RawResponse, TransportError> {
        (**self).send(ctx, request).await
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<RawResponse, TransportError> {
        (**self).send(ctx, request).await
    }
}
