//! reqwest-backed HTTP transport for the GoCD API.
//!
//! This module provides the [`HttpClient`] type, which applies the configured
//! server URL, default headers and credentials to every request.

use std::collections::HashMap;

use crate::clients::transport::{RawResponse, Transport};
use crate::clients::{HttpMethod, HttpRequest, TransportError};
use crate::config::{GocdConfig, ServerUrl};
use crate::context::RequestContext;

/// Client library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for a single GoCD server.
///
/// The client handles:
/// - URL construction (`{server_url}/api/{path}`)
/// - Default headers including User-Agent and basic-auth `Authorization`;
///   `Accept` is left to each request, which carries the resource version
/// - Cancellation and deadlines through [`RequestContext`]
///
/// It performs exactly one exchange per [`send`](Transport::send) and never
/// retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; share it behind an `Arc` to issue
/// concurrent requests over one connection pool.
///
/// # Example
///
/// ```rust
/// use gocd::{GocdConfig, ServerUrl};
/// use gocd::clients::HttpClient;
///
/// let config = GocdConfig::builder()
///     .server_url(ServerUrl::new("https://ci.example.com/go").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.server_url().as_ref(), "https://ci.example.com/go");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL of the GoCD server.
    server_url: ServerUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS backend initialization failure).
    pub fn new(config: &GocdConfig) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}gocd-client v{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        if let Some(credentials) = config.credentials() {
            default_headers.insert(
                "Authorization".to_string(),
                credentials.authorization_header(),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(config.skip_tls_verify())
            .build()?;

        Ok(Self {
            client,
            server_url: config.server_url().clone(),
            default_headers,
        })
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    async fn exchange(
        &self,
        url: String,
        request: HttpRequest,
    ) -> Result<RawResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Request headers override defaults with the same name
        let mut headers = self.default_headers.clone();
        headers.extend(request.headers);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
            url,
        })
    }
}

impl Transport for HttpClient {
    async fn send(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<RawResponse, TransportError> {
        let url = self.server_url.api_url(&request.path);
        let method = request.method;

        let result = ctx.run(self.exchange(url.clone(), request)).await;
        if let Err(error) = &result {
            tracing::debug!(%method, %url, %error, "GoCD request did not complete");
        }
        result
    }
}
