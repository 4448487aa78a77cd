//! Generic action dispatch: one HTTP exchange plus typed decoding.
//!
//! Every resource client is a thin layer over [`ActionDispatcher`]: it
//! supplies a [`ResourcePath`], a resolved [`ApiVersion`] and a destination
//! type, and the dispatcher performs the exchange and decodes the body.

use serde::de::DeserializeOwned;

use crate::clients::transport::Transport;
use crate::clients::{
    ApiResponse, ApiResult, ClientError, HttpMethod, HttpRequest, ResourceResponse,
};
use crate::config::ApiVersion;
use crate::context::RequestContext;
use crate::resources::ResourcePath;

/// Header carrying the negotiated protocol version.
pub const VERSION_HEADER: &str = "Accept";

/// One action against a resource path with a resolved protocol version.
///
/// The dispatcher trusts that `api_version` was resolved for `path`.
///
/// # Example
///
/// ```rust
/// use gocd::clients::{ActionRequest, HttpMethod};
/// use gocd::resources::ResourcePath;
/// use gocd::ApiVersion;
///
/// let request = ActionRequest::get(
///     ResourcePath::new("admin/pipeline_groups").unwrap(),
///     ApiVersion::Revision(1),
/// );
/// assert_eq!(request.method, HttpMethod::Get);
/// ```
#[derive(Clone, Debug)]
pub struct ActionRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The target path, including any name suffix.
    pub path: ResourcePath,
    /// The protocol version resolved for `path`.
    pub api_version: ApiVersion,
    /// JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl ActionRequest {
    /// Creates an action with no body.
    #[must_use]
    pub const fn new(method: HttpMethod, path: ResourcePath, api_version: ApiVersion) -> Self {
        Self {
            method,
            path,
            api_version,
            body: None,
        }
    }

    /// Creates a read action.
    #[must_use]
    pub const fn get(path: ResourcePath, api_version: ApiVersion) -> Self {
        Self::new(HttpMethod::Get, path, api_version)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Performs versioned HTTP actions and decodes their responses.
///
/// The dispatcher holds no state besides its transport; one
/// [`perform`](Self::perform) is exactly one network round trip.
#[derive(Debug, Clone)]
pub struct ActionDispatcher<T> {
    transport: T,
}

impl<T: Transport> ActionDispatcher<T> {
    /// Creates a dispatcher over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs `request` and decodes the body into `D`.
    ///
    /// An empty success body decodes as JSON `null`.
    ///
    /// # Errors
    ///
    /// Exactly one of:
    /// - [`ClientError::Transport`] if the exchange fails or is interrupted
    /// - [`ClientError::HttpStatus`] for a non-2xx status
    /// - [`ClientError::Decode`] if the body does not match `D`
    ///
    /// The last two carry the [`ApiResponse`] envelope.
    pub async fn perform<D: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: ActionRequest,
    ) -> ApiResult<D> {
        let ActionRequest {
            method,
            path,
            api_version,
            body,
        } = request;

        let mut builder = HttpRequest::builder(method, path.as_str())
            .header(VERSION_HEADER, api_version.media_type());
        if let Some(body) = body {
            builder = builder.json_body(body);
        }

        tracing::debug!(%method, %path, version = %api_version, "Dispatching GoCD action");

        let raw = self.transport.send(ctx, builder.build()).await?;
        let response =
            ApiResponse::new(raw.status, raw.headers, raw.url).with_api_version(api_version);

        if let Some(info) = response.deprecation_info() {
            tracing::warn!(
                "Deprecated GoCD API version {} used at {}, deprecated in {} and removed in {}",
                response.api_version.as_ref().map_or_else(String::new, ToString::to_string),
                response.url,
                info.deprecated_in,
                info.removal_in.as_deref().unwrap_or("an unannounced release")
            );
        }

        if !response.is_success() {
            return Err(ClientError::HttpStatus {
                code: response.status,
                body: raw.body,
                response,
            });
        }

        let text = if raw.body.trim().is_empty() {
            "null"
        } else {
            raw.body.as_str()
        };

        match serde_json::from_str::<D>(text) {
            Ok(data) => Ok(ResourceResponse::new(data, response)),
            Err(source) => Err(ClientError::Decode { source, response }),
        }
    }

    /// Performs a read (GET) action against `path`.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    pub async fn get_action<D: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: ResourcePath,
        api_version: ApiVersion,
    ) -> ApiResult<D> {
        self.perform(ctx, ActionRequest::get(path, api_version)).await
    }
}
