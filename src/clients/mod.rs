//! HTTP plumbing for the GoCD API.
//!
//! This module provides the layer every resource client is built on:
//!
//! - [`Transport`]: the seam that sends one [`HttpRequest`] and returns a
//!   [`RawResponse`]
//! - [`HttpClient`]: the reqwest-backed transport
//! - [`ActionDispatcher`]: attaches the resolved API version, performs one
//!   exchange and decodes the body into a typed value
//! - [`ApiResponse`]: the response envelope returned with every outcome
//! - [`ClientError`] and [`TransportError`]: the failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use gocd::clients::{ActionDispatcher, HttpClient};
//! use gocd::resources::ResourcePath;
//! use gocd::{ApiVersion, RequestContext};
//!
//! let dispatcher = ActionDispatcher::new(HttpClient::new(&config)?);
//! let info: serde_json::Value = dispatcher
//!     .get_action(
//!         &RequestContext::background(),
//!         ResourcePath::from_static("version"),
//!         ApiVersion::Revision(1),
//!     )
//!     .await?
//!     .into_inner();
//! ```
//!
//! # Retry Behavior
//!
//! Nothing in this module retries. A failed exchange is reported as-is.

mod dispatcher;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod resource_response;
mod transport;

pub use dispatcher::{ActionDispatcher, ActionRequest, VERSION_HEADER};
pub use errors::{ClientError, TransportError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiResponse, DeprecationInfo};
pub use resource_response::{ApiResult, ResourceResponse};
pub use transport::{RawResponse, Transport};
