//! Error types for GoCD API operations.
//!
//! Every failure of a resolution or dispatch surfaces as a [`ClientError`].
//! The variants are mutually exclusive and are never recovered from locally:
//!
//! - [`ClientError::Transport`]: the exchange did not complete (network
//!   failure, cancellation, deadline)
//! - [`ClientError::UnsupportedResource`]: the server does not know the path
//! - [`ClientError::HttpStatus`]: the server answered with a non-2xx status
//! - [`ClientError::Decode`]: the body did not match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use gocd::ClientError;
//!
//! match client.pipeline_groups().list(&ctx, "").await {
//!     Ok(groups) => println!("{} groups", groups.len()),
//!     Err(ClientError::HttpStatus { code, body, .. }) => {
//!         println!("Server returned {code}: {body}");
//!     }
//!     Err(e) if e.is_cancelled() => println!("Request cancelled"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::ApiResponse;

/// Error returned when an HTTP exchange could not be completed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request context was cancelled before the server responded.
    #[error("Request cancelled before the server responded.")]
    Cancelled,

    /// The request context's deadline passed before the server responded.
    #[error("Request deadline exceeded before the server responded.")]
    DeadlineExceeded,
}

/// Unified error type for GoCD API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server does not recognize the resource path.
    #[error("Resource path '{path}' is not supported by the GoCD server.")]
    UnsupportedResource {
        /// The unsupported path.
        path: String,
    },

    /// The server returned a non-success status.
    #[error("GoCD server returned HTTP {code}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        code: u16,
        /// The raw response body.
        body: String,
        /// The response envelope.
        response: ApiResponse,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// The response envelope, including the real status code.
        response: ApiResponse,
    },

    /// A resource path was empty.
    #[error("Resource path cannot be empty.")]
    InvalidResourcePath,

    /// The server reported a release number that could not be parsed.
    #[error("GoCD server reported an unparseable version '{version}'.")]
    InvalidServerVersion {
        /// The version string reported by the server.
        version: String,
    },
}

impl ClientError {
    /// Returns the response envelope, if a response was received.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::HttpStatus { response, .. } | Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// Returns `true` if the request was cancelled or ran past its deadline.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::Cancelled | TransportError::DeadlineExceeded)
        )
    }
}
