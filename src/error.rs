//! Configuration error types for the GoCD client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use gocd::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the GoCD user to authenticate as.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the password or access token for the GoCD user.")]
    EmptyPassword,

    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide an http or https URL (e.g., 'https://ci.example.com/go').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'vN', 'N', or a media type such as 'application/vnd.go.cd.v1+json'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Server release version is invalid.
    #[error("Invalid server version '{version}'. Expected a dotted numeric release (e.g., '18.7.0').")]
    InvalidServerVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
