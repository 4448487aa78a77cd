//! Configuration types for the GoCD client.
//!
//! # Overview
//!
//! - [`GocdConfig`]: the immutable client configuration
//! - [`GocdConfigBuilder`]: builder for [`GocdConfig`]
//! - [`ServerUrl`]: a validated server base URL
//! - [`Credentials`], [`Username`], [`Password`]: basic-auth credentials
//! - [`ApiVersion`]: per-resource protocol revision
//! - [`ServerVersion`]: GoCD server release number
//!
//! # Example
//!
//! ```rust
//! use gocd::{Credentials, GocdConfig, Password, ServerUrl, Username};
//!
//! let config = GocdConfig::builder()
//!     .server_url(ServerUrl::new("https://ci.example.com/go").unwrap())
//!     .credentials(Credentials::new(
//!         Username::new("admin").unwrap(),
//!         Password::new("secret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert!(config.credentials().is_some());
//! ```

mod newtypes;
mod version;

pub use newtypes::{Credentials, Password, ServerUrl, Username};
pub use version::{ApiVersion, ServerVersion};

use crate::error::ConfigError;

/// Configuration for a GoCD client.
///
/// `GocdConfig` is `Clone`, `Send`, and `Sync`, so one configuration can be
/// shared by every client created in a process.
#[derive(Clone, Debug)]
pub struct GocdConfig {
    server_url: ServerUrl,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    skip_tls_verify: bool,
}

impl GocdConfig {
    /// Creates a new builder for constructing a `GocdConfig`.
    #[must_use]
    pub fn builder() -> GocdConfigBuilder {
        GocdConfigBuilder::new()
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the basic-auth credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether TLS certificate verification is disabled.
    #[must_use]
    pub const fn skip_tls_verify(&self) -> bool {
        self.skip_tls_verify
    }
}

// Verify GocdConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GocdConfig>();
};

/// Builder for constructing [`GocdConfig`] instances.
///
/// `server_url` is required. Defaults:
///
/// - `credentials`: `None` (anonymous access)
/// - `user_agent_prefix`: `None`
/// - `skip_tls_verify`: `false`
#[derive(Debug, Default)]
pub struct GocdConfigBuilder {
    server_url: Option<ServerUrl>,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    skip_tls_verify: Option<bool>,
}

impl GocdConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL (required).
    #[must_use]
    pub fn server_url(mut self, url: ServerUrl) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Sets basic-auth credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Disables TLS certificate verification, for servers using self-signed
    /// certificates.
    #[must_use]
    pub const fn skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = Some(skip);
        self
    }

    /// Builds the [`GocdConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `server_url` is not set.
    pub fn build(self) -> Result<GocdConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingRequiredField {
                field: "server_url",
            })?;

        Ok(GocdConfig {
            server_url,
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
            skip_tls_verify: self.skip_tls_verify.unwrap_or(false),
        })
    }
}
