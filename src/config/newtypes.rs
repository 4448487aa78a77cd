//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ConfigError;

/// A validated GoCD username.
///
/// # Example
///
/// ```rust
/// use gocd::Username;
///
/// let user = Username::new("admin").unwrap();
/// assert_eq!(user.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated GoCD password or personal access token.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`.
///
/// # Example
///
/// ```rust
/// use gocd::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// Basic-auth credentials for the GoCD server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Creates credentials from a validated username and password.
    #[must_use]
    pub const fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the value of the `Authorization` header for these credentials.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gocd::{Credentials, Password, Username};
    ///
    /// let credentials = Credentials::new(
    ///     Username::new("user").unwrap(),
    ///     Password::new("pass").unwrap(),
    /// );
    /// assert_eq!(credentials.authorization_header(), "Basic dXNlcjpwYXNz");
    /// ```
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username.as_ref(), self.password.as_ref());
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// A validated GoCD server URL.
///
/// The URL must use the `http` or `https` scheme, name a host, and carry no
/// query or fragment. A trailing slash is removed so that API paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use gocd::ServerUrl;
///
/// let url = ServerUrl::new("https://ci.example.com/go/").unwrap();
/// assert_eq!(url.as_ref(), "https://ci.example.com/go");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "ci.example.com");
/// assert_eq!(
///     url.api_url("admin/pipeline_groups"),
///     "https://ci.example.com/go/api/admin/pipeline_groups"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ServerUrl {
    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidServerUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        // Nothing may follow the path.
        if url.contains(['?', '#']) {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the absolute URL of an API resource path.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty_string() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_password_rejects_empty_string() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_password_masks_value_in_debug() {
        let password = Password::new("super-secret").unwrap();
        assert_eq!(format!("{password:?}"), "Password(*****)");
    }

    #[test]
    fn test_credentials_debug_does_not_leak_password() {
        let credentials = Credentials::new(
            Username::new("admin").unwrap(),
            Password::new("super-secret").unwrap(),
        );
        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_authorization_header_is_basic_base64() {
        let credentials = Credentials::new(
            Username::new("admin").unwrap(),
            Password::new("badger").unwrap(),
        );
        assert_eq!(credentials.authorization_header(), "Basic YWRtaW46YmFkZ2Vy");
    }

    #[test]
    fn test_server_url_accepts_http_and_https() {
        let url = ServerUrl::new("http://localhost:8153/go").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");

        let url = ServerUrl::new("https://ci.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "ci.example.com");
    }

    #[test]
    fn test_server_url_trims_trailing_slash() {
        let url = ServerUrl::new("https://ci.example.com/go///").unwrap();
        assert_eq!(url.as_ref(), "https://ci.example.com/go");
    }

    #[test]
    fn test_server_url_rejects_invalid() {
        assert!(ServerUrl::new("ci.example.com").is_err());
        assert!(ServerUrl::new("ftp://ci.example.com").is_err());
        assert!(ServerUrl::new("https://").is_err());
        assert!(ServerUrl::new("https://:8154/go").is_err());
        assert!(ServerUrl::new("").is_err());
    }

    #[test]
    fn test_server_url_rejects_query_and_fragment() {
        for url in [
            "https://ci.example.com/go?x=1",
            "https://ci.example.com/go#top",
            "https://ci.example.com?x=1",
            "https://ci.example.com/go/?x=1/",
        ] {
            assert!(
                matches!(ServerUrl::new(url), Err(ConfigError::InvalidServerUrl { .. })),
                "Expected {url} to be rejected"
            );
        }
    }

    #[test]
    fn test_api_url_joins_with_single_slash() {
        let url = ServerUrl::new("https://ci.example.com/go/").unwrap();
        assert_eq!(url.api_url("version"), "https://ci.example.com/go/api/version");
        assert_eq!(url.api_url("/version"), "https://ci.example.com/go/api/version");
    }

    #[test]
    fn test_server_url_serde_round_trip_validates() {
        let url: ServerUrl = serde_json::from_str(r#""https://ci.example.com/go""#).unwrap();
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""https://ci.example.com/go""#);

        let invalid: Result<ServerUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(invalid.is_err());
    }
}
