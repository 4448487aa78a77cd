//! The response envelope returned alongside every dispatch.
//!
//! [`ApiResponse`] carries transport metadata (status, headers, URL, and the
//! protocol version that was negotiated). It is produced as soon as a response
//! arrives, so it is available on success, on a non-2xx status, and on a
//! decode failure alike.

use std::collections::HashMap;

use crate::config::ApiVersion;

/// Deprecation notice attached to a GoCD API response.
///
/// GoCD announces API revisions scheduled for removal with the
/// `X-GoCD-API-Deprecated-In`, `X-GoCD-API-Removal-In` and
/// `X-GoCD-API-Deprecation-Info` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationInfo {
    /// Server release in which the revision was deprecated.
    pub deprecated_in: String,
    /// Server release in which the revision will be removed, if announced.
    pub removal_in: Option<String>,
    /// Link to the changelog describing the replacement, if provided.
    pub info: Option<String>,
}

/// Transport metadata for one HTTP exchange.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The absolute URL that was requested.
    pub url: String,
    /// The protocol version sent with the request, if any.
    pub api_version: Option<ApiVersion>,
}

impl ApiResponse {
    /// Creates a new envelope. Header names are lower-cased.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, url: String) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_ascii_lowercase()).or_default().extend(v);
                acc
            });

        Self {
            status,
            headers,
            url,
            api_version: None,
        }
    }

    /// Records the protocol version that was sent with the request.
    #[must_use]
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `ETag` header value, if present.
    ///
    /// GoCD requires it in `If-Match` when updating configuration entities.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Returns deprecation details if the server flagged the revision as deprecated.
    #[must_use]
    pub fn deprecation_info(&self) -> Option<DeprecationInfo> {
        self.header("x-gocd-api-deprecated-in")
            .map(|deprecated_in| DeprecationInfo {
                deprecated_in: deprecated_in.to_string(),
                removal_in: self.header("x-gocd-api-removal-in").map(String::from),
                info: self.header("x-gocd-api-deprecation-info").map(String::from),
            })
    }

    /// Returns `true` if the server flagged the revision as deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.header("x-gocd-api-deprecated-in").is_some()
    }
}
