//! Resource path identifiers.
//!
//! A [`ResourcePath`] names a GoCD API endpoint relative to
//! `{server_url}/api/`, e.g. `admin/pipeline_groups` or `version`. It is the
//! key the version resolver looks up and the target the dispatcher requests.

use std::borrow::Cow;
use std::fmt;

use crate::clients::ClientError;

/// A non-empty path relative to the server's `api/` root.
///
/// # Example
///
/// ```rust
/// use gocd::resources::ResourcePath;
///
/// let path = ResourcePath::new("admin/pipeline_groups").unwrap();
/// assert_eq!(path.as_str(), "admin/pipeline_groups");
///
/// assert!(ResourcePath::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath(Cow<'static, str>);

impl ResourcePath {
    /// Creates a path from an owned or borrowed string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResourcePath`] if `path` is empty.
    pub fn new(path: impl Into<Cow<'static, str>>) -> Result<Self, ClientError> {
        let path = path.into();
        if path.is_empty() {
            return Err(ClientError::InvalidResourcePath);
        }
        Ok(Self(path))
    }

    /// Creates a path from a string literal.
    ///
    /// Intended for constants; the caller guarantees `path` is non-empty.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a new path with `suffix` appended verbatim.
    ///
    /// No separator is inserted and nothing is escaped, so
    /// `admin/pipeline_groups` with suffix `default` becomes
    /// `admin/pipeline_groupsdefault`. An empty suffix leaves the path unchanged.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        if suffix.is_empty() {
            return self.clone();
        }
        Self(Cow::Owned(format!("{}{suffix}", self.0)))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
