//! API and server version definitions.
//!
//! GoCD versions its API per resource: every endpoint negotiates its own
//! representation through the `Accept` media type. [`ApiVersion`] is that
//! per-resource token, while [`ServerVersion`] is the release of the server
//! itself, used to choose which [`ApiVersion`] a resource expects.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

const MEDIA_TYPE_PREFIX: &str = "application/vnd.go.cd.v";
const MEDIA_TYPE_SUFFIX: &str = "+json";

/// Protocol revision of a single GoCD API resource.
///
/// An `ApiVersion` is only meaningful for the resource path it was resolved
/// for. Revisions of different resources are unrelated, so the type offers
/// equality but no ordering.
///
/// # Example
///
/// ```rust
/// use gocd::ApiVersion;
///
/// let version: ApiVersion = "v4".parse().unwrap();
/// assert_eq!(version, ApiVersion::Revision(4));
/// assert_eq!(version.media_type(), "application/vnd.go.cd.v4+json");
/// assert_eq!(version.to_string(), "v4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Numbered revision, sent as `application/vnd.go.cd.v{n}+json`.
    Revision(u32),
    /// Server-defined media type sent verbatim.
    Custom(String),
}

impl ApiVersion {
    /// Returns the media type sent in the `Accept` header.
    #[must_use]
    pub fn media_type(&self) -> Cow<'_, str> {
        match self {
            Self::Revision(n) => Cow::Owned(format!("{MEDIA_TYPE_PREFIX}{n}{MEDIA_TYPE_SUFFIX}")),
            Self::Custom(media_type) => Cow::Borrowed(media_type),
        }
    }

    /// Returns the revision number, if this is a numbered revision.
    #[must_use]
    pub const fn revision(&self) -> Option<u32> {
        match self {
            Self::Revision(n) => Some(*n),
            Self::Custom(_) => None,
        }
    }

    fn parse_revision(s: &str) -> Option<u32> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revision(n) => write!(f, "v{n}"),
            Self::Custom(media_type) => f.write_str(media_type),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        if let Some(n) = Self::parse_revision(s) {
            return Ok(Self::Revision(n));
        }

        if let Some(rest) = s.strip_prefix(['v', 'V']) {
            return Self::parse_revision(rest).map(Self::Revision).ok_or_else(invalid);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(n) = lower
            .strip_prefix(MEDIA_TYPE_PREFIX)
            .and_then(|rest| rest.strip_suffix(MEDIA_TYPE_SUFFIX))
            .and_then(Self::parse_revision)
        {
            return Ok(Self::Revision(n));
        }

        // Any other type/subtype pair is treated as a server-defined media type.
        match s.split_once('/') {
            Some((kind, subtype)) if !kind.is_empty() && !subtype.is_empty() => {
                Ok(Self::Custom(s.to_string()))
            }
            _ => Err(invalid()),
        }
    }
}

/// Release number of a GoCD server, e.g. `18.7.0`.
///
/// Missing components default to zero, and any build suffix after `-` or a
/// space is ignored, so `"19.1"` and `"19.1.0-8469"` both parse.
///
/// # Example
///
/// ```rust
/// use gocd::ServerVersion;
///
/// let version: ServerVersion = "18.7.0".parse().unwrap();
/// assert!(version >= ServerVersion::new(18, 2, 0));
/// assert_eq!(version.to_string(), "18.7.0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ServerVersion {
    /// Major release (year-based for GoCD).
    pub major: u32,
    /// Minor release.
    pub minor: u32,
    /// Patch release.
    pub patch: u32,
}

impl ServerVersion {
    /// Creates a server version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ServerVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidServerVersion {
            version: s.to_string(),
        };

        let release = s
            .trim()
            .split(['-', ' '])
            .next()
            .filter(|release| !release.is_empty())
            .ok_or_else(invalid)?;

        let mut components = [0_u32; 3];
        let mut count = 0;
        for part in release.split('.') {
            if count == components.len() || part.is_empty() {
                return Err(invalid());
            }
            if !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            components[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}
