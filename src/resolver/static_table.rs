//! Fixed in-memory resolver.

use std::collections::HashMap;

use crate::clients::ClientError;
use crate::config::ApiVersion;
use crate::context::RequestContext;
use crate::resolver::VersionResolver;
use crate::resources::ResourcePath;

/// Resolves versions from a fixed map, without talking to the server.
///
/// Useful when the server release is known in advance, and in tests.
///
/// # Example
///
/// ```rust
/// use gocd::resolver::{StaticVersionResolver, VersionResolver};
/// use gocd::resources::ResourcePath;
/// use gocd::{ApiVersion, RequestContext};
///
/// # tokio_test::block_on(async {
/// let resolver = StaticVersionResolver::new()
///     .with_version(ResourcePath::from_static("admin/pipeline_groups"), ApiVersion::Revision(1));
///
/// let version = resolver
///     .resolve(&RequestContext::background(), &ResourcePath::from_static("admin/pipeline_groups"))
///     .await
///     .unwrap();
/// assert_eq!(version, ApiVersion::Revision(1));
/// # });
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticVersionResolver {
    versions: HashMap<ResourcePath, ApiVersion>,
}

impl StaticVersionResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `path` to `version`, replacing any earlier mapping.
    #[must_use]
    pub fn with_version(mut self, path: ResourcePath, version: ApiVersion) -> Self {
        self.versions.insert(path, version);
        self
    }
}

impl FromIterator<(ResourcePath, ApiVersion)> for StaticVersionResolver {
    fn from_iter<I: IntoIterator<Item = (ResourcePath, ApiVersion)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}

impl VersionResolver for StaticVersionResolver {
    async fn resolve(
        &self,
        ctx: &RequestContext,
        path: &ResourcePath,
    ) -> Result<ApiVersion, ClientError> {
        ctx.check()?;

        let version = self
            .versions
            .get(path)
            .cloned()
            .ok_or_else(|| ClientError::UnsupportedResource {
                path: path.to_string(),
            })?;

        tracing::debug!(%path, %version, "Resolved GoCD API version from static table");
        Ok(version)
    }
}
