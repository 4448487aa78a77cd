//! Resolver that asks the server which release it runs.

use crate::clients::{ActionDispatcher, ClientError, Transport};
use crate::config::{ApiVersion, ServerVersion};
use crate::context::RequestContext;
use crate::resolver::{VersionResolver, VersionTable};
use crate::resources::{ResourcePath, ServerInfo, SERVER_INFO_PATH};

/// Version used to read `api/version` itself.
pub const PROBE_VERSION: ApiVersion = ApiVersion::Revision(1);

/// Resolves versions by probing the server's release number.
///
/// Each resolution issues one `GET api/version`, parses the reported release
/// and selects the matching rule from its [`VersionTable`]. Paths absent from
/// the table fail before any request is sent.
#[derive(Debug, Clone)]
pub struct ServerVersionResolver<T> {
    dispatcher: ActionDispatcher<T>,
    table: VersionTable,
}

impl<T: Transport> ServerVersionResolver<T> {
    /// Creates a resolver over `transport` using [`VersionTable::gocd_defaults`].
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_table(transport, VersionTable::gocd_defaults())
    }

    /// Creates a resolver over `transport` using a custom table.
    #[must_use]
    pub const fn with_table(transport: T, table: VersionTable) -> Self {
        Self {
            dispatcher: ActionDispatcher::new(transport),
            table,
        }
    }

    /// Returns the version table.
    #[must_use]
    pub const fn table(&self) -> &VersionTable {
        &self.table
    }

    /// Reads the release number the server reports.
    ///
    /// # Errors
    ///
    /// Returns the dispatch error of the probe, or
    /// [`ClientError::InvalidServerVersion`] if the release is unparseable.
    pub async fn server_version(&self, ctx: &RequestContext) -> Result<ServerVersion, ClientError> {
        let info = self
            .dispatcher
            .get_action::<ServerInfo>(ctx, SERVER_INFO_PATH, PROBE_VERSION)
            .await?;
        info.server_version()
    }
}

impl<T: Transport> VersionResolver for ServerVersionResolver<T> {
    async fn resolve(
        &self,
        ctx: &RequestContext,
        path: &ResourcePath,
    ) -> Result<ApiVersion, ClientError> {
        let unsupported = || ClientError::UnsupportedResource {
            path: path.to_string(),
        };

        if !self.table.supports(path) {
            return Err(unsupported());
        }

        let server = self.server_version(ctx).await?;
        let version = self.table.select(path, server).ok_or_else(unsupported)?;

        tracing::debug!(%path, %server, %version, "Resolved GoCD API version");
        Ok(version)
    }
}
