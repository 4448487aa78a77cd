//! Server version information from `api/version`.

use serde::{Deserialize, Serialize};

use crate::clients::{ActionDispatcher, ApiResult, ClientError, Transport};
use crate::config::ServerVersion;
use crate::context::RequestContext;
use crate::resolver::VersionResolver;
use crate::resources::ResourcePath;

/// Path of the server information resource.
pub const SERVER_INFO_PATH: ResourcePath = ResourcePath::from_static("version");

/// Release details reported by a GoCD server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServerInfo {
    /// Release number, e.g. `18.7.0`.
    pub version: String,

    /// Build number of the release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,

    /// Commit the server was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_sha: Option<String>,

    /// Release number and build number combined, e.g. `18.7.0 (7121-75a7f1e)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_version: Option<String>,

    /// Link to the commit on the source host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_url: Option<String>,
}

impl ServerInfo {
    /// Parses [`version`](Self::version) into a [`ServerVersion`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidServerVersion`] if the release number is
    /// malformed.
    pub fn server_version(&self) -> Result<ServerVersion, ClientError> {
        self.version
            .parse()
            .map_err(|_| ClientError::InvalidServerVersion {
                version: self.version.clone(),
            })
    }
}

/// Reads server information.
///
/// Obtained from [`GocdClient::server_info`](crate::GocdClient::server_info).
#[derive(Debug)]
pub struct ServerInfoService<'a, T, R> {
    dispatcher: &'a ActionDispatcher<T>,
    resolver: &'a R,
}

impl<'a, T: Transport, R: VersionResolver> ServerInfoService<'a, T, R> {
    /// Creates a service over the given dispatcher and resolver.
    #[must_use]
    pub const fn new(dispatcher: &'a ActionDispatcher<T>, resolver: &'a R) -> Self {
        Self {
            dispatcher,
            resolver,
        }
    }

    /// Fetches the server's release details.
    ///
    /// # Errors
    ///
    /// Propagates resolver and dispatcher errors unchanged.
    pub async fn get(&self, ctx: &RequestContext) -> ApiResult<ServerInfo> {
        let version = self.resolver.resolve(ctx, &SERVER_INFO_PATH).await?;
        self.dispatcher.get_action(ctx, SERVER_INFO_PATH, version).await
    }
}
