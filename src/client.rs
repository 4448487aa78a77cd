//! The top-level GoCD client.

use std::sync::Arc;

use crate::clients::{ActionDispatcher, ClientError, HttpClient, Transport};
use crate::config::GocdConfig;
use crate::resolver::{ServerVersionResolver, VersionResolver};
use crate::resources::{PipelineGroupsService, ServerInfoService};

/// Entry point for talking to a GoCD server.
///
/// A `GocdClient` owns one [`ActionDispatcher`] and one [`VersionResolver`]
/// and lends both to the resource services it hands out. The default
/// construction shares a single [`HttpClient`] between the dispatcher and a
/// probing [`ServerVersionResolver`]; [`with_parts`](Self::with_parts) accepts
/// any transport and resolver.
///
/// # Example
///
/// ```rust,ignore
/// use gocd::{GocdClient, GocdConfig, RequestContext, ServerUrl};
///
/// let config = GocdConfig::builder()
///     .server_url(ServerUrl::new("https://ci.example.com/go")?)
///     .build()?;
/// let client = GocdClient::new(&config)?;
///
/// let groups = client
///     .pipeline_groups()
///     .list(&RequestContext::background(), "")
///     .await?;
/// ```
#[derive(Debug)]
pub struct GocdClient<T, R> {
    dispatcher: ActionDispatcher<T>,
    resolver: R,
}

// Verify the default client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GocdClient<Arc<HttpClient>, ServerVersionResolver<Arc<HttpClient>>>>();
};

impl GocdClient<Arc<HttpClient>, ServerVersionResolver<Arc<HttpClient>>> {
    /// Creates a client that resolves versions by probing the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &GocdConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpClient::new(config)?);
        let resolver = ServerVersionResolver::new(Arc::clone(&transport));

        tracing::debug!(host = config.server_url().host_name(), "Created GoCD client");
        Ok(Self::with_parts(ActionDispatcher::new(transport), resolver))
    }
}

impl<T: Transport, R: VersionResolver> GocdClient<T, R> {
    /// Creates a client from an explicit dispatcher and resolver.
    #[must_use]
    pub const fn with_parts(dispatcher: ActionDispatcher<T>, resolver: R) -> Self {
        Self {
            dispatcher,
            resolver,
        }
    }

    /// Pipeline group operations.
    #[must_use]
    pub const fn pipeline_groups(&self) -> PipelineGroupsService<'_, T, R> {
        PipelineGroupsService::new(&self.dispatcher, &self.resolver)
    }

    /// Server information operations.
    #[must_use]
    pub const fn server_info(&self) -> ServerInfoService<'_, T, R> {
        ServerInfoService::new(&self.dispatcher, &self.resolver)
    }

    /// Returns the dispatcher, for resources without a dedicated service.
    #[must_use]
    pub const fn dispatcher(&self) -> &ActionDispatcher<T> {
        &self.dispatcher
    }

    /// Returns the version resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }
}
