//! API version resolution.
//!
//! GoCD versions every resource independently, so before acting on a path the
//! client asks a [`VersionResolver`] which [`ApiVersion`] that path expects.
//!
//! Two resolvers are provided:
//!
//! - [`StaticVersionResolver`]: a fixed in-memory map, no I/O
//! - [`ServerVersionResolver`]: probes the server's `api/version` endpoint and
//!   picks the matching entry from a [`VersionTable`]
//!
//! Resolution is never cached; each call answers for the server as it is now.

mod server_probe;
mod static_table;
mod table;

use std::sync::Arc;

use crate::clients::ClientError;
use crate::config::ApiVersion;
use crate::context::RequestContext;
use crate::resources::ResourcePath;

pub use server_probe::{ServerVersionResolver, PROBE_VERSION};
pub use static_table::StaticVersionResolver;
pub use table::{VersionRule, VersionTable};

/// Determines the protocol version a resource path expects.
#[allow(async_fn_in_trait)]
pub trait VersionResolver: Send + Sync {
    /// Resolves the version for `path`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if an inquiry cannot reach the server,
    ///   including cancellation and deadline expiry
    /// - [`ClientError::UnsupportedResource`] if the path is unknown
    /// - [`ClientError::HttpStatus`] or [`ClientError::Decode`] if a server
    ///   inquiry returns an unusable answer
    async fn resolve(
        &self,
        ctx: &RequestContext,
        path: &ResourcePath,
    ) -> Result<ApiVersion, ClientError>;
}

impl<R: VersionResolver + ?Sized> VersionResolver for Arc<R> {
    async fn resolve(
        &self,
        ctx: &RequestContext,
        path: &ResourcePath,
    ) -> Result<ApiVersion, ClientError> {
        (**self).resolve(ctx, path).await
    }
}

impl<R: VersionResolver + ?Sized> VersionResolver for &R {
    async fn resolve(
        &self,
        ctx: &RequestContext,
        path: &ResourcePath,
    ) -> Result<ApiVersion, ClientError> {
        (**self).resolve(ctx, path).await
    }
}
