//! # GoCD API client
//!
//! An async, typed client for the GoCD server's versioned REST API.
//!
//! ## Overview
//!
//! GoCD versions each API resource independently: the representation of
//! `admin/pipeline_groups` is negotiated separately from that of `agents`.
//! Every operation therefore runs in two steps:
//!
//! 1. a [`VersionResolver`](resolver::VersionResolver) determines which
//!    [`ApiVersion`] the server expects for the resource path, and
//! 2. the [`ActionDispatcher`](clients::ActionDispatcher) performs one HTTP
//!    exchange carrying that version and decodes the body.
//!
//! This crate provides:
//! - Type-safe configuration via [`GocdConfig`] and [`GocdConfigBuilder`]
//! - Validated newtypes for the server URL and basic-auth credentials
//! - Per-request cancellation and deadlines via [`RequestContext`]
//! - Static and server-probing version resolution
//! - Pipeline group listing and server information
//!
//! ## Quick Start
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
//! ```
//!
//! ## Listing Pipeline Groups
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use gocd::{GocdClient, RequestContext};
//!
//! let client = GocdClient::new(&config)?;
//! let ctx = RequestContext::background().with_timeout(Duration::from_secs(30));
//!
//! let groups = client.pipeline_groups().list(&ctx, "").await?;
//! for group in groups.iter() {
//!     println!("{} ({} pipelines)", group.name, group.pipelines.len());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the transport and resolver are injected into each
//!   service explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients, dispatchers and resolvers are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden retries**: one operation is at most one version inquiry and
//!   one dispatch

mod client;
pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod resolver;
pub mod resources;

pub use client::GocdClient;
pub use config::{
    ApiVersion, Credentials, GocdConfig, GocdConfigBuilder, Password, ServerUrl, ServerVersion,
    Username,
};
pub use context::{CancelHandle, RequestContext};
pub use error::ConfigError;

// Re-export client types
pub use clients::{ApiResponse, ApiResult, ClientError, ResourceResponse, TransportError};

// Re-export resource types
pub use resources::{Pipeline, PipelineGroup, PipelineGroups, ServerInfo};
