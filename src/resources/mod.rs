//! GoCD API resources.
//!
//! Each resource pairs a model with a service that resolves the resource's
//! API version and dispatches the request.
//!
//! # Available Resources
//!
//! - [`PipelineGroupsService`]: lists [`PipelineGroup`]s at
//!   `admin/pipeline_groups`
//! - [`ServerInfoService`]: reads [`ServerInfo`] at `version`
//!
//! [`ResourcePath`] identifies endpoints for both resolution and dispatch.

mod path;
mod pipeline;
mod pipeline_groups;
mod server_info;

pub use path::ResourcePath;
pub use pipeline::Pipeline;
pub use pipeline_groups::{
    PipelineGroup, PipelineGroups, PipelineGroupsService, PIPELINE_GROUPS_PATH,
};
pub use server_info::{ServerInfo, ServerInfoService, SERVER_INFO_PATH};
