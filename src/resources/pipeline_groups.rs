//! Pipeline group resource.
//!
//! This module provides the [`PipelineGroup`] model and the
//! [`PipelineGroupsService`] that lists groups from
//! `api/admin/pipeline_groups`.
//!
//! # Example
//!
//! ```rust,ignore
//! use gocd::RequestContext;
//!
//! let ctx = RequestContext::background();
//!
//! // All groups, in server order
//! let groups = client.pipeline_groups().list(&ctx, "").await?;
//! for group in groups.iter() {
//!     println!("{}: {} pipelines", group.name, group.pipelines.len());
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ActionDispatcher, ApiResult, Transport};
use crate::context::RequestContext;
use crate::resolver::VersionResolver;
use crate::resources::{Pipeline, ResourcePath};

/// Path of the pipeline groups resource.
pub const PIPELINE_GROUPS_PATH: ResourcePath = ResourcePath::from_static("admin/pipeline_groups");

/// A named collection of pipelines.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PipelineGroup {
    /// The group name.
    pub name: String,

    /// Member pipelines in server order. Missing in the response means empty.
    #[serde(default)]
    pub pipelines: Vec<Pipeline>,
}

/// Pipeline groups in server order, duplicates included.
pub type PipelineGroups = Vec<PipelineGroup>;

/// Operations on pipeline groups.
///
/// Obtained from [`GocdClient::pipeline_groups`](crate::GocdClient::pipeline_groups).
#[derive(Debug)]
pub struct PipelineGroupsService<'a, T, R> {
    dispatcher: &'a ActionDispatcher<T>,
    resolver: &'a R,
}

impl<'a, T: Transport, R: VersionResolver> PipelineGroupsService<'a, T, R> {
    /// Creates a service over the given dispatcher and resolver.
    #[must_use]
    pub const fn new(dispatcher: &'a ActionDispatcher<T>, resolver: &'a R) -> Self {
        Self {
            dispatcher,
            resolver,
        }
    }

    /// Lists pipeline groups.
    ///
    /// `name` is appended verbatim to `admin/pipeline_groups`; no separator is
    /// inserted and nothing is escaped. Pass `""` to list every group.
    ///
    /// Each call resolves the resource version and then issues a single GET.
    ///
    /// # Errors
    ///
    /// Propagates resolver and dispatcher errors unchanged.
    pub async fn list(&self, ctx: &RequestContext, name: &str) -> ApiResult<PipelineGroups> {
        let version = self.resolver.resolve(ctx, &PIPELINE_GROUPS_PATH).await?;
        let path = PIPELINE_GROUPS_PATH.with_suffix(name);
        self.dispatcher.get_action(ctx, path, version).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserializes_with_pipelines() {
        let json = r#"{
            "name": "first",
            "pipelines": [{"name": "up42", "label": "${COUNT}"}]
        }"#;

        let group: PipelineGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "first");
        assert_eq!(group.pipelines.len(), 1);
        assert_eq!(group.pipelines[0].name, "up42");
    }

    #[test]
    fn test_missing_pipelines_decodes_as_empty() {
        let group: PipelineGroup = serde_json::from_str(r#"{"name": "empty"}"#).unwrap();
        assert!(group.pipelines.is_empty());
    }

    #[test]
    fn test_groups_keep_server_order_and_duplicates() {
        let json = r#"[{"name": "b"}, {"name": "a"}, {"name": "b"}]"#;
        let groups: PipelineGroups = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_group_missing_name_fails() {
        assert!(serde_json::from_str::<PipelineGroup>(r#"{"pipelines": []}"#).is_err());
    }
}
