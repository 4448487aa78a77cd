//! Server-release gated version table.

use crate::config::{ApiVersion, ServerVersion};
use crate::resources::ResourcePath;

/// One table entry: `path` speaks `version` on servers at or above `min_server`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionRule {
    /// The resource path the rule applies to.
    pub path: ResourcePath,
    /// Oldest server release the rule applies to.
    pub min_server: ServerVersion,
    /// The version to use.
    pub version: ApiVersion,
}

impl VersionRule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(path: ResourcePath, min_server: ServerVersion, version: ApiVersion) -> Self {
        Self {
            path,
            min_server,
            version,
        }
    }
}

/// Maps resource paths to versions by server release.
///
/// For a given server release the table picks, among the rules for a path,
/// the one with the highest `min_server` not above that release.
///
/// # Example
///
/// ```rust
/// use gocd::resolver::VersionTable;
/// use gocd::resources::ResourcePath;
/// use gocd::{ApiVersion, ServerVersion};
///
/// let table = VersionTable::gocd_defaults();
/// let agents = ResourcePath::from_static("agents");
///
/// assert_eq!(
///     table.select(&agents, ServerVersion::new(18, 1, 0)),
///     Some(ApiVersion::Revision(4))
/// );
/// assert_eq!(
///     table.select(&agents, ServerVersion::new(19, 0, 0)),
///     Some(ApiVersion::Revision(5))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionTable {
    rules: Vec<VersionRule>,
}

impl VersionTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The versions spoken by GoCD server releases for the resources this
    /// crate knows about.
    #[must_use]
    pub fn gocd_defaults() -> Self {
        const BASELINE: ServerVersion = ServerVersion::new(0, 0, 0);

        Self::new()
            .with_rule(
                ResourcePath::from_static("admin/pipeline_groups"),
                BASELINE,
                ApiVersion::Revision(1),
            )
            .with_rule(ResourcePath::from_static("version"), BASELINE, ApiVersion::Revision(1))
            .with_rule(
                ResourcePath::from_static("admin/pipelines"),
                BASELINE,
                ApiVersion::Revision(5),
            )
            .with_rule(
                ResourcePath::from_static("admin/pipelines"),
                ServerVersion::new(18, 7, 0),
                ApiVersion::Revision(6),
            )
            .with_rule(
                ResourcePath::from_static("admin/templates"),
                BASELINE,
                ApiVersion::Revision(3),
            )
            .with_rule(
                ResourcePath::from_static("admin/templates"),
                ServerVersion::new(18, 7, 0),
                ApiVersion::Revision(4),
            )
            .with_rule(
                ResourcePath::from_static("admin/environments"),
                BASELINE,
                ApiVersion::Revision(2),
            )
            .with_rule(ResourcePath::from_static("agents"), BASELINE, ApiVersion::Revision(4))
            .with_rule(
                ResourcePath::from_static("agents"),
                ServerVersion::new(18, 2, 0),
                ApiVersion::Revision(5),
            )
    }

    /// Adds a rule.
    #[must_use]
    pub fn with_rule(
        mut self,
        path: ResourcePath,
        min_server: ServerVersion,
        version: ApiVersion,
    ) -> Self {
        self.rules.push(VersionRule::new(path, min_server, version));
        self
    }

    /// Returns `true` if any rule mentions `path`.
    #[must_use]
    pub fn supports(&self, path: &ResourcePath) -> bool {
        self.rules.iter().any(|rule| &rule.path == path)
    }

    /// Selects the version for `path` on a server running `server`.
    ///
    /// Returns `None` if `path` is unknown or every rule for it requires a
    /// newer server.
    #[must_use]
    pub fn select(&self, path: &ResourcePath, server: ServerVersion) -> Option<ApiVersion> {
        self.rules
            .iter()
            .filter(|rule| &rule.path == path && rule.min_server <= server)
            .max_by_key(|rule| rule.min_server)
            .map(|rule| rule.version.clone())
    }

    /// Returns the rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[VersionRule] {
        &self.rules
    }
}

impl FromIterator<VersionRule> for VersionTable {
    fn from_iter<I: IntoIterator<Item = VersionRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
