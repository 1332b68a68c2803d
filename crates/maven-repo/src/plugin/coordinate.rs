use serde::{Deserialize, Serialize};
use std::fmt;

use super::provider::Provider;

/// A build tool plugin referenced by id and version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginCoordinate {
    pub id: String,
    pub version: String,
}

impl PluginCoordinate {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    /// Artifact name of the plugin marker: `{id}.gradle.plugin`
    pub fn marker_artifact(&self) -> String {
        format!("{}.gradle.plugin", self.id)
    }

    /// The plugin as an ordinary library dependency: `{id}:{id}.gradle.plugin:{version}`
    pub fn to_dependency_notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PluginCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.gradle.plugin:{}", self.id, self.id, self.version)
    }
}

/// Dependency notation for plugin `id` at `version`
pub fn plugin_coordinate(id: &str, version: &str) -> String {
    PluginCoordinate::new(id, version).to_dependency_notation()
}

/// Dependency notation for a plugin whose version the host resolves later
///
/// Nothing is formatted until the returned provider is read.
pub fn plugin_coordinate_deferred(plugin: Provider<PluginCoordinate>) -> Provider<String> {
    plugin.map(|coordinate| coordinate.to_dependency_notation())
}
