//! Plugin attachment and plugin dependency notation

mod coordinate;
mod provider;
mod target;

pub use coordinate::{plugin_coordinate, plugin_coordinate_deferred, PluginCoordinate};
pub use provider::Provider;
pub use target::{HostTarget, Plugin, RepositoryPlugin, TargetKind, PLUGIN_DISPLAY_NAME, PLUGIN_ID};
