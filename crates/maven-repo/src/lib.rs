//! Maven repository endpoints for build tools
//!
//! Produces repository descriptors (URL, credentials, protocol policy) from
//! known public mirrors or from environment variables, formats plugin
//! dependency notation, and validates the host context the plugin is attached
//! to. All network and file access stays with the host.

pub mod env;
pub mod error;
pub mod plugin;
pub mod repository;

pub use env::{EnvKey, EnvSource, EnvSuffix, MapEnv, ProcessEnv};
pub use error::{RepoError, Result};
pub use plugin::{plugin_coordinate, plugin_coordinate_deferred, HostTarget, Plugin, PluginCoordinate, Provider, RepositoryPlugin, TargetKind};
pub use repository::{
    from_env_authenticated, from_env_for_publishing, from_env_public, plugin_mirror, public_mirror,
    Credentials, MavenRepository, MirrorVendor, PublishChannel, PublishRepository, RepositoryHandler,
    RepositoryResolver,
};
