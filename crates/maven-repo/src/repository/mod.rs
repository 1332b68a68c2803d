//! Repository descriptors and their resolution
//!
//! Descriptors come from two places: fixed public mirrors, and environment
//! variables named after a caller-supplied prefix.
//!
//! # Example
//!
//! ```rust
//! use maven_repo::env::MapEnv;
//! use maven_repo::repository::{MirrorVendor, RepositoryResolver};
//!
//! let env = MapEnv::new()
//!     .with("ACME_url", "https://repo.acme.test")
//!     .with("ACME_username", "bob")
//!     .with("ACME_password", "secret");
//! let resolver = RepositoryResolver::new(env);
//!
//! let repo = resolver.from_env_authenticated("ACME").unwrap();
//! assert_eq!(repo.url, "https://repo.acme.test");
//! assert!(repo.allow_insecure);
//!
//! let mirror = resolver.public_mirror(MirrorVendor::Aliyun);
//! assert!(mirror.credentials.is_none());
//! ```

mod descriptor;
mod handler;
mod mirror;
mod resolver;

pub use descriptor::{Credentials, MavenRepository, PublishChannel, PublishRepository};
pub use handler::RepositoryHandler;
pub use mirror::{plugin_mirror, public_mirror, MirrorVendor};
pub use resolver::{from_env_authenticated, from_env_for_publishing, from_env_public, RepositoryResolver};
