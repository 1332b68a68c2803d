//! Resolution of repository descriptors from environment variables
//!
//! For a prefix `P` the resolver reads:
//! 1. Repository URL: `P_url`
//! 2. Username: `P_username`
//! 3. Password: `P_password`
//! 4. Publishing URLs: `P_snapshots` / `P_releases`
//!
//! Repositories resolved from the environment always allow insecure protocols,
//! since they usually point at internal mirrors. URL values are taken as-is,
//! relative ones included; the host resolves them.

use log::debug;

use super::descriptor::{Credentials, MavenRepository, PublishChannel, PublishRepository};
use super::mirror::{self, MirrorVendor};
use crate::env::{EnvKey, EnvSource, EnvSuffix, ProcessEnv};
use crate::error::Result;

/// Resolves repositories against an [`EnvSource`]
#[derive(Debug, Clone, Default)]
pub struct RepositoryResolver<E = ProcessEnv> {
    env: E,
}

impl RepositoryResolver<ProcessEnv> {
    /// Resolver reading the process environment
    pub fn from_process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> RepositoryResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn public_mirror(&self, vendor: MirrorVendor) -> MavenRepository {
        mirror::public_mirror(vendor)
    }

    pub fn plugin_mirror(&self, vendor: MirrorVendor) -> MavenRepository {
        mirror::plugin_mirror(vendor)
    }

    /// Authenticated repository from `{prefix}_url`, `{prefix}_username` and `{prefix}_password`
    pub fn from_env_authenticated(&self, prefix: &str) -> Result<MavenRepository> {
        let url = self.url(prefix, EnvSuffix::Url)?;
        let credentials = self.credentials(prefix)?;

        debug!("Resolved authenticated repository {} for user {}", url, credentials.username);

        Ok(MavenRepository::new(url).with_credentials(credentials).allow_insecure(true))
    }

    /// Public repository from `{prefix}_url`
    pub fn from_env_public(&self, prefix: &str) -> Result<MavenRepository> {
        let url = self.url(prefix, EnvSuffix::Url)?;

        debug!("Resolved public repository {}", url);

        Ok(MavenRepository::new(url).allow_insecure(true))
    }

    /// Publishing repository, using `{prefix}_snapshots` when `is_snapshot` is set
    /// and `{prefix}_releases` otherwise
    pub fn from_env_for_publishing(&self, prefix: &str, is_snapshot: bool) -> Result<PublishRepository> {
        self.from_env_for_channel(prefix, PublishChannel::from(is_snapshot))
    }

    /// Publishing repository for `channel`; the other channel's URL is never read
    pub fn from_env_for_channel(&self, prefix: &str, channel: PublishChannel) -> Result<PublishRepository> {
        let url = self.url(prefix, channel.suffix())?;
        let credentials = self.credentials(prefix)?;

        debug!("Resolved {} publishing repository {} for user {}", channel, url, credentials.username);

        Ok(PublishRepository {
            url,
            channel,
            credentials,
            allow_insecure: true,
        })
    }

    /// URL fields must be non-empty
    fn url(&self, prefix: &str, suffix: EnvSuffix) -> Result<String> {
        self.env.require(&EnvKey::new(prefix, suffix))
    }

    /// Credentials only need to be present; an empty password is valid
    fn credentials(&self, prefix: &str) -> Result<Credentials> {
        let username = self.env.require_present(&EnvKey::new(prefix, EnvSuffix::Username))?;
        let password = self.env.require_present(&EnvKey::new(prefix, EnvSuffix::Password))?;
        Ok(Credentials { username, password })
    }
}

/// [`RepositoryResolver::from_env_authenticated`] against the process environment
pub fn from_env_authenticated(prefix: &str) -> Result<MavenRepository> {
    RepositoryResolver::from_process().from_env_authenticated(prefix)
}

/// [`RepositoryResolver::from_env_public`] against the process environment
pub fn from_env_public(prefix: &str) -> Result<MavenRepository> {
    RepositoryResolver::from_process().from_env_public(prefix)
}

/// [`RepositoryResolver::from_env_for_publishing`] against the process environment
pub fn from_env_for_publishing(prefix: &str, is_snapshot: bool) -> Result<PublishRepository> {
    RepositoryResolver::from_process().from_env_for_publishing(prefix, is_snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use crate::error::RepoError;

    fn acme() -> MapEnv {
        MapEnv::new()
            .with("ACME_url", "https://repo.acme.test")
            .with("ACME_username", "bob")
            .with("ACME_password", "secret")
    }

    fn missing(err: RepoError) -> String {
        match err {
            RepoError::MissingConfiguration { variable } => variable,
            other => panic!("expected MissingConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_authenticated() {
        let resolver = RepositoryResolver::new(acme());
        let repo = resolver.from_env_authenticated("ACME").unwrap();

        assert_eq!(repo.url, "https://repo.acme.test");
        assert_eq!(repo.credentials, Some(Credentials::new("bob", "secret")));
        assert!(repo.allow_insecure);
    }

    #[test]
    fn test_authenticated_check_order() {
        let resolver = RepositoryResolver::new(MapEnv::new());
        assert_eq!(missing(resolver.from_env_authenticated("ACME").unwrap_err()), "ACME_url");

        let resolver = RepositoryResolver::new(MapEnv::new().with("ACME_url", "https://repo.acme.test"));
        assert_eq!(missing(resolver.from_env_authenticated("ACME").unwrap_err()), "ACME_username");

        let mut env = acme();
        env.remove("ACME_password");
        let resolver = RepositoryResolver::new(env);
        assert_eq!(missing(resolver.from_env_authenticated("ACME").unwrap_err()), "ACME_password");
    }

    #[test]
    fn test_public() {
        let resolver = RepositoryResolver::new(MapEnv::new().with("PUB_url", "http://mirror.local/maven"));
        let repo = resolver.from_env_public("PUB").unwrap();

        assert_eq!(repo.url, "http://mirror.local/maven");
        assert!(repo.credentials.is_none());
        assert!(repo.allow_insecure);
    }

    #[test]
    fn test_public_missing_url() {
        // Credentials alone do not satisfy a public lookup
        let env = MapEnv::new().with("PUB_username", "u").with("PUB_password", "p");
        let resolver = RepositoryResolver::new(env);

        assert_eq!(missing(resolver.from_env_public("PUB").unwrap_err()), "PUB_url");
    }

    #[test]
    fn test_empty_url_is_missing() {
        let resolver = RepositoryResolver::new(MapEnv::new().with("PUB_url", ""));
        assert_eq!(missing(resolver.from_env_public("PUB").unwrap_err()), "PUB_url");
    }

    #[test]
    fn test_relative_url_kept_verbatim() {
        let env = MapEnv::new()
            .with("ACME_url", "repo.acme.test/maven")
            .with("ACME_username", "bob")
            .with("ACME_password", "secret")
            .with("LOCAL_url", "../local-repo");
        let resolver = RepositoryResolver::new(env);

        assert_eq!(resolver.from_env_authenticated("ACME").unwrap().url, "repo.acme.test/maven");
        assert_eq!(resolver.from_env_public("LOCAL").unwrap().url, "../local-repo");
    }

    #[test]
    fn test_empty_credentials_accepted() {
        let env = MapEnv::new()
            .with("ACME_url", "https://repo.acme.test")
            .with("ACME_username", "bob")
            .with("ACME_password", "")
            .with("ACME_releases", "https://repo.acme.test/releases");
        let resolver = RepositoryResolver::new(env);

        let repo = resolver.from_env_authenticated("ACME").unwrap();
        assert_eq!(repo.credentials, Some(Credentials::new("bob", "")));

        let publish = resolver.from_env_for_publishing("ACME", false).unwrap();
        assert_eq!(publish.credentials.password, "");
    }

    #[test]
    fn test_env_accessor() {
        let resolver = RepositoryResolver::new(acme());
        assert_eq!(resolver.env().var("ACME_username"), Some("bob".to_string()));
    }

    #[test]
    fn test_publishing_selects_channel() {
        let env = MapEnv::new()
            .with("DEPLOY_snapshots", "https://repo.test/snapshots")
            .with("DEPLOY_releases", "https://repo.test/releases")
            .with("DEPLOY_username", "ci")
            .with("DEPLOY_password", "token");
        let resolver = RepositoryResolver::new(env);

        let snapshot = resolver.from_env_for_publishing("DEPLOY", true).unwrap();
        assert_eq!(snapshot.url, "https://repo.test/snapshots");
        assert_eq!(snapshot.channel, PublishChannel::Snapshots);
        assert_eq!(snapshot.credentials, Credentials::new("ci", "token"));
        assert!(snapshot.allow_insecure);

        let release = resolver.from_env_for_publishing("DEPLOY", false).unwrap();
        assert_eq!(release.url, "https://repo.test/releases");
        assert_eq!(release.channel, PublishChannel::Releases);
    }

    #[test]
    fn test_publishing_ignores_unselected_channel() {
        let env = MapEnv::new()
            .with("DEPLOY_releases", "https://repo.test/releases")
            .with("DEPLOY_username", "ci")
            .with("DEPLOY_password", "token");
        let resolver = RepositoryResolver::new(env);

        assert!(resolver.from_env_for_publishing("DEPLOY", false).is_ok());
        assert_eq!(missing(resolver.from_env_for_publishing("DEPLOY", true).unwrap_err()), "DEPLOY_snapshots");
    }

    #[test]
    fn test_publishing_check_order() {
        let resolver = RepositoryResolver::new(MapEnv::new().with("DEPLOY_snapshots", "https://repo.test/s"));
        assert_eq!(missing(resolver.from_env_for_publishing("DEPLOY", true).unwrap_err()), "DEPLOY_username");

        let resolver = RepositoryResolver::new(
            MapEnv::new()
                .with("DEPLOY_snapshots", "https://repo.test/s")
                .with("DEPLOY_username", "ci"),
        );
        assert_eq!(missing(resolver.from_env_for_publishing("DEPLOY", true).unwrap_err()), "DEPLOY_password");
    }

    #[test]
    fn test_mirrors_ignore_environment() {
        let resolver = RepositoryResolver::new(MapEnv::new());

        assert_eq!(resolver.public_mirror(MirrorVendor::Aliyun), mirror::public_mirror(MirrorVendor::Aliyun));
        assert_eq!(resolver.plugin_mirror(MirrorVendor::Upstream).url, "https://plugins.gradle.org/m2/");
    }
}
