use serde::Serialize;

use super::descriptor::{MavenRepository, PublishRepository};
use super::mirror::MirrorVendor;
use super::resolver::RepositoryResolver;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::Result;

/// Ordered collection of repositories declared by a build
///
/// Repositories are kept in declaration order (first = highest priority).
/// A call that fails leaves the handler untouched.
#[derive(Debug, Default, Serialize)]
pub struct RepositoryHandler<E = ProcessEnv> {
    #[serde(skip)]
    resolver: RepositoryResolver<E>,

    repositories: Vec<MavenRepository>,

    #[serde(rename = "publishing", skip_serializing_if = "Vec::is_empty")]
    publish_repositories: Vec<PublishRepository>,
}

impl RepositoryHandler<ProcessEnv> {
    pub fn new() -> Self {
        Self::with_resolver(RepositoryResolver::from_process())
    }
}

impl<E: EnvSource> RepositoryHandler<E> {
    pub fn with_resolver(resolver: RepositoryResolver<E>) -> Self {
        Self {
            resolver,
            repositories: Vec::new(),
            publish_repositories: Vec::new(),
        }
    }

    /// Add a repository (lowest priority so far)
    pub fn add(&mut self, repository: MavenRepository) -> &mut Self {
        self.repositories.push(repository);
        self
    }

    pub fn mirror(&mut self, vendor: MirrorVendor) -> &mut Self {
        let repo = self.resolver.public_mirror(vendor);
        self.add(repo)
    }

    pub fn mirror_plugin(&mut self, vendor: MirrorVendor) -> &mut Self {
        let repo = self.resolver.plugin_mirror(vendor);
        self.add(repo)
    }

    pub fn maven_aliyun(&mut self) -> &mut Self {
        self.mirror(MirrorVendor::Aliyun)
    }

    pub fn maven_aliyun_plugin(&mut self) -> &mut Self {
        self.mirror_plugin(MirrorVendor::Aliyun)
    }

    pub fn maven_env_auth(&mut self, prefix: &str) -> Result<&mut Self> {
        let repo = self.resolver.from_env_authenticated(prefix)?;
        Ok(self.add(repo))
    }

    pub fn maven_env_public(&mut self, prefix: &str) -> Result<&mut Self> {
        let repo = self.resolver.from_env_public(prefix)?;
        Ok(self.add(repo))
    }

    pub fn maven_publish_env(&mut self, prefix: &str, is_snapshot: bool) -> Result<&mut Self> {
        let repo = self.resolver.from_env_for_publishing(prefix, is_snapshot)?;
        self.publish_repositories.push(repo);
        Ok(self)
    }

    pub fn repositories(&self) -> &[MavenRepository] {
        &self.repositories
    }

    pub fn publish_repositories(&self) -> &[PublishRepository] {
        &self.publish_repositories
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty() && self.publish_repositories.is_empty()
    }

    /// Serialize the declared repositories for the host's configuration layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
