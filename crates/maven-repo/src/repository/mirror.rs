use serde::{Deserialize, Serialize};

use super::descriptor::MavenRepository;

/// Known public mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorVendor {
    /// Alibaba Cloud mirror
    Aliyun,
    /// Maven Central and the Gradle Plugin Portal themselves
    Upstream,
}

impl MirrorVendor {
    pub fn public_url(&self) -> &'static str {
        match self {
            MirrorVendor::Aliyun => "https://maven.aliyun.com/repository/public",
            MirrorVendor::Upstream => "https://repo.maven.apache.org/maven2/",
        }
    }

    pub fn plugin_url(&self) -> &'static str {
        match self {
            MirrorVendor::Aliyun => "https://maven.aliyun.com/repository/gradle-plugin",
            MirrorVendor::Upstream => "https://plugins.gradle.org/m2/",
        }
    }
}

/// Mirror for general packages
pub fn public_mirror(vendor: MirrorVendor) -> MavenRepository {
    MavenRepository::new(vendor.public_url())
}

/// Mirror for build tool plugins
pub fn plugin_mirror(vendor: MirrorVendor) -> MavenRepository {
    MavenRepository::new(vendor.plugin_url())
}
