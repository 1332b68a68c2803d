use serde::{Deserialize, Serialize};
use std::fmt;

use crate::env::EnvSuffix;

/// Username/password pair for an authenticated repository
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A repository used to resolve dependencies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MavenRepository {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    #[serde(rename = "allowInsecureProtocol", default)]
    pub allow_insecure: bool,
}

impl MavenRepository {
    /// Repository without credentials that only accepts secure protocols
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: None,
            allow_insecure: false,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.allow_insecure = allow;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Which of the two publishing endpoints a build targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishChannel {
    Snapshots,
    Releases,
}

impl PublishChannel {
    /// Snapshots for versions ending in `-SNAPSHOT`, releases otherwise
    pub fn for_version(version: &str) -> Self {
        if version.ends_with("-SNAPSHOT") {
            PublishChannel::Snapshots
        } else {
            PublishChannel::Releases
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, PublishChannel::Snapshots)
    }

    pub(crate) fn suffix(&self) -> EnvSuffix {
        match self {
            PublishChannel::Snapshots => EnvSuffix::Snapshots,
            PublishChannel::Releases => EnvSuffix::Releases,
        }
    }
}

impl From<bool> for PublishChannel {
    fn from(is_snapshot: bool) -> Self {
        if is_snapshot {
            PublishChannel::Snapshots
        } else {
            PublishChannel::Releases
        }
    }
}

impl fmt::Display for PublishChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().as_str())
    }
}

/// A repository artifacts are published to
///
/// Holds only the URL of the selected channel; the other channel's variable is
/// never read, so it may be left unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishRepository {
    /// URL of the selected channel
    pub url: String,

    pub channel: PublishChannel,

    pub credentials: Credentials,

    #[serde(rename = "allowInsecureProtocol", default)]
    pub allow_insecure: bool,
}
