use std::fmt;

use crate::error::{RepoError, Result};

pub const PLUGIN_ID: &str = "io.github.bitlumen.gradle.maven-repo-plugin";
pub const PLUGIN_DISPLAY_NAME: &str = "Gradle Maven Repository Plugin";

const PROJECT_TYPE: &str = "org.gradle.api.Project";
const SETTINGS_TYPE: &str = "org.gradle.api.initialization.Settings";

/// The configuration roots a plugin may be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Project-level build script
    Project,
    /// Settings-level build script
    Settings,
}

impl TargetKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            TargetKind::Project => PROJECT_TYPE,
            TargetKind::Settings => SETTINGS_TYPE,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Project => f.write_str("Project"),
            TargetKind::Settings => f.write_str("Settings"),
        }
    }
}

/// A host context that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    kind: TargetKind,
}

impl HostTarget {
    pub fn project() -> Self {
        Self { kind: TargetKind::Project }
    }

    pub fn settings() -> Self {
        Self { kind: TargetKind::Settings }
    }

    /// Validate the type the host reports for the object it attaches us to
    ///
    /// Accepts fully qualified and simple type names.
    pub fn from_type_name(name: &str) -> Result<Self> {
        let kind = match name {
            PROJECT_TYPE | "Project" => TargetKind::Project,
            SETTINGS_TYPE | "Settings" => TargetKind::Settings,
            _ => {
                return Err(RepoError::UnsupportedTarget {
                    observed: name.to_string(),
                })
            }
        };
        Ok(Self { kind })
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }
}

impl From<TargetKind> for HostTarget {
    fn from(kind: TargetKind) -> Self {
        Self { kind }
    }
}

impl TryFrom<&str> for HostTarget {
    type Error = RepoError;

    fn try_from(name: &str) -> Result<Self> {
        Self::from_type_name(name)
    }
}

/// Something the host can apply to a validated target
pub trait Plugin {
    fn id(&self) -> &str;

    fn apply(&self, target: &HostTarget) -> Result<()>;

    /// Validate `type_name` and apply to the resulting target
    fn attach(&self, type_name: &str) -> Result<HostTarget> {
        let target = HostTarget::from_type_name(type_name).inspect_err(|e| {
            log::error!("Cannot apply {}: {}", self.id(), e);
        })?;
        self.apply(&target)?;
        Ok(target)
    }
}

/// The repository plugin itself
///
/// Applying it changes nothing; build scripts call the repository functions
/// explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryPlugin;

impl Plugin for RepositoryPlugin {
    fn id(&self) -> &str {
        PLUGIN_ID
    }

    fn apply(&self, target: &HostTarget) -> Result<()> {
        log::debug!("{} applied to {}", PLUGIN_ID, target.kind());
        Ok(())
    }
}
