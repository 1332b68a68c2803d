use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    // Environment errors
    #[error("Environment variable `{variable}` is not set")]
    MissingConfiguration { variable: String },

    // Host attachment errors
    #[error("Unsupported target type: {observed}. Only Project and Settings are supported")]
    UnsupportedTarget { observed: String },

    // Serialization errors
    #[error("Failed to serialize repositories: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RepoError {
    /// Name of the environment variable this error is about, if any
    pub fn variable(&self) -> Option<&str> {
        match self {
            RepoError::MissingConfiguration { variable } => Some(variable.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoError>;
