//! Environment lookup for repository configuration
//!
//! Every value the resolver needs comes from an environment variable named
//! `{prefix}_{suffix}`. Lookups go through [`EnvSource`] so callers can hand in
//! the process environment, a snapshot taken by the host, or a fixed map in
//! tests.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

use crate::error::{RepoError, Result};

/// Variable suffixes understood by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvSuffix {
    Url,
    Username,
    Password,
    Snapshots,
    Releases,
}

impl EnvSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvSuffix::Url => "url",
            EnvSuffix::Username => "username",
            EnvSuffix::Password => "password",
            EnvSuffix::Snapshots => "snapshots",
            EnvSuffix::Releases => "releases",
        }
    }
}

/// Fully qualified environment variable name: `{prefix}_{suffix}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvKey(String);

impl EnvKey {
    pub fn new(prefix: &str, suffix: EnvSuffix) -> Self {
        Self(format!("{}_{}", prefix, suffix.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A read-only key/value view of an environment
pub trait EnvSource {
    /// Raw value of `name`, or `None` when the variable is not set
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `key`, treating an empty value as unset
    fn lookup(&self, key: &EnvKey) -> Option<String> {
        let value = self.var(key.as_str()).filter(|s| !s.is_empty());
        log::trace!("env lookup {} -> {}", key, if value.is_some() { "set" } else { "unset" });
        value
    }

    /// Value of `key`, failing with [`RepoError::MissingConfiguration`] when unset or empty
    fn require(&self, key: &EnvKey) -> Result<String> {
        self.lookup(key).ok_or_else(|| missing(key))
    }

    /// Value of `key`, failing only when it is not set at all; empty values pass
    fn require_present(&self, key: &EnvKey) -> Result<String> {
        let value = self.var(key.as_str());
        log::trace!("env lookup {} -> {}", key, if value.is_some() { "set" } else { "unset" });
        value.ok_or_else(|| missing(key))
    }
}

fn missing(key: &EnvKey) -> RepoError {
    RepoError::MissingConfiguration {
        variable: key.to_string(),
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values are treated as unset
        std::env::var(name).ok()
    }
}

/// A fixed, in-memory environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: IndexMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.shift_remove(name)
    }

    /// Snapshot every variable of the current process whose name starts with `prefix`
    pub fn capture(prefix: &str) -> Self {
        std::env::vars()
            .filter(|(name, _)| name.starts_with(prefix))
            .collect()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
