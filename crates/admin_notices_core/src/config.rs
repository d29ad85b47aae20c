//! Library configuration.
//!
//! # Invariants
//! - `namespace` is non-blank lowercase ASCII (`a-z`, `0-9`, `-`, `_`).
//! - `assets_url` is non-blank; a trailing `/` is ignored.

use crate::model::NoticeConfigError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host-facing configuration for one `AdminNotices` instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticesConfig {
    /// Scopes DOM attributes, asset handles and stored dismissals.
    pub namespace: String,
    /// Public URL the library's `resources/` directory is served from.
    pub assets_url: String,
}

/// Config load failures.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(NoticeConfigError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse notices config: {err}"),
            Self::Invalid(err) => write!(f, "invalid notices config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<NoticeConfigError> for ConfigError {
    fn from(value: NoticeConfigError) -> Self {
        Self::Invalid(value)
    }
}

impl NoticesConfig {
    /// Creates and validates a config.
    pub fn new(
        namespace: impl Into<String>,
        assets_url: impl Into<String>,
    ) -> Result<Self, NoticeConfigError> {
        let config = Self {
            namespace: namespace.into(),
            assets_url: assets_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses `{"namespace": ..., "assets_url": ...}` and validates it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NoticeConfigError> {
        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            return Err(NoticeConfigError::EmptyNamespace);
        }
        if namespace != self.namespace || !is_valid_namespace(namespace) {
            return Err(NoticeConfigError::InvalidNamespace(self.namespace.clone()));
        }
        if self.assets_url.trim().is_empty() {
            return Err(NoticeConfigError::EmptyAssetsUrl);
        }
        Ok(())
    }

    /// URL of a file under the library's `resources/` directory.
    pub fn resource_url(&self, file: &str) -> String {
        format!(
            "{}/resources/{}",
            self.assets_url.trim().trim_end_matches('/'),
            file
        )
    }
}

fn is_valid_namespace(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
