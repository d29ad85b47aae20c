//! Notice urgency value object.
//!
//! # Invariants
//! - Only `info|warning|error|success` tokens are accepted.
//! - `Display` yields the raw token used in `notice-{urgency}` classes.

use crate::model::NoticeConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Token for informational notices.
pub const URGENCY_INFO: &str = "info";
/// Token for warning notices.
pub const URGENCY_WARNING: &str = "warning";
/// Token for error notices.
pub const URGENCY_ERROR: &str = "error";
/// Token for success notices.
pub const URGENCY_SUCCESS: &str = "success";

const SUPPORTED_URGENCIES: &[&str] = &[
    URGENCY_INFO,
    URGENCY_WARNING,
    URGENCY_ERROR,
    URGENCY_SUCCESS,
];

/// Presentation severity of a standard notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeUrgency {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl NoticeUrgency {
    /// Raw token rendered into markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => URGENCY_INFO,
            Self::Warning => URGENCY_WARNING,
            Self::Error => URGENCY_ERROR,
            Self::Success => URGENCY_SUCCESS,
        }
    }

    /// Returns supported urgency tokens.
    pub fn supported() -> &'static [&'static str] {
        SUPPORTED_URGENCIES
    }
}

impl FromStr for NoticeUrgency {
    type Err = NoticeConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            URGENCY_INFO => Ok(Self::Info),
            URGENCY_WARNING => Ok(Self::Warning),
            URGENCY_ERROR => Ok(Self::Error),
            URGENCY_SUCCESS => Ok(Self::Success),
            other => Err(NoticeConfigError::InvalidUrgency(other.to_string())),
        }
    }
}

impl Display for NoticeUrgency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
