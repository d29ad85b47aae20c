//! Notice domain model.
//!
//! # Responsibility
//! - Define the `AdminNotice` entity and the value objects it is built from.
//! - Reject invalid configuration at construction/setter time.
//!
//! # Invariants
//! - Value objects are immutable after construction.
//! - Configuration errors are never coerced into a "not shown" outcome.

pub mod asset;
pub mod capability;
pub mod date;
pub mod element_properties;
pub mod location;
pub mod notice;
pub mod screen_condition;
pub mod urgency;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invalid notice configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeConfigError {
    EmptyNoticeId,
    InvalidUrgency(String),
    InvalidLocation(String),
    EmptyCapability,
    TooManyCapabilityArgs { capability: String, count: usize },
    EmptyScreenCondition,
    UnknownScreenProperty(String),
    InvalidScreenRegex { pattern: String, reason: String },
    InvalidDate(String),
    EmptyNamespace,
    InvalidNamespace(String),
    EmptyAssetsUrl,
}

impl Display for NoticeConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNoticeId => write!(f, "notice id must not be empty"),
            Self::InvalidUrgency(value) => write!(
                f,
                "invalid urgency: {value} (expected info|warning|error|success)"
            ),
            Self::InvalidLocation(value) => write!(
                f,
                "invalid location: {value} (expected above_header|below_header|inline)"
            ),
            Self::EmptyCapability => write!(f, "capability name must not be empty"),
            Self::TooManyCapabilityArgs { capability, count } => write!(
                f,
                "capability `{capability}` accepts at most 2 arguments, got {count}"
            ),
            Self::EmptyScreenCondition => write!(f, "screen condition must not be empty"),
            Self::UnknownScreenProperty(value) => {
                write!(f, "screen condition references unknown screen property: {value}")
            }
            Self::InvalidScreenRegex { pattern, reason } => {
                write!(f, "screen condition regex `{pattern}` is invalid: {reason}")
            }
            Self::InvalidDate(value) => write!(f, "date is invalid: {value}"),
            Self::EmptyNamespace => write!(f, "Namespace must be provided"),
            Self::InvalidNamespace(value) => write!(
                f,
                "namespace is invalid: {value} (expected lowercase letters, digits, `-` or `_`)"
            ),
            Self::EmptyAssetsUrl => write!(f, "assets url must not be empty"),
        }
    }
}

impl Error for NoticeConfigError {}
