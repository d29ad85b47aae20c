//! Screen conditions restricting notices to specific admin pages.
//!
//! # Responsibility
//! - Classify one admission rule once at construction time.
//! - Validate regex patterns and screen property names eagerly.
//!
//! # Invariants
//! - A `~pattern~flags` string is a regex; any other string is a URL substring.
//! - Screen maps only reference public screen properties and are never empty.

use crate::model::NoticeConfigError;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::collections::BTreeMap;

const REGEX_DELIMITER: char = '~';
/// `u` is accepted for compatibility; matching is always Unicode-aware.
const REGEX_FLAGS: &str = "imsxuU";

/// Public screen descriptor properties a condition may reference.
pub const SCREEN_PROPERTIES: &[&str] = &[
    "action",
    "base",
    "id",
    "is_block_editor",
    "is_network",
    "is_user",
    "parent_base",
    "parent_file",
    "post_type",
    "taxonomy",
];

/// One classified admission rule.
#[derive(Debug, Clone)]
pub enum ScreenCondition {
    /// Compiled `~pattern~flags` matched against the current admin URL.
    Regex { raw: String, pattern: Regex },
    /// Literal substring of the current admin URL.
    Url(String),
    /// Screen property map; every pair must match.
    Screen(BTreeMap<String, Value>),
}

impl ScreenCondition {
    /// Classifies a string condition as regex or URL substring.
    ///
    /// # Errors
    /// - `EmptyScreenCondition` for a blank string.
    /// - `InvalidScreenRegex` when a delimited pattern does not compile.
    pub fn new(condition: impl Into<String>) -> Result<Self, NoticeConfigError> {
        let raw = condition.into();
        if raw.is_empty() {
            return Err(NoticeConfigError::EmptyScreenCondition);
        }

        match split_delimited(&raw) {
            Some((body, flags)) => {
                let pattern = compile(body, flags).map_err(|err| {
                    NoticeConfigError::InvalidScreenRegex {
                        pattern: raw.clone(),
                        reason: err.to_string(),
                    }
                })?;
                Ok(Self::Regex { raw, pattern })
            }
            None => Ok(Self::Url(raw)),
        }
    }

    /// Builds a screen property condition.
    ///
    /// # Errors
    /// - `EmptyScreenCondition` for an empty map.
    /// - `UnknownScreenProperty` when a key is not in [`SCREEN_PROPERTIES`].
    pub fn screen<K, I>(properties: I) -> Result<Self, NoticeConfigError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let properties: BTreeMap<String, Value> = properties
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        if properties.is_empty() {
            return Err(NoticeConfigError::EmptyScreenCondition);
        }
        if let Some(unknown) = properties
            .keys()
            .find(|key| !SCREEN_PROPERTIES.contains(&key.as_str()))
        {
            return Err(NoticeConfigError::UnknownScreenProperty(unknown.clone()));
        }
        Ok(Self::Screen(properties))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    /// Raw string form; `None` for screen maps.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Regex { raw, .. } => Some(raw),
            Self::Url(raw) => Some(raw),
            Self::Screen(_) => None,
        }
    }
}

impl PartialEq for ScreenCondition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Regex { raw: a, .. }, Self::Regex { raw: b, .. }) => a == b,
            (Self::Url(a), Self::Url(b)) => a == b,
            (Self::Screen(a), Self::Screen(b)) => a == b,
            _ => false,
        }
    }
}

/// Splits `~body~flags` into its parts when the flags are all supported.
fn split_delimited(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(REGEX_DELIMITER)?;
    let close = rest.rfind(REGEX_DELIMITER)?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    if flags.chars().all(|flag| REGEX_FLAGS.contains(flag)) {
        Some((body, flags))
    } else {
        None
    }
}

fn compile(body: &str, flags: &str) -> Result<Regex, regex::Error> {
    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'u' => builder.unicode(true),
            'U' => builder.swap_greed(true),
            _ => &mut builder,
        };
    }
    builder.build()
}
