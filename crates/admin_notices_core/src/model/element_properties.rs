//! Namespaced DOM attributes handed to render callbacks.
//!
//! # Invariants
//! - Attribute names follow `data-stellarwp-{namespace}-*`.
//! - Attribute values are HTML-attribute escaped.

use crate::model::notice::AdminNotice;
use crate::html::escape_attr;

/// What a custom close control does after recording the dismissal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloseBehavior {
    /// Record the dismissal and fade the notice out.
    #[default]
    Hide,
    /// Record the dismissal only.
    Clear,
}

impl CloseBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Clear => "clear",
        }
    }
}

/// Precomputed attribute strings for one notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeElementProperties {
    namespace: String,
    /// `data-stellarwp-{ns}-notice-id='{id}'`
    pub id_attribute: String,
    /// `data-stellarwp-{ns}-location='{location}'`, when a location is set.
    pub custom_location_attribute: Option<String>,
    /// Id attribute plus location attribute, space separated.
    pub custom_wrapper_attributes: String,
    /// `data-stellarwp-{ns}-close-notice='{id}'`
    pub custom_closer_attribute: String,
}

impl NoticeElementProperties {
    pub fn new(notice: &AdminNotice, namespace: &str) -> Self {
        let id = escape_attr(notice.id());
        let id_attribute = format!("data-stellarwp-{namespace}-notice-id='{id}'");
        let custom_location_attribute = notice
            .notice_location()
            .map(|location| format!("data-stellarwp-{namespace}-location='{location}'"));
        let custom_wrapper_attributes = match &custom_location_attribute {
            Some(location) => format!("{id_attribute} {location}"),
            None => id_attribute.clone(),
        };

        Self {
            namespace: namespace.to_string(),
            custom_closer_attribute: format!("data-stellarwp-{namespace}-close-notice='{id}'"),
            id_attribute,
            custom_location_attribute,
            custom_wrapper_attributes,
        }
    }

    pub fn custom_close_behavior_attribute(&self, behavior: CloseBehavior) -> String {
        format!(
            "data-stellarwp-{}-close-notice-behavior='{}'",
            self.namespace,
            behavior.as_str()
        )
    }

    /// Both attributes a custom close button needs.
    pub fn custom_closer_attributes(&self, behavior: CloseBehavior) -> String {
        format!(
            "{} {}",
            self.custom_closer_attribute,
            self.custom_close_behavior_attribute(behavior)
        )
    }
}
