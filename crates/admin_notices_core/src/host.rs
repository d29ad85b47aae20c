//! Host environment contracts.
//!
//! # Responsibility
//! - Describe the ambient request state the decision engine reads.
//! - Describe the asset pipeline notices enqueue into.
//!
//! # Invariants
//! - Core never reads global request state; everything flows through
//!   `AdminContext`.
//! - Context lookup failures are environment errors, not negative results.

use crate::model::asset::{Script, Style};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::OffsetDateTime;

/// Missing host context during the admin render phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    ScreenUnavailable,
    UrlUnavailable,
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScreenUnavailable => write!(f, "current admin screen is not available"),
            Self::UrlUnavailable => write!(f, "current admin url is not available"),
        }
    }
}

impl Error for ContextError {}

/// Property snapshot of the current admin screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenDescriptor {
    properties: BTreeMap<String, Value>,
}

impl ScreenDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }
}

/// Read-only view of the host request.
pub trait AdminContext {
    /// Current time; compared in UTC.
    fn now(&self) -> OffsetDateTime;

    fn current_user_can(&self, capability: &str, args: &[Value]) -> bool;

    fn current_screen(&self) -> Result<ScreenDescriptor, ContextError>;

    /// Full admin URL of the current request.
    fn current_admin_url(&self) -> Result<String, ContextError>;

    /// Epoch seconds at which the active user dismissed `notice_id`.
    fn dismissed_at(&self, _namespace: &str, _notice_id: &str) -> Option<i64> {
        None
    }
}

/// Host asset pipeline.
pub trait AssetHost {
    fn enqueue_script(&mut self, handle: &str, script: &Script);
    fn enqueue_style(&mut self, handle: &str, style: &Style);
}

/// Deterministic `AdminContext` built from fixed values.
#[derive(Debug, Clone)]
pub struct FixedAdminContext {
    now: OffsetDateTime,
    capabilities: BTreeSet<(String, String)>,
    screen: Option<ScreenDescriptor>,
    admin_url: Option<String>,
    dismissals: BTreeMap<(String, String), i64>,
}

impl FixedAdminContext {
    /// Context at the Unix epoch with no user grants, screen or URL.
    pub fn new() -> Self {
        Self {
            now: OffsetDateTime::UNIX_EPOCH,
            capabilities: BTreeSet::new(),
            screen: None,
            admin_url: None,
            dismissals: BTreeMap::new(),
        }
    }

    pub fn at(mut self, now: OffsetDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn grant(self, capability: impl Into<String>) -> Self {
        self.grant_with_args(capability, Vec::new())
    }

    /// Grants `capability` only when checked with exactly `args`.
    pub fn grant_with_args(mut self, capability: impl Into<String>, args: Vec<Value>) -> Self {
        self.capabilities
            .insert((capability.into(), args_key(&args)));
        self
    }

    pub fn screen(mut self, screen: ScreenDescriptor) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn admin_url(mut self, url: impl Into<String>) -> Self {
        self.admin_url = Some(url.into());
        self
    }

    pub fn dismissed(
        mut self,
        namespace: impl Into<String>,
        notice_id: impl Into<String>,
        at: i64,
    ) -> Self {
        self.dismissals
            .insert((namespace.into(), notice_id.into()), at);
        self
    }
}

impl Default for FixedAdminContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminContext for FixedAdminContext {
    fn now(&self) -> OffsetDateTime {
        self.now
    }

    fn current_user_can(&self, capability: &str, args: &[Value]) -> bool {
        self.capabilities
            .contains(&(capability.to_string(), args_key(args)))
    }

    fn current_screen(&self) -> Result<ScreenDescriptor, ContextError> {
        self.screen.clone().ok_or(ContextError::ScreenUnavailable)
    }

    fn current_admin_url(&self) -> Result<String, ContextError> {
        self.admin_url.clone().ok_or(ContextError::UrlUnavailable)
    }

    fn dismissed_at(&self, namespace: &str, notice_id: &str) -> Option<i64> {
        self.dismissals
            .get(&(namespace.to_string(), notice_id.to_string()))
            .copied()
    }
}

fn args_key(args: &[Value]) -> String {
    Value::Array(args.to_vec()).to_string()
}

/// One asset handed to a `RecordingAssetHost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnqueuedAsset {
    Script { handle: String, script: Script },
    Style { handle: String, style: Style },
}

/// `AssetHost` that records enqueue calls in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingAssetHost {
    pub enqueued: Vec<EnqueuedAsset>,
}

impl RecordingAssetHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handles(&self) -> Vec<&str> {
        self.enqueued
            .iter()
            .map(|asset| match asset {
                EnqueuedAsset::Script { handle, .. } => handle.as_str(),
                EnqueuedAsset::Style { handle, .. } => handle.as_str(),
            })
            .collect()
    }
}

impl AssetHost for RecordingAssetHost {
    fn enqueue_script(&mut self, handle: &str, script: &Script) {
        self.enqueued.push(EnqueuedAsset::Script {
            handle: handle.to_string(),
            script: script.clone(),
        });
    }

    fn enqueue_style(&mut self, handle: &str, style: &Style) {
        self.enqueued.push(EnqueuedAsset::Style {
            handle: handle.to_string(),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminContext, ContextError, FixedAdminContext, ScreenDescriptor};
    use serde_json::json;

    #[test]
    fn missing_screen_and_url_are_errors() {
        let ctx = FixedAdminContext::new();
        assert_eq!(
            ctx.current_screen().expect_err("no screen configured"),
            ContextError::ScreenUnavailable
        );
        assert_eq!(
            ctx.current_admin_url().expect_err("no url configured"),
            ContextError::UrlUnavailable
        );
    }

    #[test]
    fn grants_are_argument_sensitive() {
        let ctx = FixedAdminContext::new()
            .grant("manage_options")
            .grant_with_args("edit_post", vec![json!(3)]);

        assert!(ctx.current_user_can("manage_options", &[]));
        assert!(!ctx.current_user_can("manage_options", &[json!(1)]));
        assert!(ctx.current_user_can("edit_post", &[json!(3)]));
        assert!(!ctx.current_user_can("edit_post", &[]));
    }

    #[test]
    fn dismissals_are_scoped_by_namespace() {
        let ctx = FixedAdminContext::new().dismissed("acme", "promo", 1_700_000_000);

        assert_eq!(ctx.dismissed_at("acme", "promo"), Some(1_700_000_000));
        assert_eq!(ctx.dismissed_at("other", "promo"), None);
    }

    #[test]
    fn screen_descriptor_reads_properties() {
        let screen = ScreenDescriptor::new()
            .with("base", "dashboard")
            .with("is_network", false);

        assert_eq!(screen.get("base"), Some(&json!("dashboard")));
        assert_eq!(screen.get("is_network"), Some(&json!(false)));
        assert_eq!(screen.get("post_type"), None);
    }
}
