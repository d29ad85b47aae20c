//! Composition root wiring registry, decision engine, renderer and assets.
//!
//! # Responsibility
//! - Register and remove notices for one namespace.
//! - Run the display and enqueue passes during the host's admin hooks.
//!
//! # Invariants
//! - Each instance owns its registry; no process-global state.
//! - The namespace is validated once, at construction.

use crate::config::NoticesConfig;
use crate::host::{AdminContext, AssetHost, ContextError};
use crate::model::asset::Script;
use crate::model::notice::{AdminNotice, NoticeContent};
use crate::model::NoticeConfigError;
use crate::repo::notice_registry::{InMemoryNoticeRegistry, NoticeRegistry, RegistryError};
use crate::service::display::{DisplayError, DisplayNoticesInAdmin, DisplaySummary};
use crate::service::enqueue::EnqueueNoticesScriptsAndStyles;
use crate::service::render::{RenderAdminNotice, RenderError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// File name of the dismissal script under `resources/`.
pub const DISMISS_SCRIPT_FILE: &str = "admin-notices.js";

const DISMISS_SCRIPT_DEPENDENCIES: &[&str] = &["jquery", "wp-data", "wp-preferences"];

/// Failures surfaced by the facade.
#[derive(Debug)]
pub enum NoticesError {
    Config(NoticeConfigError),
    Registry(RegistryError),
    Render(RenderError),
    Display(DisplayError),
}

impl Display for NoticesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Registry(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::Display(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoticesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Display(err) => Some(err),
        }
    }
}

impl From<NoticeConfigError> for NoticesError {
    fn from(value: NoticeConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RegistryError> for NoticesError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<RenderError> for NoticesError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<DisplayError> for NoticesError {
    fn from(value: DisplayError) -> Self {
        Self::Display(value)
    }
}

/// Admin notices for one namespace.
pub struct AdminNotices<R: NoticeRegistry = InMemoryNoticeRegistry> {
    config: NoticesConfig,
    registry: R,
}

impl AdminNotices<InMemoryNoticeRegistry> {
    /// Creates an instance backed by a fresh in-memory registry.
    pub fn new(config: NoticesConfig) -> Result<Self, NoticesError> {
        Self::with_registry(config, InMemoryNoticeRegistry::new())
    }
}

impl<R: NoticeRegistry> AdminNotices<R> {
    pub fn with_registry(config: NoticesConfig, registry: R) -> Result<Self, NoticesError> {
        config.validate()?;
        info!(
            "event=notices_init module=notices status=ok namespace={}",
            config.namespace
        );
        Ok(Self { config, registry })
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn config(&self) -> &NoticesConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Registers a notice and returns it for builder-style configuration.
    ///
    /// # Errors
    /// - `Config` for a blank id.
    /// - `Registry(Collision)` when `id` is already registered.
    pub fn show(
        &mut self,
        id: impl Into<String>,
        content: impl Into<NoticeContent>,
    ) -> Result<&mut AdminNotice, NoticesError> {
        let notice = AdminNotice::new(id, content)?;
        Ok(self.registry.register_notice(notice)?)
    }

    pub fn remove_notice(&mut self, id: &str) {
        self.registry.unregister_notice(id);
    }

    pub fn notices(&self) -> Vec<&AdminNotice> {
        self.registry.notices()
    }

    pub fn notice(&self, id: &str) -> Option<&AdminNotice> {
        self.registry.get_notice(id)
    }

    /// Reconfigures an already registered notice.
    pub fn notice_mut(&mut self, id: &str) -> Option<&mut AdminNotice> {
        self.registry.get_notice_mut(id)
    }

    /// Renders a notice directly, without evaluating its conditions.
    pub fn render_notice(&self, notice: &AdminNotice) -> Result<String, NoticesError> {
        Ok(RenderAdminNotice::new(self.namespace()).render(notice)?)
    }

    /// Admin-notices hook: writes every registered notice that passes.
    ///
    /// # Errors
    /// - `Display` when host context is missing or the output fails.
    pub fn set_up_notices<W: Write>(
        &self,
        ctx: &dyn AdminContext,
        out: &mut W,
    ) -> Result<DisplaySummary, NoticesError> {
        Ok(DisplayNoticesInAdmin::new(self.namespace()).display(&self.notices(), ctx, out)?)
    }

    /// Enqueue hook: the dismissal script plus per-notice assets.
    ///
    /// The host should tag the dismissal script with a
    /// `data-stellarwp-namespace` attribute carrying the namespace.
    pub fn enqueue_scripts(
        &self,
        ctx: &dyn AdminContext,
        assets: &mut dyn AssetHost,
    ) -> Result<usize, ContextError> {
        let script = Script::new(self.config.resource_url(DISMISS_SCRIPT_FILE))
            .dependencies(DISMISS_SCRIPT_DEPENDENCIES.iter().copied())
            .in_footer(true);
        assets.enqueue_script(&self.dismiss_script_handle(), &script);

        let notice_assets = EnqueueNoticesScriptsAndStyles::new(self.namespace()).enqueue(
            &self.notices(),
            ctx,
            assets,
        )?;
        Ok(notice_assets + 1)
    }

    pub fn dismiss_script_handle(&self) -> String {
        format!("stellarwp-admin-notices-{}", self.namespace())
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminNotices, NoticesError};
    use crate::config::NoticesConfig;
    use crate::host::{ContextError, EnqueuedAsset, FixedAdminContext, RecordingAssetHost};
    use crate::model::screen_condition::ScreenCondition;
    use crate::model::urgency::NoticeUrgency;
    use crate::repo::notice_registry::RegistryError;
    use crate::service::display::DisplayError;
    use crate::service::render::RenderError;

    fn notices() -> AdminNotices {
        let config = NoticesConfig::new("acme", "https://example.com/lib").expect("config");
        AdminNotices::new(config).expect("notices")
    }

    #[test]
    fn rejects_invalid_config_built_without_validation() {
        let config = NoticesConfig {
            namespace: String::new(),
            assets_url: "https://example.com".to_string(),
        };
        let err = AdminNotices::new(config)
            .err()
            .expect("empty namespace must fail");
        assert!(matches!(err, NoticesError::Config(_)));
    }

    #[test]
    fn show_registers_and_returns_notice() {
        let mut notices = notices();
        notices
            .show("welcome", "Welcome!")
            .expect("register")
            .not_dismissible();

        let registered = notices.notices();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].id(), "welcome");
        assert!(!registered[0].is_dismissible());
    }

    #[test]
    fn show_rejects_duplicates() {
        let mut notices = notices();
        notices.show("welcome", "Welcome!").expect("register");

        let err = notices
            .show("welcome", "Again")
            .err()
            .expect("duplicate must fail");
        assert!(matches!(
            err,
            NoticesError::Registry(RegistryError::Collision(id)) if id == "welcome"
        ));
    }

    #[test]
    fn remove_notice_unregisters() {
        let mut notices = notices();
        notices.show("welcome", "Welcome!").expect("register");
        notices.remove_notice("welcome");
        notices.remove_notice("welcome");

        assert!(notices.notices().is_empty());
    }

    #[test]
    fn notice_mut_reconfigures_registered_notice() {
        let mut notices = notices();
        notices.show("welcome", "Welcome!").expect("register");

        notices
            .notice_mut("welcome")
            .expect("registered")
            .urgency(NoticeUrgency::Warning)
            .not_dismissible();
        assert!(notices.notice_mut("missing").is_none());

        let notice = notices.notice("welcome").expect("registered");
        assert_eq!(notice.notice_urgency(), NoticeUrgency::Warning);
        assert!(!notice.is_dismissible());
    }

    #[test]
    fn set_up_notices_wraps_context_failures() {
        let mut notices = notices();
        notices
            .show("plugins_only", "Hi")
            .expect("register")
            .on(ScreenCondition::new("plugins.php").expect("condition"));

        let mut out = Vec::new();
        let err = notices
            .set_up_notices(&FixedAdminContext::new(), &mut out)
            .expect_err("missing url must fail");
        assert!(matches!(
            err,
            NoticesError::Display(DisplayError::Context(ContextError::UrlUnavailable))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn render_notice_wraps_render_failures() {
        let mut notices = notices();
        notices.show("promo", "no markup").expect("register").custom();

        let notice = notices.notice("promo").expect("registered");
        let err = notices
            .render_notice(notice)
            .expect_err("custom notice without a tag must fail");
        assert!(matches!(
            err,
            NoticesError::Render(RenderError::MissingOpeningTag(id)) if id == "promo"
        ));
    }

    #[test]
    fn enqueue_scripts_adds_dismiss_script_first() {
        let notices = notices();
        let mut assets = RecordingAssetHost::new();

        let count = notices
            .enqueue_scripts(&FixedAdminContext::new(), &mut assets)
            .expect("enqueue");

        assert_eq!(count, 1);
        let EnqueuedAsset::Script { handle, script } = &assets.enqueued[0] else {
            panic!("expected dismissal script");
        };
        assert_eq!(handle, "stellarwp-admin-notices-acme");
        assert_eq!(
            script.source,
            "https://example.com/lib/resources/admin-notices.js"
        );
        assert_eq!(script.dependencies, vec!["jquery", "wp-data", "wp-preferences"]);
        assert!(script.in_footer);
    }
}
