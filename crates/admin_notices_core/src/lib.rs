//! Conditional display and rendering of admin dashboard notices.
//! This crate is the single source of truth for notice visibility and markup
//! invariants; the host supplies request state through `AdminContext`.

pub mod config;
pub mod host;
pub mod html;
pub mod logging;
pub mod model;
pub mod notices;
pub mod repo;
pub mod service;

pub use config::{ConfigError, NoticesConfig};
pub use host::{
    AdminContext, AssetHost, ContextError, EnqueuedAsset, FixedAdminContext, RecordingAssetHost,
    ScreenDescriptor,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::asset::{Script, Style};
pub use model::capability::UserCapability;
pub use model::date::IntoNoticeDate;
pub use model::element_properties::{CloseBehavior, NoticeElementProperties};
pub use model::location::NoticeLocation;
pub use model::notice::{AdminNotice, NoticeContent, RenderCallback, WhenCallback};
pub use model::screen_condition::{ScreenCondition, SCREEN_PROPERTIES};
pub use model::urgency::NoticeUrgency;
pub use model::NoticeConfigError;
pub use notices::{AdminNotices, NoticesError};
pub use repo::notice_registry::{InMemoryNoticeRegistry, NoticeRegistry, RegistryError};
pub use service::display::{DisplayError, DisplayNoticesInAdmin, DisplaySummary};
pub use service::enqueue::EnqueueNoticesScriptsAndStyles;
pub use service::render::{RenderAdminNotice, RenderError};
pub use service::should_render::NoticeShouldRender;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
