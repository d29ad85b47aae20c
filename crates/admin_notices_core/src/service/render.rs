//! Notice renderer.
//!
//! # Responsibility
//! - Turn one `AdminNotice` into an HTML fragment.
//!
//! # Invariants
//! - Standard wrapper classes are ordered: `notice`, `notice-{urgency}`,
//!   `is-dismissible`, `inline`, `notice-alt`.
//! - Custom notices are never auto-paragraphed and never wrapped; their
//!   first opening tag receives the namespaced attributes.
//! - Rendering reads the notice only; the same notice renders identically.

use crate::model::element_properties::NoticeElementProperties;
use crate::model::notice::{AdminNotice, NoticeContent};
use crate::html::{auto_paragraph, inject_first_tag_attributes};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rendering faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A custom notice produced markup without an opening tag.
    MissingOpeningTag(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOpeningTag(id) => write!(
                f,
                "custom notice `{id}` rendered markup without an opening tag"
            ),
        }
    }
}

impl Error for RenderError {}

/// Renders notices for one namespace.
#[derive(Debug, Clone)]
pub struct RenderAdminNotice {
    namespace: String,
}

impl RenderAdminNotice {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn render(&self, notice: &AdminNotice) -> Result<String, RenderError> {
        let properties = NoticeElementProperties::new(notice, &self.namespace);
        let content = match notice.content() {
            NoticeContent::Text(text) => text.clone(),
            NoticeContent::Callback(callback) => callback(notice, &properties),
        };

        if notice.is_custom() {
            return inject_first_tag_attributes(&content, &properties.custom_wrapper_attributes)
                .ok_or_else(|| RenderError::MissingOpeningTag(notice.id().to_string()));
        }

        let content = if notice.should_auto_paragraph() {
            auto_paragraph(&content)
        } else {
            content
        };

        if !notice.uses_wrapper() {
            return Ok(content);
        }

        Ok(format!(
            "<div class='{}' {}>{}</div>",
            wrapper_classes(notice),
            properties.id_attribute,
            content
        ))
    }
}

fn wrapper_classes(notice: &AdminNotice) -> String {
    let mut classes = vec![
        "notice".to_string(),
        format!("notice-{}", notice.notice_urgency()),
    ];

    if notice.is_dismissible() {
        classes.push("is-dismissible".to_string());
    }
    if notice.notice_location().is_some_and(|location| location.is_inline()) {
        classes.push("inline".to_string());
    }
    if notice.uses_alternate_styles() {
        classes.push("notice-alt".to_string());
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{RenderAdminNotice, RenderError};
    use crate::model::element_properties::CloseBehavior;
    use crate::model::location::NoticeLocation;
    use crate::model::notice::{AdminNotice, NoticeContent};
    use crate::model::urgency::NoticeUrgency;

    fn renderer() -> RenderAdminNotice {
        RenderAdminNotice::new("namespace")
    }

    #[test]
    fn renders_standard_wrapper_without_dismissible() {
        let mut notice = AdminNotice::new("test_id", "Hello world!").expect("notice");
        notice.without_auto_paragraph().not_dismissible();

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-info' data-stellarwp-namespace-notice-id='test_id'>Hello world!</div>"
        );
    }

    #[test]
    fn appends_dismissible_class_after_urgency() {
        let mut notice = AdminNotice::new("test_id", "Hello world!").expect("notice");
        notice.dismissible(true);

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-info is-dismissible' data-stellarwp-namespace-notice-id='test_id'>Hello world!</div>"
        );
    }

    #[test]
    fn orders_all_optional_classes() {
        let mut notice = AdminNotice::new("test_id", "Hi").expect("notice");
        notice
            .urgency(NoticeUrgency::Warning)
            .location(NoticeLocation::Inline)
            .alternate_styles(true);

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-warning is-dismissible inline notice-alt' data-stellarwp-namespace-notice-id='test_id'>Hi</div>"
        );
    }

    #[test]
    fn non_inline_location_adds_no_class() {
        let mut notice = AdminNotice::new("test_id", "Hi").expect("notice");
        notice.not_dismissible().location(NoticeLocation::AboveHeader);

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-info' data-stellarwp-namespace-notice-id='test_id'>Hi</div>"
        );
    }

    #[test]
    fn auto_paragraphs_standard_content() {
        let mut notice = AdminNotice::new("test_id", "Hello world!").expect("notice");
        notice.auto_paragraph(true).not_dismissible();

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-info' data-stellarwp-namespace-notice-id='test_id'><p>Hello world!</p>\n</div>"
        );
    }

    #[test]
    fn renders_callback_output() {
        let mut notice = AdminNotice::new(
            "test_id",
            NoticeContent::callback(|notice, _| format!("Hello from {}!", notice.id())),
        )
        .expect("notice");
        notice.not_dismissible();

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div class='notice notice-info' data-stellarwp-namespace-notice-id='test_id'>Hello from test_id!</div>"
        );
    }

    #[test]
    fn without_wrapper_emits_content_only() {
        let mut notice = AdminNotice::new("test_id", "Raw text").expect("notice");
        notice.without_wrapper();

        assert_eq!(renderer().render(&notice).expect("render"), "Raw text");
    }

    #[test]
    fn custom_notice_gets_attributes_on_first_tag() {
        let mut notice = AdminNotice::new(
            "promo",
            NoticeContent::callback(|_, props| {
                format!(
                    "<aside class=\"promo\">Sale!<button {}>x</button></aside>",
                    props.custom_closer_attributes(CloseBehavior::Hide)
                )
            }),
        )
        .expect("notice");
        notice.custom().location(NoticeLocation::BelowHeader);

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<aside data-stellarwp-namespace-notice-id='promo' data-stellarwp-namespace-location='below_header' class=\"promo\">Sale!<button data-stellarwp-namespace-close-notice='promo' data-stellarwp-namespace-close-notice-behavior='hide'>x</button></aside>"
        );
    }

    #[test]
    fn custom_notice_is_never_auto_paragraphed() {
        let mut notice = AdminNotice::new("promo", "<div>One\n\nTwo</div>").expect("notice");
        notice.custom().auto_paragraph(true);

        assert_eq!(
            renderer().render(&notice).expect("render"),
            "<div data-stellarwp-namespace-notice-id='promo'>One\n\nTwo</div>"
        );
    }

    #[test]
    fn custom_notice_without_tag_is_an_error() {
        let mut notice = AdminNotice::new("promo", "no markup here").expect("notice");
        notice.custom();

        let err = renderer().render(&notice).expect_err("missing tag must fail");
        assert_eq!(err, RenderError::MissingOpeningTag("promo".to_string()));
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut notice = AdminNotice::new("test_id", "Line\n\nLine").expect("notice");
        notice.auto_paragraph(true);

        let first = renderer().render(&notice).expect("first render");
        let second = renderer().render(&notice).expect("second render");
        assert_eq!(first, second);
    }
}
