//! Admin notice entity.
//!
//! # Responsibility
//! - Hold the declarative configuration of one notice.
//! - Validate configuration at setter time, never at render time.
//!
//! # Invariants
//! - `id` is non-blank and stable for the notice lifetime.
//! - Setters mutate in place and return the same instance.
//! - All visibility restrictions default to "no restriction".

use crate::model::asset::{Script, Style};
use crate::model::capability::UserCapability;
use crate::model::date::IntoNoticeDate;
use crate::model::element_properties::NoticeElementProperties;
use crate::model::location::NoticeLocation;
use crate::model::screen_condition::ScreenCondition;
use crate::model::urgency::NoticeUrgency;
use crate::model::NoticeConfigError;
use std::fmt::{Debug, Formatter};
use time::OffsetDateTime;

/// Produces notice markup at render time.
pub type RenderCallback = Box<dyn Fn(&AdminNotice, &NoticeElementProperties) -> String>;

/// Custom visibility gate evaluated at decision time.
pub type WhenCallback = Box<dyn Fn() -> bool>;

/// Where the notice body comes from.
pub enum NoticeContent {
    Text(String),
    Callback(RenderCallback),
}

impl NoticeContent {
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&AdminNotice, &NoticeElementProperties) -> String + 'static,
    {
        Self::Callback(Box::new(callback))
    }
}

impl From<&str> for NoticeContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NoticeContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Debug for NoticeContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// One conditionally displayed admin notice.
pub struct AdminNotice {
    id: String,
    content: NoticeContent,
    user_capabilities: Vec<UserCapability>,
    after_date: Option<OffsetDateTime>,
    until_date: Option<OffsetDateTime>,
    when_callback: Option<WhenCallback>,
    on_conditions: Vec<ScreenCondition>,
    auto_paragraph: bool,
    urgency: NoticeUrgency,
    with_wrapper: bool,
    dismissible: bool,
    alternate_styles: bool,
    custom: bool,
    location: Option<NoticeLocation>,
    script: Option<Script>,
    style: Option<Style>,
}

impl AdminNotice {
    /// Creates a notice with default presentation and no restrictions.
    ///
    /// # Errors
    /// - `EmptyNoticeId` when `id` is blank.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<NoticeContent>,
    ) -> Result<Self, NoticeConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(NoticeConfigError::EmptyNoticeId);
        }

        Ok(Self {
            id,
            content: content.into(),
            user_capabilities: Vec::new(),
            after_date: None,
            until_date: None,
            when_callback: None,
            on_conditions: Vec::new(),
            auto_paragraph: false,
            urgency: NoticeUrgency::default(),
            with_wrapper: true,
            dismissible: true,
            alternate_styles: false,
            custom: false,
            location: None,
            script: None,
            style: None,
        })
    }

    /// Limits display to users holding any one of `capabilities`.
    ///
    /// Replaces previously configured capabilities.
    pub fn if_user_can<I>(&mut self, capabilities: I) -> &mut Self
    where
        I: IntoIterator<Item = UserCapability>,
    {
        self.user_capabilities = capabilities.into_iter().collect();
        self
    }

    /// Hides the notice before `date`.
    pub fn after(&mut self, date: impl IntoNoticeDate) -> Result<&mut Self, NoticeConfigError> {
        self.after_date = Some(date.into_notice_date()?);
        Ok(self)
    }

    /// Hides the notice after `date`.
    pub fn until(&mut self, date: impl IntoNoticeDate) -> Result<&mut Self, NoticeConfigError> {
        self.until_date = Some(date.into_notice_date()?);
        Ok(self)
    }

    /// Shorthand for `after(after)` plus `until(until)`.
    ///
    /// Both dates are parsed before either is stored.
    pub fn between(
        &mut self,
        after: impl IntoNoticeDate,
        until: impl IntoNoticeDate,
    ) -> Result<&mut Self, NoticeConfigError> {
        let after = after.into_notice_date()?;
        let until = until.into_notice_date()?;
        self.after_date = Some(after);
        self.until_date = Some(until);
        Ok(self)
    }

    /// Gates display on a custom predicate.
    pub fn when<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn() -> bool + 'static,
    {
        self.when_callback = Some(Box::new(callback));
        self
    }

    /// Adds one screen condition; any matching condition admits the notice.
    pub fn on(&mut self, condition: ScreenCondition) -> &mut Self {
        self.on_conditions.push(condition);
        self
    }

    /// Adds several screen conditions at once.
    pub fn on_any<I>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = ScreenCondition>,
    {
        self.on_conditions.extend(conditions);
        self
    }

    pub fn auto_paragraph(&mut self, auto: bool) -> &mut Self {
        self.auto_paragraph = auto;
        self
    }

    pub fn without_auto_paragraph(&mut self) -> &mut Self {
        self.auto_paragraph(false)
    }

    pub fn urgency(&mut self, urgency: NoticeUrgency) -> &mut Self {
        self.urgency = urgency;
        self
    }

    /// Toggles the standard `<div class='notice ...'>` wrapper.
    pub fn with_wrapper(&mut self, with_wrapper: bool) -> &mut Self {
        self.with_wrapper = with_wrapper;
        self
    }

    pub fn without_wrapper(&mut self) -> &mut Self {
        self.with_wrapper(false)
    }

    pub fn dismissible(&mut self, dismissible: bool) -> &mut Self {
        self.dismissible = dismissible;
        self
    }

    pub fn not_dismissible(&mut self) -> &mut Self {
        self.dismissible(false)
    }

    /// Adds the `notice-alt` class to the standard wrapper.
    pub fn alternate_styles(&mut self, alternate: bool) -> &mut Self {
        self.alternate_styles = alternate;
        self
    }

    /// Marks the notice as supplying its own complete markup.
    pub fn custom(&mut self) -> &mut Self {
        self.custom = true;
        self
    }

    pub fn location(&mut self, location: NoticeLocation) -> &mut Self {
        self.location = Some(location);
        self
    }

    pub fn enqueue_script(&mut self, script: Script) -> &mut Self {
        self.script = Some(script);
        self
    }

    pub fn enqueue_style(&mut self, style: Style) -> &mut Self {
        self.style = Some(style);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &NoticeContent {
        &self.content
    }

    pub fn user_capabilities(&self) -> &[UserCapability] {
        &self.user_capabilities
    }

    pub fn after_date(&self) -> Option<OffsetDateTime> {
        self.after_date
    }

    pub fn until_date(&self) -> Option<OffsetDateTime> {
        self.until_date
    }

    pub fn when_callback(&self) -> Option<&dyn Fn() -> bool> {
        self.when_callback.as_deref()
    }

    pub fn on_conditions(&self) -> &[ScreenCondition] {
        &self.on_conditions
    }

    pub fn should_auto_paragraph(&self) -> bool {
        self.auto_paragraph
    }

    pub fn notice_urgency(&self) -> NoticeUrgency {
        self.urgency
    }

    pub fn uses_wrapper(&self) -> bool {
        self.with_wrapper
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn uses_alternate_styles(&self) -> bool {
        self.alternate_styles
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn notice_location(&self) -> Option<NoticeLocation> {
        self.location
    }

    pub fn script_to_enqueue(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    pub fn style_to_enqueue(&self) -> Option<&Style> {
        self.style.as_ref()
    }
}

impl Debug for AdminNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminNotice")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("user_capabilities", &self.user_capabilities)
            .field("after_date", &self.after_date)
            .field("until_date", &self.until_date)
            .field("has_when_callback", &self.when_callback.is_some())
            .field("on_conditions", &self.on_conditions)
            .field("auto_paragraph", &self.auto_paragraph)
            .field("urgency", &self.urgency)
            .field("with_wrapper", &self.with_wrapper)
            .field("dismissible", &self.dismissible)
            .field("alternate_styles", &self.alternate_styles)
            .field("custom", &self.custom)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
