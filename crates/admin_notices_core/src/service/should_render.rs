//! Notice visibility decision engine.
//!
//! # Responsibility
//! - Decide whether one notice is shown for the current request.
//!
//! # Invariants
//! - Checks run in a fixed order and stop at the first failure:
//!   dismissal, date window, gate callback, capabilities, screen conditions.
//! - Capability and screen groups are disjunctions; the groups themselves
//!   are conjunctive.
//! - A non-matching condition is `Ok(false)`, never an error.
//! - Screen and URL are only read when a condition needs them.

use crate::host::{AdminContext, ContextError, ScreenDescriptor};
use crate::model::notice::AdminNotice;
use crate::model::screen_condition::ScreenCondition;
use log::debug;
use time::UtcOffset;

/// Evaluates notice conditions against an `AdminContext`.
#[derive(Debug, Clone)]
pub struct NoticeShouldRender {
    namespace: String,
}

impl NoticeShouldRender {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns whether `notice` should be displayed.
    ///
    /// # Errors
    /// - Propagates `ContextError` when a screen condition needs a screen or
    ///   URL the host cannot provide.
    pub fn evaluate(
        &self,
        notice: &AdminNotice,
        ctx: &dyn AdminContext,
    ) -> Result<bool, ContextError> {
        let passes = self.passes_dismissal(notice, ctx)
            && passes_date_limits(notice, ctx)
            && passes_when_callback(notice)
            && passes_user_capabilities(notice, ctx)
            && passes_screen_conditions(notice, ctx)?;

        debug!(
            "event=notice_evaluate module=should_render status=ok namespace={} id={} display={}",
            self.namespace,
            notice.id(),
            passes
        );
        Ok(passes)
    }

    fn passes_dismissal(&self, notice: &AdminNotice, ctx: &dyn AdminContext) -> bool {
        if !notice.is_dismissible() {
            return true;
        }
        ctx.dismissed_at(&self.namespace, notice.id()).is_none()
    }
}

fn passes_date_limits(notice: &AdminNotice, ctx: &dyn AdminContext) -> bool {
    let (after, until) = (notice.after_date(), notice.until_date());
    if after.is_none() && until.is_none() {
        return true;
    }

    let now = ctx.now().to_offset(UtcOffset::UTC);

    if after.is_some_and(|after| after > now) {
        return false;
    }
    if until.is_some_and(|until| until < now) {
        return false;
    }
    true
}

fn passes_when_callback(notice: &AdminNotice) -> bool {
    match notice.when_callback() {
        Some(callback) => callback(),
        None => true,
    }
}

fn passes_user_capabilities(notice: &AdminNotice, ctx: &dyn AdminContext) -> bool {
    let capabilities = notice.user_capabilities();
    if capabilities.is_empty() {
        return true;
    }
    capabilities
        .iter()
        .any(|capability| capability.current_user_can(ctx))
}

fn passes_screen_conditions(
    notice: &AdminNotice,
    ctx: &dyn AdminContext,
) -> Result<bool, ContextError> {
    let conditions = notice.on_conditions();
    if conditions.is_empty() {
        return Ok(true);
    }

    let mut current_url: Option<String> = None;
    let mut screen: Option<ScreenDescriptor> = None;

    for condition in conditions {
        let matched = match condition {
            ScreenCondition::Regex { pattern, .. } => {
                let url = cached(&mut current_url, || ctx.current_admin_url())?;
                pattern.is_match(url)
            }
            ScreenCondition::Url(needle) => {
                let url = cached(&mut current_url, || ctx.current_admin_url())?;
                url.contains(needle.as_str())
            }
            ScreenCondition::Screen(properties) => {
                let screen = cached(&mut screen, || ctx.current_screen())?;
                properties
                    .iter()
                    .all(|(property, expected)| screen.get(property) == Some(expected))
            }
        };
        if matched {
            return Ok(true);
        }
    }

    Ok(false)
}

fn cached<T, F>(slot: &mut Option<T>, load: F) -> Result<&T, ContextError>
where
    F: FnOnce() -> Result<T, ContextError>,
{
    let value = match slot.take() {
        Some(value) => value,
        None => load()?,
    };
    Ok(slot.insert(value))
}
