//! Admin notice display orchestration.
//!
//! # Responsibility
//! - Evaluate each notice and write the rendered markup of those that pass.
//!
//! # Invariants
//! - Output order follows input order.
//! - A render failure of one notice never suppresses the others; it is
//!   logged and reported in the returned summary.
//! - Host context and output write failures abort the batch.

use crate::host::{AdminContext, ContextError};
use crate::model::notice::AdminNotice;
use crate::service::render::{RenderAdminNotice, RenderError};
use crate::service::should_render::NoticeShouldRender;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Fatal display failures.
#[derive(Debug)]
pub enum DisplayError {
    Context(ContextError),
    Io(std::io::Error),
}

impl Display for DisplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write notice markup: {err}"),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Context(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ContextError> for DisplayError {
    fn from(value: ContextError) -> Self {
        Self::Context(value)
    }
}

impl From<std::io::Error> for DisplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Outcome of one display pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DisplaySummary {
    /// Ids written to the output, in order.
    pub displayed: Vec<String>,
    /// Ids whose conditions did not pass.
    pub hidden: Vec<String>,
    pub failures: Vec<RenderError>,
}

/// Displays the notices whose conditions pass.
#[derive(Debug, Clone)]
pub struct DisplayNoticesInAdmin {
    should_render: NoticeShouldRender,
    renderer: RenderAdminNotice,
}

impl DisplayNoticesInAdmin {
    pub fn new(namespace: &str) -> Self {
        Self {
            should_render: NoticeShouldRender::new(namespace),
            renderer: RenderAdminNotice::new(namespace),
        }
    }

    /// Writes every passing notice to `out`. No-op for an empty slice.
    pub fn display<W: Write>(
        &self,
        notices: &[&AdminNotice],
        ctx: &dyn AdminContext,
        out: &mut W,
    ) -> Result<DisplaySummary, DisplayError> {
        let mut summary = DisplaySummary::default();
        if notices.is_empty() {
            return Ok(summary);
        }

        for notice in notices {
            if !self.should_render.evaluate(notice, ctx)? {
                summary.hidden.push(notice.id().to_string());
                continue;
            }

            match self.renderer.render(notice) {
                Ok(markup) => {
                    out.write_all(markup.as_bytes())?;
                    summary.displayed.push(notice.id().to_string());
                }
                Err(err) => {
                    error!(
                        "event=notice_render module=display status=error id={} error={}",
                        notice.id(),
                        err
                    );
                    summary.failures.push(err);
                }
            }
        }

        debug!(
            "event=notices_display module=display status=ok displayed={} hidden={} failed={}",
            summary.displayed.len(),
            summary.hidden.len(),
            summary.failures.len()
        );
        Ok(summary)
    }
}
