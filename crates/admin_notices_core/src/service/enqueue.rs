//! Enqueues the scripts and styles of notices that will be displayed.

use crate::host::{AdminContext, AssetHost, ContextError};
use crate::model::notice::AdminNotice;
use crate::service::should_render::NoticeShouldRender;
use log::debug;

#[derive(Debug, Clone)]
pub struct EnqueueNoticesScriptsAndStyles {
    namespace: String,
    should_render: NoticeShouldRender,
}

impl EnqueueNoticesScriptsAndStyles {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            should_render: NoticeShouldRender::new(namespace),
        }
    }

    /// Asset handle for one notice: `stellarwp-{namespace}-{id}`.
    pub fn handle(&self, notice: &AdminNotice) -> String {
        format!("stellarwp-{}-{}", self.namespace, notice.id())
    }

    /// Enqueues assets of notices that carry any and pass their conditions.
    ///
    /// Notices without assets are not evaluated.
    pub fn enqueue(
        &self,
        notices: &[&AdminNotice],
        ctx: &dyn AdminContext,
        assets: &mut dyn AssetHost,
    ) -> Result<usize, ContextError> {
        let mut enqueued = 0;
        for notice in notices {
            let (script, style) = (notice.script_to_enqueue(), notice.style_to_enqueue());
            if script.is_none() && style.is_none() {
                continue;
            }
            if !self.should_render.evaluate(notice, ctx)? {
                continue;
            }

            let handle = self.handle(notice);
            if let Some(script) = script {
                assets.enqueue_script(&handle, script);
                enqueued += 1;
            }
            if let Some(style) = style {
                assets.enqueue_style(&handle, style);
                enqueued += 1;
            }
            debug!(
                "event=notice_assets_enqueue module=enqueue status=ok handle={}",
                handle
            );
        }
        Ok(enqueued)
    }
}

#[cfg(test)]
mod tests {
    use super::EnqueueNoticesScriptsAndStyles;
    use crate::host::{EnqueuedAsset, FixedAdminContext, RecordingAssetHost};
    use crate::model::asset::{Script, Style};
    use crate::model::notice::AdminNotice;

    #[test]
    fn enqueues_assets_of_visible_notices_only() {
        let mut visible = AdminNotice::new("visible", "Hi").expect("notice");
        visible
            .enqueue_script(Script::new("https://cdn.test/v.js").in_footer(true))
            .enqueue_style(Style::new("https://cdn.test/v.css"));

        let mut hidden = AdminNotice::new("hidden", "Hi").expect("notice");
        hidden
            .when(|| false)
            .enqueue_script(Script::new("https://cdn.test/h.js"));

        let plain = AdminNotice::new("plain", "Hi").expect("notice");

        let mut assets = RecordingAssetHost::new();
        let count = EnqueueNoticesScriptsAndStyles::new("acme")
            .enqueue(
                &[&visible, &hidden, &plain],
                &FixedAdminContext::new(),
                &mut assets,
            )
            .expect("enqueue");

        assert_eq!(count, 2);
        assert_eq!(
            assets.handles(),
            vec!["stellarwp-acme-visible", "stellarwp-acme-visible"]
        );
        assert!(matches!(
            &assets.enqueued[0],
            EnqueuedAsset::Script { script, .. } if script.in_footer
        ));
        assert!(matches!(&assets.enqueued[1], EnqueuedAsset::Style { .. }));
    }
}
