#![forbid(unsafe_code)]

use bitewise_core::user::{self, CachedUser};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

/// Fills `.user-name` from the cached user record on dashboard pages.
pub(crate) struct DashboardGreeter;

impl DashboardGreeter {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let path = cx.window.location().pathname().unwrap_or_default();
        if !user::is_dashboard_path(&path) {
            return Ok(None);
        }
        let Some(target) = dom::query(cx.doc, user::USER_NAME_SELECTOR) else {
            return Ok(None);
        };

        // Storage can be missing or throw (privacy modes); both read as empty.
        let raw = cx
            .window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(&cx.config.storage_key).ok().flatten());
        let record = CachedUser::from_storage(raw.as_deref());
        let Some(name) = record.username() else {
            return Ok(None);
        };
        target.set_text_content(Some(name));
        tracing::debug!("dashboard greeting applied");
        Ok(Some(Self))
    }
}

impl Component for DashboardGreeter {
    fn name(&self) -> &'static str {
        "dashboard-greeter"
    }
}
