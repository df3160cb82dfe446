#![forbid(unsafe_code)]

use bitewise_core::nav;
use gloo::events::EventListener;

use super::{BindContext, Component, menu};
use crate::BindError;
use crate::dom;

const LINK_SELECTOR: &str = ".nav-link";

/// Marks the `.nav-link` for the current page and closes the marketing menu
/// when any link is followed.
pub(crate) struct NavHighlighter {
    _clicks: Vec<EventListener>,
}

impl NavHighlighter {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let links = dom::query_all(cx.doc, LINK_SELECTOR);
        if links.is_empty() {
            return Ok(None);
        }

        let path = cx
            .window
            .location()
            .pathname()
            .map_err(|err| BindError::js("location.pathname", dom::js_message(&err)))?;
        let page = nav::current_page(&path, &cx.config.index_page);
        for link in &links {
            let active = nav::is_active_link(link.get_attribute("href").as_deref(), page);
            dom::set_class(link, nav::ACTIVE_CLASS, active);
        }
        tracing::debug!(page, links = links.len(), "nav links highlighted");

        let clicks = links
            .iter()
            .map(|link| {
                let doc = cx.doc.clone();
                EventListener::new(link, "click", move |_| menu::close_marketing(&doc))
            })
            .collect();
        Ok(Some(Self { _clicks: clicks }))
    }
}

impl Component for NavHighlighter {
    fn name(&self) -> &'static str {
        "nav-highlighter"
    }
}
