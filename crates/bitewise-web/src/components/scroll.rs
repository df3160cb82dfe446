#![forbid(unsafe_code)]

use bitewise_core::scroll;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

fn scroll_smoothly(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `scrollToSection(id)`.
pub(crate) fn scroll_to_id(doc: &Document, id: &str) {
    if let Some(section) = doc.get_element_by_id(id) {
        scroll_smoothly(&section);
    }
}

/// Replaces in-page anchor jumps with a smooth scroll.
pub(crate) struct AnchorScroller {
    _clicks: Vec<EventListener>,
}

impl AnchorScroller {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let anchors = dom::query_all(cx.doc, scroll::ANCHOR_SELECTOR);
        if anchors.is_empty() {
            return Ok(None);
        }
        let clicks = anchors
            .iter()
            .map(|anchor| {
                let doc = cx.doc.clone();
                let href = anchor.clone();
                EventListener::new_with_options(
                    anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let raw = href.get_attribute("href");
                        let Some(selector) = scroll::anchor_target(raw.as_deref()) else {
                            return;
                        };
                        // An href that is not a valid selector has no target.
                        if let Some(target) = doc.query_selector(selector).ok().flatten() {
                            scroll_smoothly(&target);
                        }
                    },
                )
            })
            .collect();
        Ok(Some(Self { _clicks: clicks }))
    }
}

impl Component for AnchorScroller {
    fn name(&self) -> &'static str {
        "anchor-scroller"
    }
}
