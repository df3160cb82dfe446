#![forbid(unsafe_code)]

use bitewise_core::effects::HoverEffect;
use gloo::events::EventListener;

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

/// Presets in bind order. `.feature-card` matches two presets; the marketing
/// one is bound second, so its styles win.
const PRESETS: [HoverEffect; 4] = [
    HoverEffect::DASHBOARD_CARD,
    HoverEffect::FEATURE_CARD,
    HoverEffect::BENEFIT_ITEM,
    HoverEffect::FIELD_GROUP,
];

/// Pointer enter/leave inline styles for cards and form fields.
pub(crate) struct HoverBinder {
    _listeners: Vec<EventListener>,
}

impl HoverBinder {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let mut listeners = Vec::new();
        for effect in PRESETS {
            for el in dom::query_all(cx.doc, effect.selector) {
                for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                    let target = el.clone();
                    listeners.push(EventListener::new(&el, event, move |_| {
                        dom::set_styles(&target, effect.styles(hovered));
                    }));
                }
            }
        }
        if listeners.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

impl Component for HoverBinder {
    fn name(&self) -> &'static str {
        "hover-binder"
    }
}
