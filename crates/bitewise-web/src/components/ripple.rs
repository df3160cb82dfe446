#![forbid(unsafe_code)]

use std::time::Duration;

use bitewise_core::effects::ripple::{self, RippleGeometry, RippleStyle};
use bitewise_core::effects::Rect;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom::{self, Timers};

/// Click ripples on buttons and the demo's interactive options.
pub(crate) struct RippleBinder {
    _clicks: Vec<EventListener>,
    timers: Timers,
}

fn spawn(
    doc: &Document,
    host: &Element,
    event: &MouseEvent,
    style: RippleStyle,
    lifetime: Duration,
    timers: &Timers,
) {
    let r = host.get_bounding_client_rect();
    let geometry = RippleGeometry::compute(
        Rect::new(r.left(), r.top(), r.width(), r.height()),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );
    let Ok(span) = doc.create_element("span") else {
        return;
    };
    let _ = span.set_attribute("style", &geometry.css_text(style));
    dom::set_styles(host, &ripple::HOST_STYLES);
    if host.append_child(&span).is_err() {
        return;
    }
    timers.after(lifetime, move || span.remove());
}

impl RippleBinder {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let timers = Timers::default();
        let lifetime = cx.config.ripple_lifetime();
        let mut clicks = Vec::new();
        for (selector, style) in [
            (ripple::CTA_SELECTOR, RippleStyle::CTA),
            (ripple::INTERACTIVE_SELECTOR, RippleStyle::INTERACTIVE),
        ] {
            for host in dom::query_all(cx.doc, selector) {
                let (doc, target, pending) = (cx.doc.clone(), host.clone(), timers.clone());
                clicks.push(EventListener::new(&host, "click", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        spawn(&doc, &target, event, style, lifetime, &pending);
                    }
                }));
            }
        }
        if clicks.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            _clicks: clicks,
            timers,
        }))
    }
}

impl Component for RippleBinder {
    fn name(&self) -> &'static str {
        "ripple-binder"
    }
}

impl Drop for RippleBinder {
    fn drop(&mut self) {
        self.timers.clear();
    }
}
