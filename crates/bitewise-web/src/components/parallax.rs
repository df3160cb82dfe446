#![forbid(unsafe_code)]

//! Scroll-driven parallax.
//!
//! Icons and the navbar follow every scroll event. Background layers and
//! phone mockups are updated at most once per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use bitewise_core::effects::{Rect, parallax};
use bitewise_core::scroll::ScrollCoalescer;
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::{Document, Window};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

fn scrolled(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn follow_scroll(window: &Window, doc: &Document) {
    let scrolled = scrolled(window);
    for (index, icon) in dom::query_all(doc, parallax::FLOATING_ICON_SELECTOR)
        .iter()
        .enumerate()
    {
        dom::set_style(icon, "transform", &parallax::icon_transform(scrolled, index));
    }
    if let Some(navbar) = dom::query(doc, parallax::NAVBAR_SELECTOR) {
        dom::set_style(&navbar, "background", &parallax::navbar_background(scrolled));
    }
}

fn frame_effects(window: &Window, doc: &Document) {
    let scrolled = scrolled(window);
    for (index, layer) in dom::query_all(doc, parallax::BACKGROUND_SELECTOR)
        .iter()
        .enumerate()
    {
        dom::set_style(
            layer,
            "transform",
            &parallax::background_transform(scrolled, index),
        );
    }

    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    for phone in dom::query_all(doc, parallax::PHONE_SELECTOR) {
        let r = phone.get_bounding_client_rect();
        let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
        if let Some(scale) = parallax::phone_scale(rect, viewport_height) {
            dom::set_style(&phone, "transform", &parallax::scale_transform(scale));
        }
    }
}

struct FrameState {
    coalescer: ScrollCoalescer,
    frame: Option<AnimationFrame>,
}

pub(crate) struct ParallaxScroller {
    _listeners: [EventListener; 2],
    frame: Rc<RefCell<FrameState>>,
}

impl ParallaxScroller {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let has_targets = [
            parallax::FLOATING_ICON_SELECTOR,
            parallax::NAVBAR_SELECTOR,
            parallax::BACKGROUND_SELECTOR,
            parallax::PHONE_SELECTOR,
        ]
        .into_iter()
        .any(|selector| dom::query(cx.doc, selector).is_some());
        if !has_targets {
            return Ok(None);
        }

        let (window, doc) = (cx.window.clone(), cx.doc.clone());
        let immediate = EventListener::new(cx.window, "scroll", move |_| {
            follow_scroll(&window, &doc);
        });

        let frame = Rc::new(RefCell::new(FrameState {
            coalescer: ScrollCoalescer::new(),
            frame: None,
        }));
        let state = Rc::clone(&frame);
        let (window, doc) = (cx.window.clone(), cx.doc.clone());
        let coalesced = EventListener::new(cx.window, "scroll", move |_| {
            if !state.borrow_mut().coalescer.request() {
                return;
            }
            let (ran, window, doc) = (Rc::clone(&state), window.clone(), doc.clone());
            let handle = request_animation_frame(move |_timestamp| {
                frame_effects(&window, &doc);
                let mut ran = ran.borrow_mut();
                ran.coalescer.frame_ran();
                ran.frame = None;
            });
            state.borrow_mut().frame = Some(handle);
        });

        Ok(Some(Self {
            _listeners: [immediate, coalesced],
            frame,
        }))
    }
}

impl Component for ParallaxScroller {
    fn name(&self) -> &'static str {
        "parallax-scroller"
    }
}

impl Drop for ParallaxScroller {
    fn drop(&mut self) {
        self.frame.borrow_mut().frame.take();
    }
}
