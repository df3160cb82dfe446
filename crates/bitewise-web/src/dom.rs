#![forbid(unsafe_code)]

//! Small DOM helpers shared by the components.
//!
//! Missing elements are never errors here: lookups return `Option`/empty
//! vectors and style writes on non-HTML elements are skipped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

use crate::BindError;

pub(crate) fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub(crate) fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

/// Render a thrown JS value for an error message.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    match doc.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(err) => {
            tracing::warn!(selector, error = %js_message(&err), "bad selector");
            Vec::new()
        }
    }
}

/// All descendants of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub(crate) fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Append `<style class="{class}">` to `head` unless one is already present.
pub(crate) fn inject_style_once(doc: &Document, class: &str, css: &str) {
    if query(doc, &format!("style.{class}")).is_some() {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_class_name(class);
    style.set_text_content(Some(css));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}

pub(crate) fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// One-shot timeouts owned by a component.
///
/// Dropping the set (or calling [`Timers::clear`]) cancels everything still
/// pending. Fired timeouts remove themselves.
#[derive(Clone, Default)]
pub(crate) struct Timers {
    slots: Rc<RefCell<TimerSlots>>,
}

#[derive(Default)]
struct TimerSlots {
    next: u64,
    live: HashMap<u64, Timeout>,
}

impl Timers {
    pub(crate) fn after(&self, delay: Duration, f: impl FnOnce() + 'static) {
        let key = {
            let mut slots = self.slots.borrow_mut();
            slots.next += 1;
            slots.next
        };
        let owner: Weak<RefCell<TimerSlots>> = Rc::downgrade(&self.slots);
        let timeout = Timeout::new(millis(delay), move || {
            f();
            if let Some(slots) = owner.upgrade() {
                slots.borrow_mut().live.remove(&key);
            }
        });
        self.slots.borrow_mut().live.insert(key, timeout);
    }

    pub(crate) fn clear(&self) {
        self.slots.borrow_mut().live.clear();
    }
}

/// An `IntersectionObserver` disconnected on drop.
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Calls `on_visible` with the target of every entry that is intersecting.
    pub(crate) fn new(
        threshold: f64,
        root_margin: &str,
        mut on_visible: impl FnMut(Element) + 'static,
    ) -> Result<Self, BindError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(entry.target());
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| BindError::js("IntersectionObserver", js_message(&err)))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
