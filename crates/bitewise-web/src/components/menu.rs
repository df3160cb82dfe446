#![forbid(unsafe_code)]

//! Mobile menus.
//!
//! The dashboard has a hamburger button driving `#nav-menu` with
//! `aria-expanded`; the marketing page toggles `active` on `#navLinks` and
//! `.hamburger` through the exported `toggleMobileMenu()`.

use bitewise_core::nav::{self, MenuState};
use gloo::events::EventListener;
use web_sys::{Document, Element};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

const TOGGLE_ID: &str = "hamburger-btn";
const MENU_ID: &str = "nav-menu";
const MARKETING_LINKS_ID: &str = "navLinks";
const MARKETING_HAMBURGER_SELECTOR: &str = ".hamburger";
const MARKETING_OPEN_CLASS: &str = "active";

pub(crate) struct MobileMenu {
    _click: EventListener,
}

impl MobileMenu {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let (Some(button), Some(menu)) = (
            cx.doc.get_element_by_id(TOGGLE_ID),
            cx.doc.get_element_by_id(MENU_ID),
        ) else {
            return Ok(None);
        };

        let target = button.clone();
        let click = EventListener::new(&target, "click", move |_| {
            let mut state = MenuState::new(menu.class_list().contains(nav::MENU_SHOW_CLASS));
            state.toggle();
            dom::set_class(&menu, nav::MENU_SHOW_CLASS, state.is_open());
            let _ = button.set_attribute("aria-expanded", state.aria_expanded());
        });
        Ok(Some(Self { _click: click }))
    }
}

impl Component for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }
}

fn marketing_parts(doc: &Document) -> Option<(Element, Element)> {
    Some((
        doc.get_element_by_id(MARKETING_LINKS_ID)?,
        dom::query(doc, MARKETING_HAMBURGER_SELECTOR)?,
    ))
}

/// Flip the marketing menu.
pub(crate) fn toggle_marketing(doc: &Document) {
    let Some((links, hamburger)) = marketing_parts(doc) else {
        return;
    };
    let mut state = MenuState::new(links.class_list().contains(MARKETING_OPEN_CLASS));
    let open = state.toggle();
    dom::set_class(&links, MARKETING_OPEN_CLASS, open);
    dom::set_class(&hamburger, MARKETING_OPEN_CLASS, open);
}

/// Close the marketing menu if it is open.
pub(crate) fn close_marketing(doc: &Document) {
    let Some((links, hamburger)) = marketing_parts(doc) else {
        return;
    };
    let mut state = MenuState::new(links.class_list().contains(MARKETING_OPEN_CLASS));
    if state.close() {
        dom::set_class(&links, MARKETING_OPEN_CLASS, false);
        dom::set_class(&hamburger, MARKETING_OPEN_CLASS, false);
    }
}
