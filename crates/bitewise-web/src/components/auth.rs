#![forbid(unsafe_code)]

//! Signup/login guide panels.
//!
//! Every block binds only when its own elements exist, so the login page
//! (password + toggle) and the signup page (all fields) share one component.
//! Feedback is cosmetic; the forms always submit.

use std::rc::Rc;

use bitewise_core::auth_form::{self, FieldFeedback, InputKind};
use bitewise_core::validation::{PasswordChecks, PasswordRule};
use gloo::events::EventListener;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

const USERNAME_ID: &str = "username";
const USERNAME_GUIDE_ID: &str = "username-guide";
const USERNAME_BOX_ID: &str = "confirm-uname";
const EMAIL_ID: &str = "email";
const EMAIL_GUIDE_ID: &str = "email-guide";
const EMAIL_MSG_ID: &str = "email-msg";
const PASSWORD_ID: &str = "password";
const PASSWORD_GUIDE_ID: &str = "password-guide";
const CONFIRM_ID: &str = "confirm_password";
const CONFIRM_GUIDE_ID: &str = "confirm-guide";
const MATCH_MSG_ID: &str = "match-msg";
const TOGGLE_IDS: [&str; 2] = ["toggleConfirmPassword", "toggleConfirmPassword_login"];

fn show(panel: &HtmlElement, visible: bool) {
    let _ = panel
        .style()
        .set_property("display", auth_form::guide_display(visible));
}

fn render(target: &Element, feedback: FieldFeedback) {
    target.set_class_name(feedback.class_name());
    target.set_text_content(Some(feedback.message));
}

/// Password + confirmation pair used by the match check.
struct MatchCheck {
    password: HtmlInputElement,
    confirm: HtmlInputElement,
    message: Element,
}

impl MatchCheck {
    fn lookup(doc: &Document) -> Option<Self> {
        Some(Self {
            password: dom::by_id(doc, PASSWORD_ID)?,
            confirm: dom::by_id(doc, CONFIRM_ID)?,
            message: doc.get_element_by_id(MATCH_MSG_ID)?,
        })
    }

    fn run(&self) {
        let feedback = auth_form::confirm_feedback(&self.password.value(), &self.confirm.value());
        render(&self.message, feedback);
    }
}

/// Wire focus/blur to a guide panel. `on_focus` runs after the panel opens.
fn guide_listeners(
    input: &HtmlInputElement,
    panels: Vec<HtmlElement>,
    on_focus: impl Fn() + 'static,
) -> [EventListener; 2] {
    for panel in &panels {
        show(panel, false);
    }
    let panels = Rc::new(panels);
    let shown = Rc::clone(&panels);
    let focus = EventListener::new(input, "focus", move |_| {
        for panel in shown.iter() {
            show(panel, true);
        }
        on_focus();
    });
    let blur = EventListener::new(input, "blur", move |_| {
        for panel in panels.iter() {
            show(panel, false);
        }
    });
    [focus, blur]
}

pub(crate) struct AuthForms {
    _listeners: Vec<EventListener>,
}

impl AuthForms {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let doc = cx.doc;
        let mut listeners = Vec::new();
        bind_username(doc, &mut listeners);
        bind_email(doc, &mut listeners);
        bind_password(doc, &mut listeners);
        bind_confirm(doc, &mut listeners);
        bind_visibility_toggles(doc, &mut listeners);
        if listeners.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

impl Component for AuthForms {
    fn name(&self) -> &'static str {
        "auth-forms"
    }
}

fn bind_username(doc: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(input), Some(guide), Some(panel)) = (
        dom::by_id::<HtmlInputElement>(doc, USERNAME_ID),
        dom::by_id::<HtmlElement>(doc, USERNAME_GUIDE_ID),
        dom::by_id::<HtmlElement>(doc, USERNAME_BOX_ID),
    ) else {
        return;
    };

    let (field, message) = (input.clone(), guide.clone());
    listeners.extend(guide_listeners(&input, vec![panel, guide.clone()], move || {
        render(&message, auth_form::username_focus_feedback(&field.value()));
    }));

    let field = input.clone();
    listeners.push(EventListener::new(&input, "input", move |_| {
        render(&guide, auth_form::username_feedback(&field.value()));
    }));
}

fn bind_email(doc: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(input), Some(guide), Some(message)) = (
        dom::by_id::<HtmlInputElement>(doc, EMAIL_ID),
        dom::by_id::<HtmlElement>(doc, EMAIL_GUIDE_ID),
        doc.get_element_by_id(EMAIL_MSG_ID),
    ) else {
        return;
    };

    let validate = {
        let input = input.clone();
        Rc::new(move || render(&message, auth_form::email_feedback(&input.value())))
    };
    let on_focus = Rc::clone(&validate);
    listeners.extend(guide_listeners(&input, vec![guide], move || on_focus()));
    listeners.push(EventListener::new(&input, "input", move |_| validate()));
}

fn bind_password(doc: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(input), Some(guide)) = (
        dom::by_id::<HtmlInputElement>(doc, PASSWORD_ID),
        dom::by_id::<HtmlElement>(doc, PASSWORD_GUIDE_ID),
    ) else {
        return;
    };

    listeners.extend(guide_listeners(&input, vec![guide], || {}));

    let rule_items: Vec<(PasswordRule, Element)> = PasswordRule::ALL
        .into_iter()
        .filter_map(|rule| Some((rule, doc.get_element_by_id(rule.element_id())?)))
        .collect();
    let match_check = MatchCheck::lookup(doc);
    let field = input.clone();
    listeners.push(EventListener::new(&input, "input", move |_| {
        let checks = PasswordChecks::evaluate(&field.value());
        for (rule, item) in &rule_items {
            let class = if checks.passes(*rule) {
                auth_form::VALID_CLASS
            } else {
                ""
            };
            item.set_class_name(class);
        }
        if let Some(check) = &match_check {
            check.run();
        }
    }));
}

fn bind_confirm(doc: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(input), Some(guide)) = (
        dom::by_id::<HtmlInputElement>(doc, CONFIRM_ID),
        dom::by_id::<HtmlElement>(doc, CONFIRM_GUIDE_ID),
    ) else {
        return;
    };

    let check = Rc::new(MatchCheck::lookup(doc));
    let on_focus = Rc::clone(&check);
    listeners.extend(guide_listeners(&input, vec![guide], move || {
        if let Some(check) = on_focus.as_ref() {
            check.run();
        }
    }));
    listeners.push(EventListener::new(&input, "input", move |_| {
        if let Some(check) = check.as_ref() {
            check.run();
        }
    }));
}

fn bind_visibility_toggles(doc: &Document, listeners: &mut Vec<EventListener>) {
    let Some(password) = dom::by_id::<HtmlInputElement>(doc, PASSWORD_ID) else {
        return;
    };
    for id in TOGGLE_IDS {
        let Some(button) = doc.get_element_by_id(id) else {
            continue;
        };
        let (field, icon) = (password.clone(), button.clone());
        listeners.push(EventListener::new(&button, "click", move |_| {
            let kind = InputKind::from_type_attr(field.get_attribute("type").as_deref()).toggled();
            let _ = field.set_attribute("type", kind.as_type_attr());
            let classes = icon.class_list();
            let _ = classes.toggle(auth_form::ICON_EYE);
            let _ = classes.toggle(auth_form::ICON_EYE_SLASH);
        }));
    }
}
