#![forbid(unsafe_code)]

use bitewise_core::toast::{self, Toast};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::BindError;
use crate::dom;

fn child(doc: &Document, parent: &Element, tag: &str) -> Result<Element, BindError> {
    let el = doc
        .create_element(tag)
        .map_err(|err| BindError::js("createElement", dom::js_message(&err)))?;
    parent
        .append_child(&el)
        .map_err(|err| BindError::js("appendChild", dom::js_message(&err)))?;
    Ok(el)
}

/// Append a toast to `body` and remove it after its lifetime.
///
/// The message is set as text, never parsed as markup.
pub(crate) fn show(doc: &Document, toast: &Toast) -> Result<(), BindError> {
    let body = doc.body().ok_or(BindError::NoDocument)?;
    dom::inject_style_once(doc, toast::STYLE_CLASS, toast::STYLES);

    let root = doc
        .create_element("div")
        .map_err(|err| BindError::js("createElement", dom::js_message(&err)))?;
    root.set_class_name(&toast.class_name());
    let content = child(doc, &root, "div")?;
    content.set_class_name("toast-content");
    child(doc, &content, "i")?.set_class_name(&toast.icon_class());
    child(doc, &content, "span")?.set_text_content(Some(toast.message()));
    body.append_child(&root)
        .map_err(|err| BindError::js("appendChild", dom::js_message(&err)))?;

    tracing::debug!(kind = toast.kind().name(), "toast shown");
    Timeout::new(dom::millis(toast.lifetime()), move || root.remove()).forget();
    Ok(())
}
