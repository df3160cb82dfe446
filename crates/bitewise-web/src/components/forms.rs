#![forbid(unsafe_code)]

use gloo::events::EventListener;

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

const FORM_SELECTOR: &str = ".login-form, .signup-form, .upload-form";

/// Observes form submission without interfering; the native POST proceeds.
pub(crate) struct SubmitHooks {
    _submits: Vec<EventListener>,
}

impl SubmitHooks {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let forms = dom::query_all(cx.doc, FORM_SELECTOR);
        if forms.is_empty() {
            return Ok(None);
        }
        let submits = forms
            .iter()
            .map(|form| {
                let class = form.class_name();
                EventListener::new(form, "submit", move |_| {
                    tracing::debug!(form = %class, "form submitted");
                })
            })
            .collect();
        Ok(Some(Self { _submits: submits }))
    }
}

impl Component for SubmitHooks {
    fn name(&self) -> &'static str {
        "submit-hooks"
    }
}
