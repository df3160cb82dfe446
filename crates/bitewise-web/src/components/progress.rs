#![forbid(unsafe_code)]

use bitewise_core::progress;

use super::{BindContext, Component};
use crate::BindError;
use crate::dom::{self, Observer};

const ITEM_SELECTOR: &str = ".progress-item";
const VALUE_SELECTOR: &str = ".progress-value";
const FILL_SELECTOR: &str = ".progress-fill";
const ANIMATED_SELECTOR: &str = ".progress-fill, .score-fill";

/// Sizes dashboard progress fills from their value labels and gives fills a
/// width transition once they scroll into view.
pub(crate) struct ProgressAnimator {
    _observer: Option<Observer>,
}

impl ProgressAnimator {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let items = dom::query_all(cx.doc, ITEM_SELECTOR);
        for item in &items {
            let Some(fill) = item.query_selector(FILL_SELECTOR).ok().flatten() else {
                continue;
            };
            let text = item
                .query_selector(VALUE_SELECTOR)
                .ok()
                .flatten()
                .and_then(|value| value.text_content())
                .unwrap_or_default();
            dom::set_style(&fill, "width", &progress::fill_width(&text));
        }

        let bars = dom::query_all(cx.doc, ANIMATED_SELECTOR);
        let observer = if bars.is_empty() {
            None
        } else {
            let observer = Observer::new(
                cx.config.reveal_threshold,
                &cx.config.root_margin,
                |bar| dom::set_style(&bar, "transition", progress::FILL_TRANSITION),
            )?;
            for bar in &bars {
                observer.observe(bar);
            }
            Some(observer)
        };

        if items.is_empty() && observer.is_none() {
            return Ok(None);
        }
        Ok(Some(Self {
            _observer: observer,
        }))
    }
}

impl Component for ProgressAnimator {
    fn name(&self) -> &'static str {
        "progress-animator"
    }
}
