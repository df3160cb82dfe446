#![forbid(unsafe_code)]

use bitewise_core::carousel::{self, Carousel};
use gloo::timers::callback::Interval;

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

const QUOTE_SELECTOR: &str = ".quote-card";

/// Rotates the `active` class through `.quote-card` elements on a timer.
///
/// Starts from the card already marked active (or the first one) and clears
/// any other marker so exactly one card is active.
pub(crate) struct QuoteCarousel {
    _timer: Interval,
}

impl QuoteCarousel {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let cards = dom::query_all(cx.doc, QUOTE_SELECTOR);
        if cards.is_empty() {
            return Ok(None);
        }

        let start = cards
            .iter()
            .position(|card| card.class_list().contains(carousel::ACTIVE_CLASS))
            .unwrap_or(0);
        let mut state = Carousel::with_start(cards.len(), start);
        for (i, card) in cards.iter().enumerate() {
            dom::set_class(card, carousel::ACTIVE_CLASS, state.active() == Some(i));
        }
        tracing::debug!(quotes = cards.len(), start, "quote carousel bound");

        let timer = Interval::new(dom::millis(cx.config.quote_interval()), move || {
            if let Some(step) = state.tick() {
                dom::set_class(&cards[step.deactivate], carousel::ACTIVE_CLASS, false);
                dom::set_class(&cards[step.activate], carousel::ACTIVE_CLASS, true);
            }
        });
        Ok(Some(Self { _timer: timer }))
    }
}

impl Component for QuoteCarousel {
    fn name(&self) -> &'static str {
        "quote-carousel"
    }
}
