#![forbid(unsafe_code)]

//! Scroll-triggered reveals and the page-load hero intro.

use bitewise_core::effects::reveal::{self, SlideIn};
use gloo::events::EventListener;
use web_sys::{Document, Element};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom::{self, Observer, Timers};

const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Adds `animate-in` to marketing sections as they enter the viewport and
/// slides their items in one after another.
pub(crate) struct SectionReveal {
    _observer: Observer,
    timers: Timers,
}

impl SectionReveal {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let sections = dom::query_all(cx.doc, reveal::SECTION_SELECTOR);
        if sections.is_empty() {
            return Ok(None);
        }
        let timers = Timers::default();
        let pending = timers.clone();
        let observer = Observer::new(
            cx.config.reveal_threshold,
            &cx.config.root_margin,
            move |section: Element| {
                dom::set_class(&section, reveal::ANIMATE_IN_CLASS, true);
                let items = dom::query_all_in(&section, reveal::SECTION_ITEM_SELECTOR);
                let offsets = reveal::stagger_offsets(items.len(), reveal::SECTION_ITEM_STEP);
                for (index, (item, delay)) in items.into_iter().zip(offsets).enumerate() {
                    pending.after(delay, move || {
                        dom::set_style(&item, "animation", &reveal::section_item_animation(index));
                    });
                }
            },
        )?;
        for section in &sections {
            observer.observe(section);
        }
        Ok(Some(Self {
            _observer: observer,
            timers,
        }))
    }
}

impl Component for SectionReveal {
    fn name(&self) -> &'static str {
        "section-reveal"
    }
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        self.timers.clear();
    }
}

/// Staggered slide-in of the personalization features, then its benefits.
pub(crate) struct PersonalizationReveal {
    _observer: Observer,
    timers: Timers,
}

impl PersonalizationReveal {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let Some(section) = dom::query(cx.doc, reveal::PERSONALIZATION_SELECTOR) else {
            return Ok(None);
        };
        let timers = Timers::default();
        let pending = timers.clone();
        let observer = Observer::new(
            cx.config.personalization_threshold,
            DEFAULT_ROOT_MARGIN,
            move |section: Element| reveal_personalization(&section, &pending),
        )?;
        observer.observe(&section);
        Ok(Some(Self {
            _observer: observer,
            timers,
        }))
    }
}

fn reveal_personalization(section: &Element, timers: &Timers) {
    let features = dom::query_all_in(section, reveal::PERSONALIZATION_FEATURE_SELECTOR);
    let offsets = reveal::stagger_offsets(features.len(), reveal::FEATURE_STEP);
    for (feature, delay) in features.into_iter().zip(offsets) {
        let settle = timers.clone();
        timers.after(delay, move || {
            dom::set_styles(&feature, &SlideIn::FEATURE.hidden);
            settle.after(reveal::SETTLE_DELAY, move || {
                dom::set_styles(&feature, &SlideIn::FEATURE.shown);
            });
        });
    }

    let benefits = dom::query_all_in(section, reveal::PERSONALIZATION_BENEFIT_SELECTOR);
    let stagger = timers.clone();
    timers.after(reveal::BENEFIT_START, move || {
        let offsets = reveal::stagger_offsets(benefits.len(), reveal::BENEFIT_STEP);
        for (benefit, delay) in benefits.into_iter().zip(offsets) {
            dom::set_styles(&benefit, &SlideIn::BENEFIT.hidden);
            stagger.after(delay, move || {
                dom::set_styles(&benefit, &SlideIn::BENEFIT.shown);
            });
        }
    });
}

impl Component for PersonalizationReveal {
    fn name(&self) -> &'static str {
        "personalization-reveal"
    }
}

impl Drop for PersonalizationReveal {
    fn drop(&mut self) {
        self.timers.clear();
    }
}

/// Marks `body` as loaded on window `load`, then animates the hero lines.
///
/// Mounting after `load` already fired plays the intro immediately.
pub(crate) struct HeroIntro {
    _load: Option<EventListener>,
    timers: Timers,
}

fn play_intro(doc: &Document, timers: &Timers) {
    if let Some(body) = doc.body() {
        dom::set_class(&body, reveal::LOADED_CLASS, true);
    }
    let doc = doc.clone();
    timers.after(reveal::HERO_DELAY, move || {
        let lines = dom::query_all(&doc, reveal::HERO_LINE_SELECTOR);
        for (index, line) in lines.iter().enumerate() {
            dom::set_style(line, "animation-delay", &reveal::hero_line_delay(index));
            dom::set_class(line, reveal::ANIMATE_IN_CLASS, true);
        }
    });
}

impl HeroIntro {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let timers = Timers::default();
        if reveal::load_already_fired(&cx.doc.ready_state()) {
            play_intro(cx.doc, &timers);
            return Ok(Some(Self {
                _load: None,
                timers,
            }));
        }
        let pending = timers.clone();
        let doc = cx.doc.clone();
        let load = EventListener::once(cx.window, "load", move |_| play_intro(&doc, &pending));
        Ok(Some(Self {
            _load: Some(load),
            timers,
        }))
    }
}

impl Component for HeroIntro {
    fn name(&self) -> &'static str {
        "hero-intro"
    }
}

impl Drop for HeroIntro {
    fn drop(&mut self) {
        self.timers.clear();
    }
}
