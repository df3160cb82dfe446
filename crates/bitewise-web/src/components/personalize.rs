#![forbid(unsafe_code)]

//! The simulated multi-step personalization form.
//!
//! A step cursor drives which `.form-section` and `.step-dot` are active,
//! the progress fill, and the prev/next buttons. The timer wraps; the
//! buttons clamp. Goal options select exclusively, diet tags toggle, and the
//! `.input-field` texts are re-typed one character at a time.

use std::cell::RefCell;
use std::rc::Rc;

use bitewise_core::steps::{ACTIVE_CLASS, SelectionMode, StepCursor, StepView};
use bitewise_core::typing::{self, TypingSimulation};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom::{self, Timers};

const SECTION_SELECTOR: &str = ".form-section";
const DOT_SELECTOR: &str = ".step-dot";
const NEXT_SELECTOR: &str = ".next-btn";
const PREV_SELECTOR: &str = ".prev-btn";
const FILL_SELECTOR: &str = ".progress-fill";
const GOAL_SELECTOR: &str = ".goal-option";
const TAG_SELECTOR: &str = ".diet-tag";
const TYPED_FIELD_SELECTOR: &str = ".input-field";

/// Everything a step change writes to.
struct StepElements {
    sections: Vec<Element>,
    dots: Vec<Element>,
    fill: Option<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
}

impl StepElements {
    fn render(&self, view: StepView) {
        for (i, section) in self.sections.iter().enumerate() {
            dom::set_class(section, ACTIVE_CLASS, view.is_active(i));
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, view.is_active(i));
        }
        if let Some(fill) = &self.fill {
            dom::set_style(fill, "width", &view.progress_width());
        }
        for (button, state) in [(&self.prev, view.prev), (&self.next, view.next)] {
            if let Some(button) = button {
                let _ = button.style().set_property("opacity", state.opacity());
                button.set_disabled(state.disabled);
            }
        }
    }
}

struct Steps {
    cursor: RefCell<StepCursor>,
    elements: StepElements,
}

impl Steps {
    fn apply(&self, moved: impl FnOnce(&mut StepCursor) -> Option<usize>) {
        let view = {
            let mut cursor = self.cursor.borrow_mut();
            if moved(&mut *cursor).is_none() {
                return;
            }
            cursor.view()
        };
        if let Some(view) = view {
            self.elements.render(view);
        }
    }
}

pub(crate) struct PersonalizationDemo {
    _listeners: Vec<EventListener>,
    _auto_advance: Option<Interval>,
    typing: Vec<Rc<RefCell<Option<Interval>>>>,
    timers: Timers,
}

impl PersonalizationDemo {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let doc = cx.doc;
        let sections = dom::query_all(doc, SECTION_SELECTOR);
        let goals = dom::query_all(doc, GOAL_SELECTOR);
        let tags = dom::query_all(doc, TAG_SELECTOR);
        let fields = dom::query_all(doc, TYPED_FIELD_SELECTOR);
        if sections.is_empty() && goals.is_empty() && tags.is_empty() && fields.is_empty() {
            return Ok(None);
        }

        let mut listeners = Vec::new();
        let mut auto_advance = None;
        if !sections.is_empty() {
            let steps = Rc::new(Steps {
                cursor: RefCell::new(StepCursor::new(sections.len())),
                elements: StepElements {
                    sections,
                    dots: dom::query_all(doc, DOT_SELECTOR),
                    fill: dom::query(doc, FILL_SELECTOR),
                    prev: dom::query(doc, PREV_SELECTOR).and_then(|el| el.dyn_into().ok()),
                    next: dom::query(doc, NEXT_SELECTOR).and_then(|el| el.dyn_into().ok()),
                },
            });
            if let Some(view) = steps.cursor.borrow().view() {
                steps.elements.render(view);
            }

            if cx.config.auto_advance {
                let ticking = Rc::clone(&steps);
                auto_advance = Some(Interval::new(
                    dom::millis(cx.config.step_interval()),
                    move || ticking.apply(StepCursor::tick),
                ));
            }
            if let Some(next) = steps.elements.next.clone() {
                let it = Rc::clone(&steps);
                listeners.push(EventListener::new(&next, "click", move |_| {
                    it.apply(StepCursor::next);
                }));
            }
            if let Some(prev) = steps.elements.prev.clone() {
                let it = Rc::clone(&steps);
                listeners.push(EventListener::new(&prev, "click", move |_| {
                    it.apply(StepCursor::prev);
                }));
            }
        }

        bind_selection(goals, SelectionMode::Exclusive, &mut listeners);
        bind_selection(tags, SelectionMode::Toggle, &mut listeners);

        let timers = Timers::default();
        let typing = start_typing(fields, cx, &timers);

        Ok(Some(Self {
            _listeners: listeners,
            _auto_advance: auto_advance,
            typing,
            timers,
        }))
    }
}

/// Click handling for a group of options sharing a selection mode.
fn bind_selection(options: Vec<Element>, mode: SelectionMode, listeners: &mut Vec<EventListener>) {
    let options = Rc::new(options);
    for (index, option) in options.iter().enumerate() {
        let group = Rc::clone(&options);
        listeners.push(EventListener::new(option, "click", move |_| {
            let class = mode.class();
            let current: Vec<bool> = group
                .iter()
                .map(|el| el.class_list().contains(class))
                .collect();
            for (el, on) in group.iter().zip(mode.apply(&current, index)) {
                dom::set_class(el, class, on);
            }
        }));
    }
}

/// Schedule the typing simulation for each field, staggered by index.
fn start_typing(
    fields: Vec<Element>,
    cx: &BindContext<'_>,
    timers: &Timers,
) -> Vec<Rc<RefCell<Option<Interval>>>> {
    let stagger = cx.config.typing_stagger();
    let interval_ms = dom::millis(cx.config.typing_interval());
    fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let text = field.text_content().unwrap_or_default();
            let pending = Rc::clone(&slot);
            timers.after(typing::start_delay(index, stagger), move || {
                let mut simulation = TypingSimulation::new(&text);
                field.set_text_content(Some(""));
                let owner = Rc::downgrade(&pending);
                let interval = Interval::new(interval_ms, move || match simulation.tick() {
                    Some(visible) => field.set_text_content(Some(&visible)),
                    None => {
                        if let Some(slot) = owner.upgrade() {
                            slot.borrow_mut().take();
                        }
                    }
                });
                *pending.borrow_mut() = Some(interval);
            });
            slot
        })
        .collect()
}

impl Component for PersonalizationDemo {
    fn name(&self) -> &'static str {
        "personalization-demo"
    }
}

impl Drop for PersonalizationDemo {
    fn drop(&mut self) {
        self.timers.clear();
        for slot in &self.typing {
            slot.borrow_mut().take();
        }
    }
}
