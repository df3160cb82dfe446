#![forbid(unsafe_code)]

//! Page components.
//!
//! Each component binds once against the document and owns everything it
//! registered: element handles, event listeners, intervals, pending
//! timeouts, observers. Dropping a component unregisters all of it.
//!
//! `bind` returns `Ok(None)` when the elements a component needs are absent;
//! that is the normal case on pages that do not carry the feature.

use bitewise_core::PageConfig;
use web_sys::{Document, Window};

use crate::BindError;
use crate::mount;

pub(crate) mod auth;
pub(crate) mod carousel;
pub(crate) mod forms;
pub(crate) mod greeter;
pub(crate) mod hover;
pub(crate) mod menu;
pub(crate) mod nav;
pub(crate) mod parallax;
pub(crate) mod particles;
pub(crate) mod personalize;
pub(crate) mod progress;
pub(crate) mod reveal;
pub(crate) mod ripple;
pub(crate) mod scroll;
pub(crate) mod toast;
pub(crate) mod upload;

/// A bound feature block.
pub(crate) trait Component {
    /// Stable name reported by `mountedComponents()`.
    fn name(&self) -> &'static str;
}

/// What every `bind` gets to look at.
pub(crate) struct BindContext<'a> {
    pub window: &'a Window,
    pub doc: &'a Document,
    pub config: &'a PageConfig,
}

fn push<C: Component + 'static>(
    mounted: &mut Vec<Box<dyn Component>>,
    bound: Result<Option<C>, BindError>,
) {
    if let Some(component) = mount::admit(bound) {
        tracing::debug!(component = component.name(), "component bound");
        mounted.push(Box::new(component));
    }
}

/// Bind every component whose elements are present.
///
/// Components are independent; the order only fixes which listener runs
/// first when two share an event. A component that fails to bind is logged
/// and skipped.
pub(crate) fn mount_all(cx: &BindContext<'_>) -> Vec<Box<dyn Component>> {
    let mut mounted = Vec::new();
    push(&mut mounted, nav::NavHighlighter::bind(cx));
    push(&mut mounted, menu::MobileMenu::bind(cx));
    push(&mut mounted, carousel::QuoteCarousel::bind(cx));
    push(&mut mounted, upload::UploadHandler::bind(cx));
    push(&mut mounted, scroll::AnchorScroller::bind(cx));
    push(&mut mounted, forms::SubmitHooks::bind(cx));
    push(&mut mounted, greeter::DashboardGreeter::bind(cx));
    push(&mut mounted, progress::ProgressAnimator::bind(cx));
    push(&mut mounted, hover::HoverBinder::bind(cx));
    push(&mut mounted, auth::AuthForms::bind(cx));
    push(&mut mounted, reveal::SectionReveal::bind(cx));
    push(&mut mounted, reveal::PersonalizationReveal::bind(cx));
    push(&mut mounted, reveal::HeroIntro::bind(cx));
    push(&mut mounted, parallax::ParallaxScroller::bind(cx));
    push(&mut mounted, particles::ParticleField::bind(cx));
    push(&mut mounted, ripple::RippleBinder::bind(cx));
    push(&mut mounted, personalize::PersonalizationDemo::bind(cx));
    mounted
}
