#![forbid(unsafe_code)]

use bitewise_core::effects::particles;
use web_sys::Element;

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

/// Floating particles appended to the scan section. Removed again on drop.
pub(crate) struct ParticleField {
    particles: Vec<Element>,
}

impl ParticleField {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let Some(container) = dom::query(cx.doc, particles::CONTAINER_SELECTOR) else {
            return Ok(None);
        };
        // The layout is deterministic per seed; the page wants a fresh one each load.
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut appended = Vec::new();
        for particle in particles::generate(cx.config.particle_count, seed) {
            let el = cx
                .doc
                .create_element("div")
                .map_err(|err| BindError::js("createElement", dom::js_message(&err)))?;
            let _ = el.set_attribute("style", &particle.css_text());
            container
                .append_child(&el)
                .map_err(|err| BindError::js("appendChild", dom::js_message(&err)))?;
            appended.push(el);
        }
        tracing::debug!(count = appended.len(), seed, "particles created");
        Ok(Some(Self {
            particles: appended,
        }))
    }
}

impl Component for ParticleField {
    fn name(&self) -> &'static str {
        "particle-field"
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        for particle in &self.particles {
            particle.remove();
        }
    }
}
