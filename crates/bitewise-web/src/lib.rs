#![forbid(unsafe_code)]

//! WASM page behaviours for BiteWise.
//!
//! `BiteWisePage.mount()` binds every component whose elements exist in the
//! current document: navigation highlighting, the mobile menus, the quote
//! carousel, the upload preview, auth form validation, the personalization
//! demo, and the decorative effects. The host calls `destroy()` to
//! unregister all of it.
//!
//! A handful of free functions are exported for inline `onclick` handlers:
//! `openCamera`, `removeImage`, `showToast`, `toggleMobileMenu` and
//! `scrollToSection`.
//!
//! All decisions are made in `bitewise-core`; this crate only measures the
//! DOM and writes the results back.

mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod mount;

pub mod logging;

pub use error::BindError;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::BiteWisePage;

#[cfg(not(target_arch = "wasm32"))]
use bitewise_core::PageConfig;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets. Configuration is still parsed and validated.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct BiteWisePage {
    config: PageConfig,
}

#[cfg(not(target_arch = "wasm32"))]
impl BiteWisePage {
    /// Parse the optional JSON config. There is no document to bind against.
    pub fn mount(config_json: Option<&str>) -> Result<Self, BindError> {
        let config = match config_json {
            Some(json) => PageConfig::from_json_str(json)?,
            None => PageConfig::default(),
        };
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Always empty: nothing binds outside a browser.
    #[must_use]
    pub fn mounted_components(&self) -> Vec<&'static str> {
        Vec::new()
    }

    pub fn destroy(&mut self) {}
}
