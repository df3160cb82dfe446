#![forbid(unsafe_code)]

use std::cell::Cell;
use std::time::Duration;

use bitewise_core::PageConfig;
use bitewise_core::effects::PAGE_KEYFRAMES;
use bitewise_core::toast::{self, Toast, ToastKind};
use tracing_subscriber::prelude::*;
use wasm_bindgen::prelude::*;

use crate::BindError;
use crate::components::{self, BindContext, Component, menu, scroll, upload};
use crate::dom;
use crate::logging::{BrowserConsole, ConsoleLayer};

const KEYFRAMES_CLASS: &str = "bitewise-keyframes";

thread_local! {
    static TOAST_LIFETIME: Cell<Duration> = const { Cell::new(toast::DEFAULT_LIFETIME) };
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn init_logging(config: &PageConfig) {
    // Only the first mount installs the subscriber; later ones keep it.
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(BrowserConsole, config.log_level))
        .try_init();
}

/// The bound page.
///
/// Holds every mounted component. Dropping it (or calling `destroy`)
/// removes all listeners, timers, observers and injected particles.
#[wasm_bindgen]
pub struct BiteWisePage {
    components: Vec<Box<dyn Component>>,
    config: PageConfig,
}

#[wasm_bindgen]
impl BiteWisePage {
    /// Bind all components present in the current document.
    ///
    /// `config_json` overrides any subset of the defaults; unknown keys and
    /// out-of-range values are rejected.
    pub fn mount(config_json: Option<String>) -> Result<BiteWisePage, JsValue> {
        console_error_panic_hook::set_once();
        let config = match config_json.as_deref() {
            Some(json) => PageConfig::from_json_str(json).map_err(BindError::from)?,
            None => PageConfig::default(),
        };
        init_logging(&config);
        TOAST_LIFETIME.with(|lifetime| lifetime.set(config.toast_lifetime()));

        let window = dom::window()?;
        let doc = dom::document()?;
        dom::inject_style_once(&doc, KEYFRAMES_CLASS, PAGE_KEYFRAMES);

        let cx = BindContext {
            window: &window,
            doc: &doc,
            config: &config,
        };
        let components = components::mount_all(&cx);
        tracing::info!(count = components.len(), "page mounted");
        Ok(Self { components, config })
    }

    /// Names of the components bound by `mount`, in binding order.
    #[wasm_bindgen(js_name = mountedComponents)]
    pub fn mounted_components(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| component.name().to_string())
            .collect()
    }

    /// The effective configuration as a plain JS object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        let json = self.config.to_json_string().map_err(BindError::from)?;
        js_sys::JSON::parse(&json)
    }

    /// Unbind everything. Safe to call more than once.
    pub fn destroy(&mut self) {
        if !self.components.is_empty() {
            tracing::info!(count = self.components.len(), "page destroyed");
        }
        self.components.clear();
    }
}

/// Opens the file picker of the upload input.
#[wasm_bindgen(js_name = openCamera)]
pub fn open_camera() {
    if let Ok(doc) = dom::document() {
        upload::open_camera(&doc);
    }
}

/// Clears the upload preview and the file input.
#[wasm_bindgen(js_name = removeImage)]
pub fn remove_image() {
    if let Ok(doc) = dom::document() {
        upload::remove_image(&doc);
    }
}

/// Shows a transient notification. `kind` is `success`, `error`, `info`
/// (default) or any other name used as a class suffix.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let doc = dom::document()?;
    let lifetime = TOAST_LIFETIME.with(Cell::get);
    let toast = Toast::new(message)
        .with_kind(ToastKind::parse(kind.as_deref()))
        .with_lifetime(lifetime);
    components::toast::show(&doc, &toast)?;
    Ok(())
}

/// Toggles the marketing navigation links and hamburger icon together.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    if let Ok(doc) = dom::document() {
        menu::toggle_marketing(&doc);
    }
}

/// Smoothly scrolls the element with `id` into view. Unknown ids are ignored.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    if let Ok(doc) = dom::document() {
        scroll::scroll_to_id(&doc, id);
    }
}
