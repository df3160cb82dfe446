#![forbid(unsafe_code)]

//! Drag-and-drop / picker image upload with an in-page preview.
//!
//! Decodes are tagged with the generation [`UploadState::accept`] hands out;
//! a decode that finishes after a newer file was offered, or after
//! `removeImage()`, is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bitewise_core::upload::{DecodeTicket, DropZoneStyle, PreviewUpdate, UploadState};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::file::callbacks::{FileReader, read_as_data_url};
use gloo::file::FileReadError;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Event, HtmlButtonElement, HtmlElement, HtmlImageElement,
    HtmlInputElement,
};

use super::{BindContext, Component};
use crate::BindError;
use crate::dom;

const ZONE_ID: &str = "uploadZone";
const INPUT_ID: &str = "photoInput";
const PREVIEW_ID: &str = "imagePreview";
const PREVIEW_IMG_ID: &str = "previewImg";
const ANALYZE_ID: &str = "analyzeBtn";

thread_local! {
    static ACTIVE: RefCell<Weak<Inner>> = RefCell::new(Weak::new());
}

/// Elements the preview writes to. Only the file input is required.
struct PreviewElements {
    input: HtmlInputElement,
    preview: Option<HtmlElement>,
    image: Option<HtmlImageElement>,
    analyze: Option<HtmlButtonElement>,
}

impl PreviewElements {
    fn lookup(doc: &Document) -> Option<Self> {
        Some(Self {
            input: dom::by_id(doc, INPUT_ID)?,
            preview: dom::by_id(doc, PREVIEW_ID),
            image: dom::by_id(doc, PREVIEW_IMG_ID),
            analyze: dom::by_id(doc, ANALYZE_ID),
        })
    }

    fn apply(&self, update: &PreviewUpdate) {
        if let Some(preview) = &self.preview {
            let _ = preview.style().set_property("display", update.display());
        }
        if let (Some(image), Some(src)) = (&self.image, &update.src) {
            image.set_src(src);
        }
        if let Some(analyze) = &self.analyze {
            analyze.set_disabled(!update.analyze_enabled);
        }
        if update.clear_input {
            self.input.set_value("");
        }
    }
}

struct Inner {
    zone: HtmlElement,
    elements: PreviewElements,
    state: RefCell<UploadState>,
    reader: RefCell<Option<FileReader>>,
}

impl Inner {
    fn style_zone(&self, style: DropZoneStyle) {
        let css = self.zone.style();
        let _ = css.set_property("border-color", style.border_color());
        let _ = css.set_property("background-color", style.background_color());
    }

    fn offer(self: &Rc<Self>, file: web_sys::File) {
        let Some(ticket) = self.state.borrow_mut().accept(&file.type_()) else {
            return;
        };
        let file = gloo::file::File::from(file);
        let weak = Rc::downgrade(self);
        let reader = read_as_data_url(&file, move |result| {
            if let Some(inner) = weak.upgrade() {
                inner.finish(ticket, result);
            }
        });
        // Replacing the reader aborts the superseded read.
        *self.reader.borrow_mut() = Some(reader);
    }

    fn finish(&self, ticket: DecodeTicket, result: Result<String, FileReadError>) {
        match result {
            Ok(data_url) => {
                let update = self.state.borrow_mut().complete(ticket, data_url);
                if let Some(update) = update {
                    self.elements.apply(&update);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "image decode failed");
                self.state.borrow_mut().fail(ticket);
            }
        }
    }

    fn remove(&self) {
        let update = self.state.borrow_mut().remove();
        self.reader.borrow_mut().take();
        self.elements.apply(&update);
    }
}

fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files?.get(0)
}

pub(crate) struct UploadHandler {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl UploadHandler {
    pub(crate) fn bind(cx: &BindContext<'_>) -> Result<Option<Self>, BindError> {
        let (Some(zone), Some(elements)) = (
            dom::by_id::<HtmlElement>(cx.doc, ZONE_ID),
            PreviewElements::lookup(cx.doc),
        ) else {
            return Ok(None);
        };
        let inner = Rc::new(Inner {
            zone,
            elements,
            state: RefCell::new(UploadState::new()),
            reader: RefCell::new(None),
        });
        let zone = inner.zone.clone();
        let input = inner.elements.input.clone();
        let blocking = EventListenerOptions::enable_prevent_default();

        let mut listeners = Vec::with_capacity(5);
        let it = Rc::clone(&inner);
        listeners.push(EventListener::new_with_options(
            &zone,
            "dragover",
            blocking,
            move |event: &Event| {
                event.prevent_default();
                it.style_zone(DropZoneStyle::Hover);
            },
        ));
        let it = Rc::clone(&inner);
        listeners.push(EventListener::new_with_options(
            &zone,
            "dragleave",
            blocking,
            move |event: &Event| {
                event.prevent_default();
                it.style_zone(DropZoneStyle::Idle);
            },
        ));
        let it = Rc::clone(&inner);
        listeners.push(EventListener::new_with_options(
            &zone,
            "drop",
            blocking,
            move |event: &Event| {
                event.prevent_default();
                it.style_zone(DropZoneStyle::Idle);
                let files = event
                    .dyn_ref::<DragEvent>()
                    .and_then(DragEvent::data_transfer)
                    .and_then(|transfer| transfer.files());
                if let Some(file) = first_file(files) {
                    it.offer(file);
                }
            },
        ));
        let picker = input.clone();
        listeners.push(EventListener::new(&zone, "click", move |_| picker.click()));
        let it = Rc::clone(&inner);
        let changed = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_| {
            if let Some(file) = first_file(changed.files()) {
                it.offer(file);
            }
        }));

        ACTIVE.with(|active| *active.borrow_mut() = Rc::downgrade(&inner));
        Ok(Some(Self {
            inner,
            _listeners: listeners,
        }))
    }
}

impl Component for UploadHandler {
    fn name(&self) -> &'static str {
        "upload-handler"
    }
}

impl Drop for UploadHandler {
    fn drop(&mut self) {
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if Weak::ptr_eq(&active, &Rc::downgrade(&self.inner)) {
                *active = Weak::new();
            }
        });
    }
}

/// `removeImage()`: reset the preview and drop any decode in flight.
pub(crate) fn remove_image(doc: &Document) {
    if let Some(inner) = ACTIVE.with(|active| active.borrow().upgrade()) {
        inner.remove();
        return;
    }
    if let Some(elements) = PreviewElements::lookup(doc) {
        elements.apply(&UploadState::new().remove());
    }
}

/// `openCamera()`: ask for the rear camera and open the picker.
pub(crate) fn open_camera(doc: &Document) {
    let Some(input) = dom::by_id::<HtmlInputElement>(doc, INPUT_ID) else {
        return;
    };
    let _ = input.set_attribute("capture", "environment");
    input.click();
}
