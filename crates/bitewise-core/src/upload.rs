#![forbid(unsafe_code)]

//! Upload preview state machine.
//!
//! ```text
//!            accept(image/*)            complete(latest)
//!   Empty ──────────────────▶ Previewing ──────────────▶ ReadyToSubmit
//!     ▲                          │  ▲                         │
//!     │          remove()        │  └──── accept(image/*) ───┘
//!     └──────────────────────────┴─────────────────────────────┘
//! ```
//!
//! Decodes are asynchronous and may complete out of order. Each accepted file
//! gets a [`DecodeTicket`] carrying a monotonically increasing generation;
//! only the completion whose generation is still the latest is applied.
//! `remove` bumps the generation too, so a decode finishing after the user
//! removed the image is dropped.

/// Media type prefix accepted for preview.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Whether a file with this media type can be previewed.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Handle for one in-flight decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeTicket {
    generation: u64,
}

impl DecodeTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing selected; preview hidden, analyze disabled.
    Empty,
    /// A decode is in flight. Whatever was shown before stays shown.
    Previewing,
    /// Preview shown, analyze enabled.
    ReadyToSubmit,
}

/// DOM changes the host applies after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUpdate {
    /// `display: block` when true, `display: none` otherwise.
    pub visible: bool,
    /// New `src` for the preview image, if it changes.
    pub src: Option<String>,
    pub analyze_enabled: bool,
    /// Reset the file input's value.
    pub clear_input: bool,
}

impl PreviewUpdate {
    /// CSS `display` value for the preview container.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    generation: u64,
    pending: Option<u64>,
    preview: Option<String>,
}

impl UploadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> UploadPhase {
        match (&self.pending, &self.preview) {
            (Some(_), _) => UploadPhase::Previewing,
            (None, Some(_)) => UploadPhase::ReadyToSubmit,
            (None, None) => UploadPhase::Empty,
        }
    }

    /// Whether the analyze action is enabled.
    #[must_use]
    pub fn analyze_enabled(&self) -> bool {
        self.preview.is_some()
    }

    /// Data URL currently shown, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub const fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Offer a file for preview.
    ///
    /// Non-image media types are ignored and return `None`; an image starts a
    /// new generation and supersedes any decode still in flight.
    pub fn accept(&mut self, media_type: &str) -> Option<DecodeTicket> {
        if !is_image_media_type(media_type) {
            crate::debug!(media_type, "upload ignored: not an image");
            return None;
        }
        self.generation += 1;
        self.pending = Some(self.generation);
        crate::debug!(generation = self.generation, "upload decode started");
        Some(DecodeTicket {
            generation: self.generation,
        })
    }

    /// Apply a finished decode. Stale tickets return `None`.
    pub fn complete(&mut self, ticket: DecodeTicket, data_url: String) -> Option<PreviewUpdate> {
        if ticket.generation != self.generation {
            crate::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "stale upload decode dropped"
            );
            return None;
        }
        self.pending = None;
        self.preview = Some(data_url.clone());
        Some(PreviewUpdate {
            visible: true,
            src: Some(data_url),
            analyze_enabled: true,
            clear_input: false,
        })
    }

    /// Record a failed decode. The preview is left as it was.
    pub fn fail(&mut self, ticket: DecodeTicket) {
        if self.pending == Some(ticket.generation) {
            crate::warn!(generation = ticket.generation, "upload decode failed");
            self.pending = None;
        }
    }

    /// Reset to empty and invalidate any in-flight decode.
    pub fn remove(&mut self) -> PreviewUpdate {
        self.generation += 1;
        self.pending = None;
        self.preview = None;
        PreviewUpdate {
            visible: false,
            src: None,
            analyze_enabled: false,
            clear_input: true,
        }
    }
}

/// Visual affordance of the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneStyle {
    #[default]
    Idle,
    /// A drag is over the zone.
    Hover,
}

impl DropZoneStyle {
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Idle => "rgba(34, 197, 94, 0.3)",
            Self::Hover => "#22c55e",
        }
    }

    #[must_use]
    pub const fn background_color(self) -> &'static str {
        match self {
            Self::Idle => "transparent",
            Self::Hover => "rgba(34, 197, 94, 0.1)",
        }
    }
}
