#![forbid(unsafe_code)]

//! Errors raised while loading page configuration.
//!
//! Page behaviour itself never fails: missing elements are skipped and
//! invalid input only changes guide messages. Configuration is the one place
//! where the host can hand us something unusable.

use thiserror::Error;

/// Configuration could not be parsed or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload was malformed or carried unknown fields.
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A timer interval was zero.
    #[error("`{field}` must be greater than zero")]
    ZeroInterval { field: &'static str },

    /// An intersection threshold fell outside `[0, 1]`.
    #[error("`{field}` must be within [0, 1], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },

    /// A count exceeded what the page can render.
    #[error("`{field}` must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },

    /// `root_margin` is not one to four `px`/`%` lengths.
    #[error("`root_margin` must be one to four px or % lengths, got {value:?}")]
    RootMargin { value: String },

    /// A required string field was empty.
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },
}
