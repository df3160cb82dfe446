#![forbid(unsafe_code)]

use bitewise_core::ConfigError;
use thiserror::Error;

/// Mounting the page failed.
///
/// A component whose elements are absent is not an error; it is skipped.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A browser API threw while a component was being bound.
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl BindError {
    pub fn js(context: &'static str, message: impl Into<String>) -> Self {
        Self::Js {
            context,
            message: message.into(),
        }
    }
}
