#![forbid(unsafe_code)]

//! Core: deterministic view state for the BiteWise pages.
//!
//! Everything the page scripts decide lives here, independent of the DOM:
//! - field validators and their guide messages,
//! - the quote carousel and personalization step cursors,
//! - the upload preview state machine (generation-ordered decodes),
//! - effect geometry (ripples, parallax, particles, staggered reveals),
//! - page configuration and the cached user record.
//!
//! The `bitewise-web` crate binds these to the document. Nothing in this
//! crate touches a browser API, so all of it is testable natively.

pub mod auth_form;
pub mod carousel;
pub mod config;
pub mod effects;
pub mod error;
pub mod logging;
pub mod nav;
pub mod progress;
pub mod scroll;
pub mod steps;
pub mod toast;
pub mod typing;
pub mod upload;
pub mod user;
pub mod validation;

pub use config::PageConfig;
pub use error::ConfigError;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
