#![forbid(unsafe_code)]

//! Transient notifications.
//!
//! A toast is a fixed-position `div.toast.toast-{kind}` holding an icon and a
//! message. The stylesheet is injected once per document, keyed by
//! [`STYLE_CLASS`]; the toast removes itself after its lifetime.
//!
//! ```rust
//! use bitewise_core::toast::{Toast, ToastKind};
//!
//! let toast = Toast::new("Saved").with_kind(ToastKind::Success);
//! assert_eq!(toast.class_name(), "toast toast-success");
//! assert_eq!(toast.icon_class(), "fas fa-check-circle");
//! ```

use std::time::Duration;

/// Class of the injected `<style>` element.
pub const STYLE_CLASS: &str = "toast-styles";

pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(3000);

/// Stylesheet injected on first use.
pub const STYLES: &str = "
    .toast {
        position: fixed;
        top: 6rem;
        right: 1rem;
        background: rgba(0, 0, 0, 0.9);
        color: white;
        padding: 1rem;
        border-radius: 0.5rem;
        border-left: 4px solid #22c55e;
        z-index: 10000;
        animation: slideIn 0.3s ease;
    }
    .toast-error { border-left-color: #ef4444; }
    .toast-success { border-left-color: #22c55e; }
    .toast-content {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
";

/// Toast flavour. Unknown names keep their class but use the info icon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
    Other(String),
}

impl ToastKind {
    /// Parse a host-supplied kind; `None` or blank means [`ToastKind::Info`].
    #[must_use]
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            None | Some("") | Some("info") => Self::Info,
            Some("success") => Self::Success,
            Some("error") => Self::Error,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Other(name) => name,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "check",
            Self::Error => "times",
            Self::Info | Self::Other(_) => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    lifetime: Duration,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            lifetime: DEFAULT_LIFETIME,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> &ToastKind {
        &self.kind
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("toast toast-{}", self.kind.name())
    }

    #[must_use]
    pub fn icon_class(&self) -> String {
        format!("fas fa-{}-circle", self.kind.icon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing() {
        assert_eq!(ToastKind::parse(None), ToastKind::Info);
        assert_eq!(ToastKind::parse(Some(" ")), ToastKind::Info);
        assert_eq!(ToastKind::parse(Some("error")), ToastKind::Error);
        assert_eq!(
            ToastKind::parse(Some("warning")),
            ToastKind::Other("warning".into())
        );
    }

    #[test]
    fn custom_kind_keeps_class_uses_info_icon() {
        let toast = Toast::new("Heads up").with_kind(ToastKind::parse(Some("warning")));
        assert_eq!(toast.class_name(), "toast toast-warning");
        assert_eq!(toast.icon_class(), "fas fa-info-circle");
    }

    #[test]
    fn error_icon_and_default_lifetime() {
        let toast = Toast::new("Upload failed").with_kind(ToastKind::Error);
        assert_eq!(toast.icon_class(), "fas fa-times-circle");
        assert_eq!(toast.lifetime(), Duration::from_secs(3));
        assert_eq!(toast.message(), "Upload failed");
    }

    #[test]
    fn lifetime_override() {
        let toast = Toast::new("x").with_lifetime(Duration::from_millis(10));
        assert_eq!(toast.lifetime(), Duration::from_millis(10));
    }
}
