#![forbid(unsafe_code)]

//! Guide feedback for the signup/login forms.
//!
//! Turns validator results into what the page shows: a message, whether the
//! message element carries the `valid` class, guide panel visibility, and the
//! password visibility toggle.

use crate::validation::{ConfirmMatch, Email, Username, Validator};

/// Class on a guide element whose rule is satisfied.
pub const VALID_CLASS: &str = "valid";
/// Icon class while the password is obscured.
pub const ICON_EYE: &str = "fa-eye";
/// Icon class while the password is shown in plain text.
pub const ICON_EYE_SLASH: &str = "fa-eye-slash";

pub const USERNAME_OK: &str = "Looks good!";
pub const EMAIL_OK: &str = "Email looks good!";
pub const CONFIRM_OK: &str = "Passwords match";

/// Message and class for one guide element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFeedback {
    pub valid: bool,
    pub message: &'static str,
}

impl FieldFeedback {
    /// Full `className` for the message element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        if self.valid { VALID_CLASS } else { "" }
    }

    fn from_validator<V: Validator<str>>(validator: &V, value: &str, ok: &'static str) -> Self {
        if validator.validate(value).is_valid() {
            Self {
                valid: true,
                message: ok,
            }
        } else {
            Self {
                valid: false,
                message: validator.error_message(),
            }
        }
    }
}

/// Feedback while typing a username.
#[must_use]
pub fn username_feedback(value: &str) -> FieldFeedback {
    FieldFeedback::from_validator(&Username, value, USERNAME_OK)
}

/// Feedback when the username field gains focus.
///
/// A blank (after trimming) field shows the requirement without evaluating.
#[must_use]
pub fn username_focus_feedback(value: &str) -> FieldFeedback {
    if value.trim().is_empty() {
        FieldFeedback {
            valid: false,
            message: Username.error_message(),
        }
    } else {
        username_feedback(value)
    }
}

#[must_use]
pub fn email_feedback(value: &str) -> FieldFeedback {
    FieldFeedback::from_validator(&Email, value, EMAIL_OK)
}

/// Feedback for the confirmation field against the current password.
#[must_use]
pub fn confirm_feedback(password: &str, confirm: &str) -> FieldFeedback {
    FieldFeedback::from_validator(&ConfirmMatch::new(password), confirm, CONFIRM_OK)
}

/// `display` value for a guide panel.
#[must_use]
pub const fn guide_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Rendering mode of a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Password,
    Text,
}

impl InputKind {
    /// Read from the `type` attribute. Anything but `password` counts as text.
    #[must_use]
    pub fn from_type_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("password") => Self::Password,
            _ => Self::Text,
        }
    }

    #[must_use]
    pub const fn as_type_attr(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Password => Self::Text,
            Self::Text => Self::Password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_focus_on_blank_shows_requirement() {
        let fb = username_focus_feedback("   ");
        assert!(!fb.valid);
        assert_eq!(fb.class_name(), "");
        assert_eq!(fb.message, "Username must be 5-20 alphanumeric characters.");
    }

    #[test]
    fn username_typing_feedback() {
        assert_eq!(
            username_feedback("alice42"),
            FieldFeedback {
                valid: true,
                message: "Looks good!"
            }
        );
        assert!(!username_feedback(" alice42").valid);
        assert!(username_focus_feedback("alice42").valid);
    }

    #[test]
    fn email_feedback_messages() {
        assert_eq!(email_feedback("a@b.co").message, "Email looks good!");
        assert_eq!(email_feedback("a@b").message, "Enter a valid email address.");
    }

    #[test]
    fn confirm_feedback_messages() {
        let ok = confirm_feedback("Abcdef1!", "Abcdef1!");
        assert_eq!(ok.class_name(), "valid");
        assert_eq!(ok.message, "Passwords match");
        let empty = confirm_feedback("", "");
        assert_eq!(empty.message, "Passwords must match");
    }

    #[test]
    fn visibility_toggle_round_trips() {
        let kind = InputKind::from_type_attr(Some("password"));
        assert_eq!(kind.toggled().as_type_attr(), "text");
        assert_eq!(kind.toggled().toggled(), InputKind::Password);
        assert_eq!(InputKind::from_type_attr(None), InputKind::Text);
    }

    #[test]
    fn guide_display_values() {
        assert_eq!(guide_display(true), "block");
        assert_eq!(guide_display(false), "none");
    }
}
