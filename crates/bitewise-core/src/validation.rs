#![forbid(unsafe_code)]

//! Signup/login field validators.
//!
//! These mirror the server's rules for immediate feedback only. A failing
//! validator changes a guide message; it never blocks form submission.
//!
//! # Example
//!
//! ```rust
//! use bitewise_core::validation::{PasswordChecks, Username, Validator};
//!
//! assert!(Username.validate("alice42").is_valid());
//! assert!(!Username.validate("al").is_valid());
//!
//! let checks = PasswordChecks::evaluate("Abcdef1!");
//! assert!(checks.is_all());
//! ```

use std::fmt;

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Username does not match `^[A-Za-z0-9]{5,20}$`.
pub const ERROR_CODE_USERNAME: &str = "username";
/// Email does not match `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Confirmation is empty or differs from the password.
pub const ERROR_CODE_MISMATCH: &str = "mismatch";

pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 12;
/// Characters satisfying the password "special" rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

// ---------------------------------------------------------------------------
// ValidationError / ValidationResult
// ---------------------------------------------------------------------------

/// A failed validation: stable code plus the guide message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    #[must_use]
    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validator trait
// ---------------------------------------------------------------------------

/// A predicate over a field value with a user-facing failure message.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult;

    /// Message shown while the value is invalid.
    fn error_message(&self) -> &'static str;
}

/// `^[A-Za-z0-9]{5,20}$`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Username;

impl Validator<str> for Username {
    fn validate(&self, value: &str) -> ValidationResult {
        let ok = (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&value.len())
            && value.bytes().all(|b| b.is_ascii_alphanumeric());
        if ok {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_USERNAME,
                self.error_message(),
            ))
        }
    }

    fn error_message(&self) -> &'static str {
        "Username must be 5-20 alphanumeric characters."
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// a `.` that has at least one character on each side.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

/// Characters matched by `\s` in an ECMAScript regex: WhiteSpace plus
/// LineTerminator. Differs from [`char::is_whitespace`] on U+0085 and U+FEFF.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl Email {
    fn matches(value: &str) -> bool {
        if value.chars().any(is_js_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

impl Validator<str> for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        if Self::matches(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_EMAIL, self.error_message()))
        }
    }

    fn error_message(&self) -> &'static str {
        "Enter a valid email address."
    }
}

/// Confirmation equals the password and is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmMatch<'a> {
    pub password: &'a str,
}

impl<'a> ConfirmMatch<'a> {
    #[must_use]
    pub const fn new(password: &'a str) -> Self {
        Self { password }
    }
}

impl Validator<str> for ConfirmMatch<'_> {
    fn validate(&self, value: &str) -> ValidationResult {
        if !value.is_empty() && value == self.password {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_MISMATCH,
                self.error_message(),
            ))
        }
    }

    fn error_message(&self) -> &'static str {
        "Passwords must match"
    }
}

// ---------------------------------------------------------------------------
// Password rules
// ---------------------------------------------------------------------------

/// One independently-displayed password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl PasswordRule {
    /// All rules in guide order.
    pub const ALL: [Self; 5] = [
        Self::Length,
        Self::Uppercase,
        Self::Lowercase,
        Self::Number,
        Self::Special,
    ];

    /// Id of the guide list item for this rule.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Number => "number",
            Self::Special => "special",
        }
    }

    #[must_use]
    pub const fn flag(self) -> PasswordChecks {
        match self {
            Self::Length => PasswordChecks::LENGTH,
            Self::Uppercase => PasswordChecks::UPPERCASE,
            Self::Lowercase => PasswordChecks::LOWERCASE,
            Self::Number => PasswordChecks::NUMBER,
            Self::Special => PasswordChecks::SPECIAL,
        }
    }

    #[must_use]
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Length => {
                (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&value.chars().count())
            }
            Self::Uppercase => value.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => value.chars().any(|c| c.is_ascii_lowercase()),
            Self::Number => value.chars().any(|c| c.is_ascii_digit()),
            Self::Special => value.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
        }
    }
}

bitflags! {
    /// Set of password rules a value satisfies.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PasswordChecks: u8 {
        const LENGTH    = 0b0_0001;
        const UPPERCASE = 0b0_0010;
        const LOWERCASE = 0b0_0100;
        const NUMBER    = 0b0_1000;
        const SPECIAL   = 0b1_0000;
    }
}

impl PasswordChecks {
    /// Evaluate every rule against `value`.
    #[must_use]
    pub fn evaluate(value: &str) -> Self {
        PasswordRule::ALL
            .into_iter()
            .filter(|rule| rule.check(value))
            .fold(Self::empty(), |acc, rule| acc | rule.flag())
    }

    #[must_use]
    pub fn passes(self, rule: PasswordRule) -> bool {
        self.contains(rule.flag())
    }

    /// `(rule, satisfied)` pairs in guide order.
    pub fn rules(self) -> impl Iterator<Item = (PasswordRule, bool)> {
        PasswordRule::ALL
            .into_iter()
            .map(move |rule| (rule, self.passes(rule)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_bounds() {
        assert!(Username.validate("abcde").is_valid());
        assert!(Username.validate("A1b2C3d4E5f6G7h8I9j0").is_valid());
        assert!(Username.validate("abcd").is_invalid());
        assert!(Username.validate("abcdefghijklmnopqrstu").is_invalid());
        assert!(Username.validate("").is_invalid());
    }

    #[test]
    fn username_rejects_non_alphanumerics() {
        for bad in ["alice_1", "alice 1", "alice-1", "alicé12", "ａｌｉｃｅ"] {
            let result = Username.validate(bad);
            assert_eq!(result.error().map(|e| e.code), Some(ERROR_CODE_USERNAME), "{bad}");
        }
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.c", "first.last@mail.example.org", "x@y.z.w", "a@.b.c"] {
            assert!(Email.validate(good).is_valid(), "{good}");
        }
        for bad in [
            "", "plain", "@b.c", "a@", "a@b", "a@b.", "a@.b", "a@@b.c", "a@b@c.d", "a b@c.d",
            "a@b .c",
        ] {
            assert!(Email.validate(bad).is_invalid(), "{bad}");
        }
    }

    #[test]
    fn email_whitespace_follows_js_regex() {
        for bad in ["a\u{feff}@b.c", "a@b\u{00a0}.c", "a\u{2028}@b.c", "a\t@b.c"] {
            assert!(Email.validate(bad).is_invalid(), "{bad:?}");
        }
        // NEL is not `\s` in JS, so the page regex accepts it.
        assert!(Email.validate("a\u{0085}@b.c").is_valid());
    }

    #[test]
    fn email_message() {
        let result = Email.validate("nope");
        assert_eq!(
            result.error().map(ToString::to_string).as_deref(),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn confirm_requires_equal_non_empty() {
        assert!(ConfirmMatch::new("Secret1!").validate("Secret1!").is_valid());
        assert!(ConfirmMatch::new("Secret1!").validate("Secret1").is_invalid());
        assert!(ConfirmMatch::new("").validate("").is_invalid());
    }

    #[test]
    fn password_all_rules() {
        let checks = PasswordChecks::evaluate("Abcdef1!");
        assert!(checks.is_all());
        assert!(checks.rules().all(|(_, ok)| ok));
    }

    #[test]
    fn password_length_window() {
        assert!(!PasswordRule::Length.check("Abcde1!"));
        assert!(PasswordRule::Length.check("Abcdefghij1!"));
        assert!(!PasswordRule::Length.check("Abcdefghijk1!"));
    }

    #[test]
    fn special_set_is_fixed() {
        for c in PASSWORD_SPECIALS.chars() {
            assert!(PasswordRule::Special.check(&c.to_string()), "{c}");
        }
        for c in ['(', ')', '-', '_', '?', '~'] {
            assert!(!PasswordRule::Special.check(&c.to_string()), "{c}");
        }
    }

    #[test]
    fn element_ids_follow_guide_order() {
        let ids: Vec<_> = PasswordRule::ALL.iter().map(|r| r.element_id()).collect();
        assert_eq!(ids, ["length", "uppercase", "lowercase", "number", "special"]);
    }
}
