#![forbid(unsafe_code)]

//! Cached user record read from browser storage.
//!
//! The record is written elsewhere (login flow); the page only reads it.
//! Anything that is not a JSON object, including a missing entry, reads as
//! an empty record.

use serde_json::{Map, Value};

/// Class of the element that receives the username on the dashboard.
pub const USER_NAME_SELECTOR: &str = ".user-name";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CachedUser {
    fields: Map<String, Value>,
}

impl CachedUser {
    /// Build from the raw storage value.
    #[must_use]
    pub fn from_storage(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Self { fields },
            Ok(_) => {
                crate::warn!("cached user record is not an object; ignoring");
                Self::default()
            }
            Err(_err) => {
                crate::warn!(error = %_err, "cached user record is malformed; ignoring");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Non-empty `username` string, if present.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.fields
            .get("username")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Whether the greeter runs on this location path.
#[must_use]
pub fn is_dashboard_path(path: &str) -> bool {
    path.contains("dashboard")
}
