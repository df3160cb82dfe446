#![forbid(unsafe_code)]

//! Page configuration.
//!
//! The host passes an optional JSON object when mounting the page. Every
//! field has a default matching the shipped site, so `{}` (or no payload at
//! all) yields the stock behaviour.
//!
//! ```rust
//! use bitewise_core::PageConfig;
//!
//! let config = PageConfig::from_json_str(r#"{ "quote_interval_ms": 6000 }"#).unwrap();
//! assert_eq!(config.quote_interval_ms, 6000);
//! assert_eq!(config.step_interval_ms, 4000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::effects::particles;
use crate::error::ConfigError;

/// Verbosity of the console log sink installed by the web host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Tunable timings, thresholds, and keys for the page components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Quote carousel rotation period.
    pub quote_interval_ms: u32,
    /// Personalization demo auto-advance period.
    pub step_interval_ms: u32,
    /// Whether the personalization demo advances on its own.
    pub auto_advance: bool,
    /// How long a toast stays in the document.
    pub toast_lifetime_ms: u32,
    /// How long a ripple span stays attached to its host.
    pub ripple_lifetime_ms: u32,
    /// Delay between typed characters in the typing simulation.
    pub typing_interval_ms: u32,
    /// Start offset between consecutive typed fields.
    pub typing_stagger_ms: u32,
    /// Particles generated in the scan section.
    pub particle_count: usize,
    /// Intersection ratio that reveals sections and animates progress bars.
    pub reveal_threshold: f64,
    /// Intersection ratio that triggers the personalization reveal.
    pub personalization_threshold: f64,
    /// Root margin shared by the reveal and progress observers.
    pub root_margin: String,
    /// Local storage key of the cached user record.
    pub storage_key: String,
    /// Page name assumed when the location path has no file segment.
    pub index_page: String,
    /// Console log verbosity.
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            quote_interval_ms: 4000,
            step_interval_ms: 4000,
            auto_advance: true,
            toast_lifetime_ms: 3000,
            ripple_lifetime_ms: 600,
            typing_interval_ms: 100,
            typing_stagger_ms: 1000,
            particle_count: particles::DEFAULT_COUNT,
            reveal_threshold: 0.1,
            personalization_threshold: 0.2,
            root_margin: "0px 0px -50px 0px".to_string(),
            storage_key: "biteWiseUser".to_string(),
            index_page: "index.html".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON payload.
    ///
    /// An empty or whitespace-only payload yields the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to the JSON shape [`PageConfig::from_json_str`] accepts.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the invariants the components rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("quote_interval_ms", self.quote_interval_ms),
            ("step_interval_ms", self.step_interval_ms),
            ("typing_interval_ms", self.typing_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { field });
            }
        }

        for (field, value) in [
            ("reveal_threshold", self.reveal_threshold),
            ("personalization_threshold", self.personalization_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { field, value });
            }
        }

        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("index_page", &self.index_page),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }

        if self.particle_count > particles::MAX_COUNT {
            return Err(ConfigError::OutOfRange {
                field: "particle_count",
                value: self.particle_count,
                max: particles::MAX_COUNT,
            });
        }

        if !is_root_margin(&self.root_margin) {
            return Err(ConfigError::RootMargin {
                value: self.root_margin.clone(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.quote_interval_ms))
    }

    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.step_interval_ms))
    }

    #[must_use]
    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.toast_lifetime_ms))
    }

    #[must_use]
    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.ripple_lifetime_ms))
    }

    #[must_use]
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.typing_interval_ms))
    }

    #[must_use]
    pub fn typing_stagger(&self) -> Duration {
        Duration::from_millis(u64::from(self.typing_stagger_ms))
    }
}

/// `IntersectionObserver` root margin: one to four `<number>px` or
/// `<number>%` tokens. Anything else makes the observer constructor throw.
fn is_root_margin(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_ascii_whitespace().collect();
    (1..=4).contains(&tokens.len())
        && tokens.iter().all(|token| {
            let number = token
                .strip_suffix("px")
                .or_else(|| token.strip_suffix('%'))
                .unwrap_or("");
            is_css_number(number)
        })
}

fn is_css_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty())
        && digits(whole)
        && digits(fraction)
        && !(unsigned.contains('.') && fraction.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialized_config_parses_back() {
        let config = PageConfig {
            auto_advance: false,
            log_level: LogLevel::Debug,
            ..PageConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert!(json.contains(r#""log_level":"debug""#));
        assert_eq!(PageConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn empty_payload_yields_defaults() {
        assert_eq!(PageConfig::from_json_str("").unwrap(), PageConfig::default());
        assert_eq!(PageConfig::from_json_str("  \n").unwrap(), PageConfig::default());
        assert_eq!(PageConfig::from_json_str("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_payload_keeps_other_defaults() {
        let config =
            PageConfig::from_json_str(r#"{"particle_count": 5, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.particle_count, 5);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.storage_key, "biteWiseUser");
        assert_eq!(config.quote_interval(), Duration::from_secs(4));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json_str(r#"{"quote_interval": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = PageConfig::from_json_str(r#"{"step_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroInterval {
                field: "step_interval_ms"
            }
        ));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = PageConfig::from_json_str(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThresholdOutOfRange {
                field: "reveal_threshold",
                ..
            }
        ));
        assert_eq!(err.to_string(), "`reveal_threshold` must be within [0, 1], got 1.5");
    }

    #[test]
    fn particle_count_is_capped() {
        let config = PageConfig::from_json_str(r#"{"particle_count": 1000}"#).unwrap();
        assert_eq!(config.particle_count, particles::MAX_COUNT);

        let err =
            PageConfig::from_json_str(r#"{"particle_count": 18446744073709551615}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "particle_count",
                max: 1000,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "`particle_count` must be at most 1000, got 18446744073709551615"
        );
    }

    #[test]
    fn root_margin_accepts_css_lengths() {
        for margin in ["0px", "0px 0px -50px 0px", "10% 5px", "-2.5px +1% .5px 0%", " 1px  2px "] {
            let json = format!(r#"{{"root_margin": "{margin}"}}"#);
            assert!(PageConfig::from_json_str(&json).is_ok(), "{margin}");
        }
    }

    #[test]
    fn root_margin_rejects_what_the_observer_would_throw_on() {
        for margin in ["", "abc", "0", "5em", "1px 2px 3px 4px 5px", "px", "1.px", "--1px"] {
            let json = format!(r#"{{"root_margin": "{margin}"}}"#);
            let err = PageConfig::from_json_str(&json).unwrap_err();
            assert!(matches!(err, ConfigError::RootMargin { .. }), "{margin}: {err}");
        }
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = PageConfig::from_json_str(r#"{"storage_key": " "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "storage_key" }));
    }
}
