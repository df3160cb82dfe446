#![cfg(not(target_arch = "wasm32"))]

use bitewise_core::PageConfig;
use bitewise_core::config::LogLevel;
use bitewise_web::{BiteWisePage, BindError};
use pretty_assertions::assert_eq;

#[test]
fn mount_without_config_uses_defaults() {
    let page = BiteWisePage::mount(None).unwrap();
    assert_eq!(page.config(), &PageConfig::default());
    assert!(page.mounted_components().is_empty());
}

#[test]
fn mount_applies_overrides() {
    let page = BiteWisePage::mount(Some(
        r#"{ "quote_interval_ms": 2500, "auto_advance": false, "log_level": "trace" }"#,
    ))
    .unwrap();
    assert_eq!(page.config().quote_interval_ms, 2500);
    assert!(!page.config().auto_advance);
    assert_eq!(page.config().log_level, LogLevel::Trace);
}

#[test]
fn mount_rejects_invalid_config() {
    let err = BiteWisePage::mount(Some(r#"{ "step_interval_ms": 0 }"#)).unwrap_err();
    assert!(matches!(err, BindError::Config(_)));
    assert_eq!(err.to_string(), "`step_interval_ms` must be greater than zero");

    let err = BiteWisePage::mount(Some(r#"{ "colour": "teal" }"#)).unwrap_err();
    assert!(err.to_string().starts_with("invalid page config"));
}

#[test]
fn destroy_is_repeatable() {
    let mut page = BiteWisePage::mount(Some("{}")).unwrap();
    page.destroy();
    page.destroy();
    assert!(page.mounted_components().is_empty());
}

#[test]
fn mount_rejects_values_that_would_break_binding() {
    let err = BiteWisePage::mount(Some(r#"{ "root_margin": "abc" }"#)).unwrap_err();
    assert!(matches!(err, BindError::Config(_)), "{err}");

    let err = BiteWisePage::mount(Some(r#"{ "particle_count": 5000 }"#)).unwrap_err();
    assert_eq!(err.to_string(), "`particle_count` must be at most 1000, got 5000");
}
