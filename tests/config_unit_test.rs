//! Unit tests for settings parsing and error mapping.
//!
//! Run with: cargo test --test config_unit_test

use axum::{http::StatusCode, response::IntoResponse};
use std::collections::HashMap;

use rest_kit::config::{ConfigError, Deployment, Settings};
use rest_kit::error::{AppError, TimezoneError};

fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let settings = settings_from(&[]).unwrap();
    assert_eq!(settings.default_timezone, "UTC");
    assert_eq!(settings.default_page_limit, Some(10));
    assert_eq!(settings.max_page_limit, None);
    assert_eq!(settings.bind_address(), "0.0.0.0:3000");
    assert_eq!(settings.deployment, Deployment::Local);
}

#[test]
fn reads_timezone_and_limits() {
    let settings = settings_from(&[
        ("TIME_ZONE", "Asia/Kolkata"),
        ("PAGINATION_DEFAULT_LIMIT", "25"),
        ("PAGINATION_MAX_LIMIT", "100"),
        ("API_PORT", "8080"),
        ("DEPLOYMENT", "production"),
    ])
    .unwrap();
    assert_eq!(settings.default_timezone, "Asia/Kolkata");
    assert_eq!(settings.default_page_limit, Some(25));
    assert_eq!(settings.max_page_limit, Some(100));
    assert_eq!(settings.api_port, 8080);
    assert_eq!(settings.deployment, Deployment::Prod);
}

#[test]
fn zero_or_none_disables_default_limit() {
    let zero = settings_from(&[("PAGINATION_DEFAULT_LIMIT", "0")]).unwrap();
    assert_eq!(zero.default_page_limit, None);

    let none = settings_from(&[("PAGINATION_DEFAULT_LIMIT", "None")]).unwrap();
    assert_eq!(none.default_page_limit, None);
}

#[test]
fn rejects_unknown_timezone() {
    let err = settings_from(&[("TIME_ZONE", "Mars/Olympus")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "TIME_ZONE", .. }));
}

#[test]
fn rejects_malformed_limit() {
    let err = settings_from(&[("PAGINATION_MAX_LIMIT", "lots")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            var: "PAGINATION_MAX_LIMIT",
            ..
        }
    ));
}

#[test]
fn caller_errors_map_to_bad_request() {
    let response =
        AppError::from(TimezoneError::UnknownZone("Nowhere/City".into())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = AppError::BadRequest("missing datetime".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn missing_tzinfo_is_a_server_error() {
    let response = AppError::from(TimezoneError::MissingTzInfo).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
