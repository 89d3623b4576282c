//! Unit tests for the timezone helpers.
//!
//! Run with: cargo test --test timezone_unit_test

use axum::http::{HeaderMap, HeaderValue};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{America::New_York, Asia::Kolkata, Tz};

use rest_kit::constants::DateTimeFormat;
use rest_kit::error::TimezoneError;
use rest_kit::timezone::{
    convert_to_formatted_user_timezone, convert_to_user_timezone, convert_to_utc,
    convert_user_datetime_str_to_utc, get_user_timezone_from_request, localize, parse_timezone,
};

fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn kolkata_new_year() -> chrono::DateTime<Tz> {
    Kolkata.with_ymd_and_hms(2023, 1, 1, 8, 30, 0).single().unwrap()
}

#[test]
fn timezone_header_is_returned_verbatim() {
    let mut headers = HeaderMap::new();
    headers.insert("timezone", HeaderValue::from_static("Asia/Kolkata"));
    assert_eq!(
        get_user_timezone_from_request(&headers, "UTC"),
        "Asia/Kolkata"
    );
}

#[test]
fn missing_or_blank_header_falls_back_to_default() {
    assert_eq!(get_user_timezone_from_request(&HeaderMap::new(), "UTC"), "UTC");

    let mut headers = HeaderMap::new();
    headers.insert("timezone", HeaderValue::from_static("   "));
    assert_eq!(
        get_user_timezone_from_request(&headers, "Europe/Paris"),
        "Europe/Paris"
    );
}

#[test]
fn header_value_is_not_validated() {
    let mut headers = HeaderMap::new();
    headers.insert("timezone", HeaderValue::from_static("Not/AZone"));
    assert_eq!(get_user_timezone_from_request(&headers, "UTC"), "Not/AZone");
}

#[test]
fn convert_to_utc_and_back() {
    let aware = kolkata_new_year();

    let utc_dt = convert_to_utc(&aware).unwrap();
    assert_eq!(utc_dt, Utc.with_ymd_and_hms(2023, 1, 1, 3, 0, 0).unwrap());

    let converted = convert_to_user_timezone(&utc_dt, "Asia/Kolkata").unwrap();
    assert_eq!(converted, aware);
    assert_eq!(converted.timezone(), Kolkata);
}

#[test]
fn naive_datetime_is_rejected() {
    let err = convert_to_utc(&naive(2023, 1, 1, 8, 30)).unwrap_err();
    assert_eq!(err, TimezoneError::MissingTzInfo);
}

#[test]
fn formatted_conversion_matches_local_format() {
    let aware = kolkata_new_year();
    let utc_dt = convert_to_utc(&aware).unwrap();

    let formatted = convert_to_formatted_user_timezone(&utc_dt, "Asia/Kolkata").unwrap();
    assert_eq!(formatted, aware.format(DateTimeFormat::DATE_TIME).to_string());
    assert_eq!(formatted, "2023-01-01 08:30");
}

#[test]
fn parses_local_string_to_utc() {
    let result = convert_user_datetime_str_to_utc("2023-01-01 08:30", "Asia/Kolkata").unwrap();
    let expected = convert_to_utc(&kolkata_new_year()).unwrap();
    assert_eq!(result, expected);

    let localized = localize(&naive(2023, 1, 1, 8, 30), Kolkata);
    assert_eq!(result, convert_to_utc(&localized).unwrap());
}

#[test]
fn unknown_zone_fails_lookup() {
    let utc_dt = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(
        convert_to_user_timezone(&utc_dt, "Mars/Olympus").unwrap_err(),
        TimezoneError::UnknownZone("Mars/Olympus".to_string())
    );
    assert!(matches!(
        convert_user_datetime_str_to_utc("2023-01-01 08:30", "Mars/Olympus"),
        Err(TimezoneError::UnknownZone(_))
    ));
    assert!(parse_timezone("Asia/Kolkata").is_ok());
}

#[test]
fn malformed_string_is_a_format_mismatch() {
    for input in [
        "2023-01-01T08:30",
        "01/01/2023 08:30",
        "2023-01-01 08:30:00",
        " 2023-01-01 08:30 ",
        "",
    ] {
        let err = convert_user_datetime_str_to_utc(input, "UTC").unwrap_err();
        assert_eq!(
            err,
            TimezoneError::FormatMismatch {
                input: input.to_string(),
                pattern: DateTimeFormat::DATE_TIME,
            }
        );
    }
}

#[test]
fn local_time_in_dst_gap_uses_standard_offset() {
    // 02:30 is skipped on 2023-03-12; read it as EST (UTC-5).
    let result = convert_user_datetime_str_to_utc("2023-03-12 02:30", "America/New_York").unwrap();
    assert_eq!(result, Utc.with_ymd_and_hms(2023, 3, 12, 7, 30, 0).unwrap());

    let localized = localize(&naive(2023, 3, 12, 2, 30), New_York);
    assert_eq!(convert_to_utc(&localized).unwrap(), result);
}

#[test]
fn repeated_local_time_resolves_to_standard_time() {
    // 01:30 happens twice on 2023-11-05; EST (UTC-5) is the standard reading.
    let result = convert_user_datetime_str_to_utc("2023-11-05 01:30", "America/New_York").unwrap();
    assert_eq!(result, Utc.with_ymd_and_hms(2023, 11, 5, 6, 30, 0).unwrap());

    let localized = localize(&naive(2023, 11, 5, 1, 30), New_York);
    assert_eq!(localized.format("%:z").to_string(), "-05:00");
}
