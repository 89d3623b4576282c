//! Timezone helpers.
//!
//! Resolve the caller's timezone from request headers and move date-times
//! between UTC and that zone. Every conversion goes through
//! [`parse_timezone`], so an unknown zone name surfaces as
//! [`TimezoneError::UnknownZone`] at conversion time rather than when the
//! header is read.
//!
//! ```text
//! let tz = get_user_timezone_from_request(&headers, &settings.default_timezone);
//! let local = convert_to_formatted_user_timezone(&reading.time, &tz)?;
//! let start = convert_user_datetime_str_to_utc(&query.start, &tz)?;
//! ```

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz, TzOffset};

use crate::constants::{DateTimeFormat, TIMEZONE_HEADER};
use crate::error::TimezoneError;

/// Date-time values that can be converted to UTC.
///
/// Aware `DateTime`s always convert; a `NaiveDateTime` carries no zone and
/// fails with [`TimezoneError::MissingTzInfo`].
pub trait ToUtc {
    fn try_to_utc(&self) -> Result<DateTime<Utc>, TimezoneError>;
}

impl<Z: TimeZone> ToUtc for DateTime<Z> {
    fn try_to_utc(&self) -> Result<DateTime<Utc>, TimezoneError> {
        Ok(self.with_timezone(&Utc))
    }
}

impl ToUtc for NaiveDateTime {
    fn try_to_utc(&self) -> Result<DateTime<Utc>, TimezoneError> {
        Err(TimezoneError::MissingTzInfo)
    }
}

/// Return the `timezone` header, or `default_timezone` when it is absent,
/// blank or not valid UTF-8. The name is not validated here.
#[must_use]
pub fn get_user_timezone_from_request(headers: &HeaderMap, default_timezone: &str) -> String {
    headers
        .get(TIMEZONE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or(default_timezone)
        .to_string()
}

/// Look up an IANA timezone by name.
pub fn parse_timezone(name: &str) -> Result<Tz, TimezoneError> {
    name.parse::<Tz>()
        .map_err(|_| TimezoneError::UnknownZone(name.to_string()))
}

/// Express the same instant in UTC.
pub fn convert_to_utc<D: ToUtc>(datetime: &D) -> Result<DateTime<Utc>, TimezoneError> {
    datetime.try_to_utc()
}

/// Express a UTC instant in the user's timezone.
pub fn convert_to_user_timezone(
    utc_datetime: &DateTime<Utc>,
    user_timezone: &str,
) -> Result<DateTime<Tz>, TimezoneError> {
    let tz = parse_timezone(user_timezone)?;
    Ok(utc_datetime.with_timezone(&tz))
}

/// Convert to the user's timezone and render with [`DateTimeFormat::DATE_TIME`].
pub fn convert_to_formatted_user_timezone(
    utc_datetime: &DateTime<Utc>,
    user_timezone: &str,
) -> Result<String, TimezoneError> {
    let local = convert_to_user_timezone(utc_datetime, user_timezone)?;
    Ok(local.format(DateTimeFormat::DATE_TIME).to_string())
}

/// Parse a [`DateTimeFormat::DATE_TIME`] string as wall-clock time in
/// `user_timezone` and return the matching UTC instant.
pub fn convert_user_datetime_str_to_utc(
    datetime_str: &str,
    user_timezone: &str,
) -> Result<DateTime<Utc>, TimezoneError> {
    let tz = parse_timezone(user_timezone)?;
    let naive = NaiveDateTime::parse_from_str(datetime_str, DateTimeFormat::DATE_TIME)
        .map_err(|_| TimezoneError::FormatMismatch {
            input: datetime_str.to_string(),
            pattern: DateTimeFormat::DATE_TIME,
        })?;
    convert_to_utc(&localize(&naive, tz))
}

/// Attach `tz` to a wall-clock date-time.
///
/// Local times that a DST transition repeats or skips both resolve with
/// the standard-time offset, so every wall-clock value maps to an instant.
#[must_use]
pub fn localize(naive: &NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, later) => {
            if is_standard_time(earlier.offset()) {
                earlier
            } else {
                later
            }
        }
        LocalResult::None => {
            // The offsets in force a day either side of a gap are the two it separates.
            let before = tz.offset_from_utc_datetime(&(*naive - Duration::days(1)));
            let after = tz.offset_from_utc_datetime(&(*naive + Duration::days(1)));
            let offset = if is_standard_time(&after) { after } else { before };
            let seconds = i64::from(offset.fix().local_minus_utc());
            tz.from_utc_datetime(&(*naive - Duration::seconds(seconds)))
        }
    }
}

fn is_standard_time(offset: &TzOffset) -> bool {
    offset.dst_offset() == Duration::zero()
}
