use axum::{extract::Query, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::extract::UserTimezone;
use crate::timezone::{
    convert_to_formatted_user_timezone, convert_to_user_timezone,
    convert_user_datetime_str_to_utc,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct LocalTimeResponse {
    /// Timezone the local value is expressed in
    pub timezone: String,
    pub utc: DateTime<Utc>,
    /// Local wall-clock time (`YYYY-MM-DD HH:MM`)
    pub local: String,
    /// Offset from UTC, e.g. `+05:30`
    pub utc_offset: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub timezone: String,
    /// The local date-time as supplied
    pub input: String,
    pub utc: DateTime<Utc>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConvertQuery {
    /// Local date-time in the caller's timezone (`YYYY-MM-DD HH:MM`)
    pub datetime: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FormatQuery {
    /// UTC instant (RFC 3339)
    pub utc: DateTime<Utc>,
}

fn local_time(utc: DateTime<Utc>, timezone: &UserTimezone) -> AppResult<LocalTimeResponse> {
    let local = convert_to_user_timezone(&utc, timezone.as_str())?;
    Ok(LocalTimeResponse {
        timezone: timezone.as_str().to_string(),
        utc,
        local: convert_to_formatted_user_timezone(&utc, timezone.as_str())?,
        utc_offset: local.format("%:z").to_string(),
    })
}

/// Current time in the caller's timezone
#[utoipa::path(
    get,
    path = "/api/time/now",
    params(
        ("timezone" = Option<String>, Header, description = "IANA timezone name (default: server TIME_ZONE)"),
    ),
    responses(
        (status = 200, description = "Current time", body = LocalTimeResponse),
        (status = 400, description = "Unknown timezone"),
    ),
    tag = "time"
)]
pub async fn now(timezone: UserTimezone) -> AppResult<Json<LocalTimeResponse>> {
    Ok(Json(local_time(Utc::now(), &timezone)?))
}

/// Render a UTC instant in the caller's timezone
#[utoipa::path(
    get,
    path = "/api/time/format",
    params(
        FormatQuery,
        ("timezone" = Option<String>, Header, description = "IANA timezone name (default: server TIME_ZONE)"),
    ),
    responses(
        (status = 200, description = "Formatted local time", body = LocalTimeResponse),
        (status = 400, description = "Unknown timezone or malformed instant"),
    ),
    tag = "time"
)]
pub async fn format(
    timezone: UserTimezone,
    Query(query): Query<FormatQuery>,
) -> AppResult<Json<LocalTimeResponse>> {
    Ok(Json(local_time(query.utc, &timezone)?))
}

/// Convert a local date-time in the caller's timezone to UTC
#[utoipa::path(
    get,
    path = "/api/time/convert",
    params(
        ConvertQuery,
        ("timezone" = Option<String>, Header, description = "IANA timezone name (default: server TIME_ZONE)"),
    ),
    responses(
        (status = 200, description = "UTC instant", body = ConvertResponse),
        (status = 400, description = "Unknown timezone or malformed local time"),
    ),
    tag = "time"
)]
pub async fn convert(
    timezone: UserTimezone,
    Query(query): Query<ConvertQuery>,
) -> AppResult<Json<ConvertResponse>> {
    let input = query
        .datetime
        .ok_or_else(|| AppError::BadRequest("Missing 'datetime' query parameter".to_string()))?;

    let utc = convert_user_datetime_str_to_utc(&input, timezone.as_str())?;
    tracing::debug!(timezone = %timezone.as_str(), input = %input, utc = %utc, "converted local time");

    Ok(Json(ConvertResponse {
        timezone: timezone.0,
        input,
        utc,
    }))
}
