//! Named patterns, header names and query-parameter names shared by the helpers.

/// `strftime`-style patterns used for rendering and parsing user-facing date-times.
pub struct DateTimeFormat;

impl DateTimeFormat {
    pub const DATE: &'static str = "%Y-%m-%d";
    pub const TIME: &'static str = "%H:%M";
    /// Pattern used by the conversion helpers in both directions.
    pub const DATE_TIME: &'static str = "%Y-%m-%d %H:%M";
    pub const DATE_TIME_SECONDS: &'static str = "%Y-%m-%d %H:%M:%S";
}

/// Request header carrying the caller's IANA timezone name.
pub const TIMEZONE_HEADER: &str = "timezone";

/// Timezone used when neither the request nor the environment names one.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

pub const LIMIT_QUERY_PARAM: &str = "limit";
pub const OFFSET_QUERY_PARAM: &str = "offset";

/// `limit` value that disables slicing entirely.
pub const LIMIT_ALL: &str = "all";
