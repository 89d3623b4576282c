use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures of the timezone helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("Unknown timezone: {0}")]
    UnknownZone(String),

    #[error("Date-time has no timezone information")]
    MissingTzInfo,

    #[error("Date-time {input:?} does not match format {pattern:?}")]
    FormatMismatch {
        input: String,
        pattern: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Timezone error: {0}")]
    Timezone(#[from] TimezoneError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Timezone(TimezoneError::MissingTzInfo) => {
                tracing::error!("Naive date-time reached a conversion helper");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Timezone(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Config(e) => {
                tracing::error!("Config error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

