use std::env;

use chrono_tz::Tz;

use crate::constants::DEFAULT_TIME_ZONE;

const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    // Timezone
    pub default_timezone: String,

    // Pagination
    pub default_page_limit: Option<usize>,
    pub max_page_limit: Option<usize>,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Application metadata
    pub deployment: Deployment,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIME_ZONE.to_string(),
            default_page_limit: Some(DEFAULT_PAGE_LIMIT),
            max_page_limit: None,
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            deployment: Deployment::Local,
        }
    }
}

impl Settings {
    /// Load settings from environment variables (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `TIME_ZONE` is not a known zone or a
    /// pagination limit is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_timezone = lookup("TIME_ZONE")
            .map(|tz| tz.trim().to_string())
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        if default_timezone.parse::<Tz>().is_err() {
            return Err(ConfigError::Invalid {
                var: "TIME_ZONE",
                value: default_timezone,
            });
        }

        let default_page_limit = match lookup("PAGINATION_DEFAULT_LIMIT") {
            Some(raw) => parse_limit("PAGINATION_DEFAULT_LIMIT", &raw)?,
            None => Some(DEFAULT_PAGE_LIMIT),
        };
        let max_page_limit = match lookup("PAGINATION_MAX_LIMIT") {
            Some(raw) => parse_limit("PAGINATION_MAX_LIMIT", &raw)?,
            None => None,
        };

        Ok(Self {
            default_timezone,
            default_page_limit,
            max_page_limit,

            // API settings
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: lookup("API_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            deployment: Deployment::from_str(
                &lookup("DEPLOYMENT").unwrap_or_else(|| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// `none`, empty and `0` all mean "no limit".
fn parse_limit(var: &'static str, raw: &str) -> Result<Option<usize>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse::<usize>()
        .map(|n| (n > 0).then_some(n))
        .map_err(|_| ConfigError::Invalid {
            var,
            value: raw.to_string(),
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

