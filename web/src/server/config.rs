use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
pub const DEFAULT_USER_AGENT: &str = "clima/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("UPSTREAM_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Upstream endpoints used by `/api/get_location_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub nominatim_url: String,
    pub archive_url: String,
    pub user_agent: String,
    pub upstream_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            None => defaults.upstream_timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            nominatim_url: lookup("NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            archive_url: lookup("OPEN_METEO_ARCHIVE_URL").unwrap_or(defaults.archive_url),
            user_agent: lookup("GEOCODER_USER_AGENT").unwrap_or(defaults.user_agent),
            upstream_timeout,
        })
    }
}
