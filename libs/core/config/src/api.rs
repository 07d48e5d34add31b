use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use chrono::FixedOffset;
use std::time::Duration;

/// Settings shared by every resource API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Path segment under `/api`, e.g. `v1`
    pub version: String,
    /// Offset used when stamping `created_at` / `updated_at`
    pub utc_offset: FixedOffset,
    /// Upper bound for a single store call
    pub store_timeout: Duration,
}

impl ApiConfig {
    /// Route prefix for versioned resources: `/v1`
    pub fn prefix(&self) -> String {
        format!("/{}", self.version)
    }
}

impl FromEnv for ApiConfig {
    /// - API_VERSION: defaults to `v1`
    /// - APP_UTC_OFFSET: defaults to `+07:00` (Asia/Bangkok)
    /// - STORE_TIMEOUT_SECS: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let version = env_or_default("API_VERSION", "v1")
            .trim_matches('/')
            .to_string();
        if version.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_VERSION".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        let utc_offset = env_parse("APP_UTC_OFFSET", "+07:00")?;
        let store_timeout = Duration::from_secs(env_parse("STORE_TIMEOUT_SECS", "10")?);

        Ok(Self {
            version,
            utc_offset,
            store_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        temp_env::with_vars(
            [
                ("API_VERSION", None::<&str>),
                ("APP_UTC_OFFSET", None::<&str>),
                ("STORE_TIMEOUT_SECS", None::<&str>),
            ],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert_eq!(config.version, "v1");
                assert_eq!(config.prefix(), "/v1");
                assert_eq!(config.utc_offset.local_minus_utc(), 7 * 3600);
                assert_eq!(config.store_timeout, Duration::from_secs(10));
            },
        );
    }

    #[test]
    fn test_api_config_custom_values() {
        temp_env::with_vars(
            [
                ("API_VERSION", Some("/v2/")),
                ("APP_UTC_OFFSET", Some("-03:30")),
                ("STORE_TIMEOUT_SECS", Some("3")),
            ],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert_eq!(config.prefix(), "/v2");
                assert_eq!(config.utc_offset.local_minus_utc(), -(3 * 3600 + 30 * 60));
                assert_eq!(config.store_timeout, Duration::from_secs(3));
            },
        );
    }

    #[test]
    fn test_api_config_rejects_bad_offset() {
        temp_env::with_var("APP_UTC_OFFSET", Some("Bangkok"), || {
            let err = ApiConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("APP_UTC_OFFSET"));
        });
    }

    #[test]
    fn test_api_config_rejects_empty_version() {
        temp_env::with_var("API_VERSION", Some("/"), || {
            let err = ApiConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("API_VERSION"));
        });
    }
}
