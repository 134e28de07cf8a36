use std::{env, time::Duration};

use url::Url;

use super::env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, ServiceConfig};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    /// Builds the configuration from an arbitrary key lookup; `load_config`
    /// passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = var("SPAMZERO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(raw_url.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or(ConfigError::Invalid {
                key: "SPAMZERO_API_URL",
                value: raw_url.clone(),
            })?;

        let timeout_ms = match var("SCAN_TIMEOUT_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::Invalid {
                    key: "SCAN_TIMEOUT_MS",
                    value,
                })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let service = ServiceConfig {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        };

        let directories = DirectoryConfig {
            logs_dir: var("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let timezone = var("SPAMZERO_TIMEZONE").unwrap_or_else(|| "UTC".to_string());

        Ok(Self {
            service,
            directories,
            logging,
            timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.service.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.service.timeout, Duration::from_secs(30));
        assert_eq!(config.directories.logs_dir, "logs");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("SPAMZERO_API_URL", "https://scanner.example.com/api/"),
            ("SCAN_TIMEOUT_MS", "2500"),
            ("LOG_LEVEL", "debug"),
            ("SPAMZERO_TIMEZONE", "Europe/Berlin"),
        ])
        .unwrap();
        assert_eq!(
            config.service.base_url.as_str(),
            "https://scanner.example.com/api/"
        );
        assert_eq!(config.service.timeout, Duration::from_millis(2500));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.timezone, "Europe/Berlin");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("LOGS_DIR", "  ")]).unwrap();
        assert_eq!(config.directories.logs_dir, "logs");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = config_from(&[("SPAMZERO_API_URL", "ftp://example.com")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "SPAMZERO_API_URL",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unparsable_timeout() {
        let err = config_from(&[("SCAN_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "SCAN_TIMEOUT_MS",
                ..
            }
        ));
        assert!(config_from(&[("SCAN_TIMEOUT_MS", "0")]).is_err());
    }
}
