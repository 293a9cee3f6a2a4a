use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub image_model: String,
    pub image_timeout: Duration,
    pub bind_address: SocketAddr,
    pub frontend_dist: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let gemini_api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let gemini_base_url = get("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let image_model = get("IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());

        let image_timeout = match get("IMAGE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "IMAGE_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "IMAGE_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
        };

        let bind_raw = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "BIND_ADDRESS",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let frontend_dist = PathBuf::from(
            get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        );

        Ok(Self {
            gemini_api_key,
            gemini_base_url,
            image_model,
            image_timeout,
            bind_address,
            frontend_dist,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();

        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.image_timeout, Duration::from_secs(60));
        assert_eq!(config.bind_address, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GEMINI_API_KEY")));

        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GEMINI_API_KEY")));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_BASE_URL", "http://localhost:9000/v1beta/"),
            ("IMAGE_MODEL", "some-other-model"),
            ("IMAGE_TIMEOUT_SECS", "5"),
            ("BIND_ADDRESS", "0.0.0.0:8080"),
            ("FRONTEND_DIST", "/srv/site"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_base_url, "http://localhost:9000/v1beta");
        assert_eq!(config.image_model, "some-other-model");
        assert_eq!(config.image_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/site"));
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("IMAGE_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "IMAGE_TIMEOUT_SECS", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("IMAGE_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "IMAGE_TIMEOUT_SECS", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("BIND_ADDRESS", "localhost"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDRESS", .. }));
    }
}
