//! Workload configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use turbo_commerce::catalog::{NormalizeOptions, PLACEHOLDER_IMAGE};
use turbo_commerce::{Currency, ProductSlug};
use turbo_data::encode_path_segment;
use turbo_observability::{LogFormat, LogLevel};

pub const ENV_API_BASE: &str = "TURBO_PDP_API_BASE";
pub const ENV_PLACEHOLDER_IMAGE: &str = "TURBO_PDP_PLACEHOLDER_IMAGE";
pub const ENV_TIMEOUT_MS: &str = "TURBO_PDP_TIMEOUT_MS";
pub const ENV_LOG_LEVEL: &str = "TURBO_PDP_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "TURBO_PDP_LOG_FORMAT";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// PDP workload configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdpConfig {
    /// Storefront API origin, e.g. `https://api.example.com`.
    pub api_base: String,

    /// Path of the by-slug lookup, joined between `api_base` and the slug.
    pub product_path: String,

    /// Image shown when a product has none.
    pub placeholder_image: String,

    /// Upper bound for the product lookup.
    pub request_timeout_ms: u64,

    /// Minimum log level (`trace`..`error`).
    pub log_level: String,

    /// `json` or `human`.
    pub log_format: String,
}

impl Default for PdpConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/api".to_string(),
            product_path: "/products/productslug".to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            request_timeout_ms: 5000,
            log_level: "info".to_string(),
            log_format: "json".to_string(),
        }
    }
}

impl PdpConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `TURBO_PDP_*` overrides from `lookup`, then validate.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_API_BASE) {
            self.api_base = value;
        }
        if let Some(value) = lookup(ENV_PLACEHOLDER_IMAGE) {
            self.placeholder_image = value;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            self.request_timeout_ms =
                value.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: ENV_TIMEOUT_MS,
                    message: format!("expected milliseconds, got {value:?}"),
                })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.log_format = value;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "api_base",
                message: format!("must be an http(s) URL, got {:?}", self.api_base),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_ms",
                message: "must be positive".to_string(),
            });
        }
        if self.placeholder_image.is_empty() {
            return Err(ConfigError::Invalid {
                key: "placeholder_image",
                message: "must not be empty".to_string(),
            });
        }
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level.parse().map_err(|e| ConfigError::Invalid {
            key: "log_level",
            message: format!("{e}"),
        })
    }

    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        self.log_format.parse().map_err(|e| ConfigError::Invalid {
            key: "log_format",
            message: format!("{e}"),
        })
    }

    /// Path (relative to `api_base`) of the lookup for `slug`.
    pub fn product_path_for(&self, slug: &ProductSlug) -> String {
        format!(
            "/{}/{}",
            self.product_path.trim_matches('/'),
            encode_path_segment(slug.as_str())
        )
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            placeholder_image: self.placeholder_image.clone(),
            currency: Currency::USD,
        }
    }
}
