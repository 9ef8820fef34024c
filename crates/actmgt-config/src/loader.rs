//! Environment-backed configuration loading.

use tracing::debug;

use crate::defaults::{
    ENV_ACTIONS_BASE_PATH, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_PUBLIC_BASE_URL, ENV_TENANT_DOMAIN,
};
use crate::error::ConfigResult;
use crate::model::{ActionApiConfig, LoggingSettings};
use crate::validate::{
    parse_base_path, parse_base_url, parse_log_format, parse_log_level, parse_tenant_domain,
};

impl ActionApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidField` for the first variable that fails validation.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidField` for the first variable that fails validation.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let public_base_url = read(ENV_PUBLIC_BASE_URL)
            .map_or(Ok(defaults.public_base_url), |value| parse_base_url(&value))?;
        let actions_base_path = read(ENV_ACTIONS_BASE_PATH)
            .map_or(Ok(defaults.actions_base_path), |value| {
                parse_base_path(&value)
            })?;
        let tenant_domain = read(ENV_TENANT_DOMAIN)
            .map_or(Ok(defaults.tenant_domain), |value| parse_tenant_domain(&value))?;
        let level = read(ENV_LOG_LEVEL)
            .map_or(Ok(defaults.logging.level), |value| parse_log_level(&value))?;
        let format = read(ENV_LOG_FORMAT)
            .map(|value| parse_log_format(&value))
            .transpose()?;

        let config = Self {
            public_base_url,
            actions_base_path,
            tenant_domain,
            logging: LoggingSettings { level, format },
        };
        debug!(
            public_base_url = %config.public_base_url,
            actions_base_path = %config.actions_base_path,
            tenant_domain = %config.tenant_domain,
            "resolved action api configuration"
        );
        Ok(config)
    }
}
