//! Typed configuration consumed by the action API surfaces.

use crate::defaults;

/// Resolved configuration for the action API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionApiConfig {
    /// Public base URL (scheme and host, no trailing slash).
    pub public_base_url: String,
    /// Path of the actions collection (leading slash, no trailing slash).
    pub actions_base_path: String,
    /// Tenant domain passed to the rule mapper.
    pub tenant_domain: String,
    /// Logging preferences.
    pub logging: LoggingSettings,
}

/// Logging preferences resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Lower-case log level.
    pub level: String,
    /// `json` or `pretty`; `None` leaves the choice to the build profile.
    pub format: Option<String>,
}

impl Default for ActionApiConfig {
    fn default() -> Self {
        Self {
            public_base_url: defaults::PUBLIC_BASE_URL.to_string(),
            actions_base_path: defaults::ACTIONS_BASE_PATH.to_string(),
            tenant_domain: defaults::TENANT_DOMAIN.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            format: None,
        }
    }
}
