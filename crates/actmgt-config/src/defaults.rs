//! Default values and environment variable names for the action API configuration.
//!
//! # Design
//! - Centralize defaults so the loader and its tests agree on them.
//! - Keep variable names explicit for operators grepping deployments.

/// Public base URL used when building links.
pub(crate) const PUBLIC_BASE_URL: &str = "https://localhost:9443";
/// Collection path that per-type action URIs hang off.
pub(crate) const ACTIONS_BASE_PATH: &str = "/api/server/v1/actions";
/// Tenant that owns actions when none is configured.
pub(crate) const TENANT_DOMAIN: &str = "carbon.super";
/// Log level when none is configured.
pub(crate) const LOG_LEVEL: &str = "info";

/// Environment variable overriding the public base URL.
pub const ENV_PUBLIC_BASE_URL: &str = "ACTMGT_PUBLIC_BASE_URL";
/// Environment variable overriding the actions collection path.
pub const ENV_ACTIONS_BASE_PATH: &str = "ACTMGT_ACTIONS_BASE_PATH";
/// Environment variable overriding the tenant domain.
pub const ENV_TENANT_DOMAIN: &str = "ACTMGT_TENANT_DOMAIN";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "ACTMGT_LOG_LEVEL";
/// Environment variable selecting the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "ACTMGT_LOG_FORMAT";
