//! Validation helpers for configuration values.

use url::Url;

use crate::error::{ConfigError, ConfigResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["json", "pretty"];

fn invalid(
    section: &'static str,
    field: &'static str,
    value: &str,
    reason: &'static str,
) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        value: Some(value.to_string()),
        reason,
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_base_url(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed)
        .map_err(|_| invalid("links", "public_base_url", value, "must be a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            "links",
            "public_base_url",
            value,
            "must start with http:// or https://",
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("links", "public_base_url", value, "must include a host"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            "links",
            "public_base_url",
            value,
            "must not carry a path, query or fragment",
        ));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_base_path(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if !trimmed.starts_with('/') {
        return Err(invalid(
            "links",
            "actions_base_path",
            value,
            "must start with '/'",
        ));
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(invalid(
            "links",
            "actions_base_path",
            value,
            "must not contain whitespace",
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_tenant_domain(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("tenant", "tenant_domain", value, "must not be empty"));
    }
    if trimmed.contains('/') {
        return Err(invalid("tenant", "tenant_domain", value, "must not contain '/'"));
    }
    Ok(trimmed.to_string())
}

/// Normalise a log level name to lower case.
///
/// # Errors
///
/// Returns `ConfigError::InvalidField` when the value is not a known level.
pub fn parse_log_level(value: &str) -> ConfigResult<String> {
    let normalized = value.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(invalid(
            "logging",
            "level",
            value,
            "must be one of trace, debug, info, warn, error",
        ))
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_log_format(value: &str) -> ConfigResult<String> {
    let normalized = value.trim().to_ascii_lowercase();
    if LOG_FORMATS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(invalid("logging", "format", value, "must be json or pretty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_requires_scheme_and_host() {
        assert_eq!(
            parse_base_url("https://iam.example/").as_deref(),
            Ok("https://iam.example")
        );
        assert_eq!(
            parse_base_url("HTTPS://IAM.Example:9443").as_deref(),
            Ok("https://iam.example:9443")
        );
        assert!(parse_base_url("iam.example").is_err());
        assert!(parse_base_url("https://").is_err());
        assert!(parse_base_url("ftp://iam.example").is_err());
    }

    #[test]
    fn base_url_rejects_malformed_hosts() {
        for value in [
            "https://exa mple.com",
            "https://host:notaport",
            "http://[::1",
            "https://a b/c?d#e",
        ] {
            let err = parse_base_url(value).unwrap_err();
            let ConfigError::InvalidField {
                field,
                value: offending,
                ..
            } = err;
            assert_eq!(field, "public_base_url");
            assert_eq!(offending.as_deref(), Some(value));
        }
    }

    #[test]
    fn base_url_rejects_path_and_query() {
        assert!(parse_base_url("https://iam.example/api").is_err());
        assert!(parse_base_url("https://iam.example/?tenant=a").is_err());
        assert!(parse_base_url("https://iam.example/#top").is_err());
    }

    #[test]
    fn base_path_requires_leading_slash() {
        assert_eq!(
            parse_base_path("/api/server/v1/actions/").as_deref(),
            Ok("/api/server/v1/actions")
        );
        let err = parse_base_path("api/actions").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidField {
                section: "links",
                field: "actions_base_path",
                value: Some("api/actions".to_string()),
                reason: "must start with '/'",
            }
        );
    }

    #[test]
    fn tenant_domain_rejects_blank_and_slashes() {
        assert!(parse_tenant_domain("  ").is_err());
        assert!(parse_tenant_domain("a/b").is_err());
        assert_eq!(parse_tenant_domain(" wso2.com ").as_deref(), Ok("wso2.com"));
    }

    #[test]
    fn log_settings_are_normalised() {
        assert_eq!(parse_log_level("DEBUG").as_deref(), Ok("debug"));
        assert!(parse_log_level("verbose").is_err());
        assert_eq!(parse_log_format("Json").as_deref(), Ok("json"));
        assert!(parse_log_format("xml").is_err());
    }
}
