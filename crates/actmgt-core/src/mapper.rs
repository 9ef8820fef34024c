//! Construction of authentication values from property bags, and the
//! scheme-only projection handed back to callers.
//!
//! Both directions are pure and never log.

use crate::error::{AuthError, AuthResult};
use crate::model::{
    API_KEY_PROPERTIES, ApiKeyAuth, AuthProperty, AuthenticationConfig, AuthenticationScheme,
    BASIC_PROPERTIES, BEARER_PROPERTIES, BasicAuth, BearerAuth, PropertyBag, SchemeSummary,
    Secret,
};

/// Validate `properties` against `scheme` and build the matching configuration.
///
/// Presence of every required key is checked before any value is checked for
/// emptiness, so a missing key always wins over an empty one. A key mapped to
/// `null` counts as present but empty. `NONE` ignores the bag entirely.
///
/// # Errors
///
/// Returns [`AuthError::MissingAuthProperty`] for the first absent key, or
/// [`AuthError::EmptyAuthProperty`] for the first empty or null value.
pub fn build_authentication(
    scheme: AuthenticationScheme,
    properties: Option<&PropertyBag>,
) -> AuthResult<AuthenticationConfig> {
    match scheme {
        AuthenticationScheme::None => Ok(AuthenticationConfig::None),
        AuthenticationScheme::Basic => {
            let [username, password] = required_values(scheme, properties, BASIC_PROPERTIES)?;
            Ok(AuthenticationConfig::Basic(BasicAuth {
                username: username.to_string(),
                password: Secret::new(password),
            }))
        }
        AuthenticationScheme::Bearer => {
            let [access_token] = required_values(scheme, properties, BEARER_PROPERTIES)?;
            Ok(AuthenticationConfig::Bearer(BearerAuth {
                access_token: Secret::new(access_token),
            }))
        }
        AuthenticationScheme::ApiKey => {
            let [header, value] = required_values(scheme, properties, API_KEY_PROPERTIES)?;
            Ok(AuthenticationConfig::ApiKey(ApiKeyAuth {
                header: header.to_string(),
                value: Secret::new(value),
            }))
        }
    }
}

/// Parse a raw scheme tag and build the matching configuration.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedAuthScheme`] when the tag is unknown, and
/// otherwise the errors of [`build_authentication`].
pub fn build_authentication_from_tag(
    tag: &str,
    properties: Option<&PropertyBag>,
) -> AuthResult<AuthenticationConfig> {
    let scheme = tag.parse::<AuthenticationScheme>()?;
    build_authentication(scheme, properties)
}

/// Project a configuration onto its scheme, dropping every credential.
#[must_use]
pub const fn summarize(config: &AuthenticationConfig) -> SchemeSummary {
    SchemeSummary {
        scheme: config.scheme(),
    }
}

fn required_values<'a, const N: usize>(
    scheme: AuthenticationScheme,
    properties: Option<&'a PropertyBag>,
    required: [AuthProperty; N],
) -> AuthResult<[&'a str; N]> {
    for property in required {
        if !properties.is_some_and(|bag| bag.contains_key(property.name())) {
            return Err(AuthError::MissingAuthProperty { scheme, property });
        }
    }

    let mut values: [&'a str; N] = [""; N];
    for (slot, property) in values.iter_mut().zip(required) {
        match properties.and_then(|bag| bag.value(property.name())) {
            Some(value) if !value.is_empty() => *slot = value,
            _ => return Err(AuthError::EmptyAuthProperty { scheme, property }),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, Option<&str>)]) -> PropertyBag {
        entries
            .iter()
            .map(|(name, value)| (*name, value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn basic_builds_with_both_properties() {
        let props = bag(&[("username", Some("svc")), ("password", Some("s3cret"))]);
        let config = build_authentication(AuthenticationScheme::Basic, Some(&props))
            .expect("basic should build");

        let AuthenticationConfig::Basic(basic) = &config else {
            panic!("expected basic variant, got {config:?}");
        };
        assert_eq!(basic.username(), "svc");
        assert_eq!(basic.password().expose(), "s3cret");
        assert_eq!(config.scheme(), AuthenticationScheme::Basic);
    }

    fn complete_bag(scheme: AuthenticationScheme) -> PropertyBag {
        let mut props = PropertyBag::new();
        for property in scheme.required_properties() {
            props.insert(property.name(), Some(format!("{property}-value")));
        }
        props
    }

    #[test]
    fn every_required_property_builds() {
        for scheme in AuthenticationScheme::ALL {
            let config = build_authentication(scheme, Some(&complete_bag(scheme)))
                .expect("complete bag should build");
            assert_eq!(config.scheme(), scheme);
        }
    }

    #[test]
    fn dropping_any_required_property_reports_it_missing() {
        for scheme in AuthenticationScheme::ALL {
            for &dropped in scheme.required_properties() {
                let props: PropertyBag = scheme
                    .required_properties()
                    .iter()
                    .filter(|&&property| property != dropped)
                    .map(|property| (property.name(), Some("set".to_string())))
                    .collect();
                assert_eq!(
                    build_authentication(scheme, Some(&props)),
                    Err(AuthError::MissingAuthProperty {
                        scheme,
                        property: dropped,
                    })
                );
            }
        }
    }

    #[test]
    fn null_for_any_required_property_reports_it_empty() {
        for scheme in AuthenticationScheme::ALL {
            for &nulled in scheme.required_properties() {
                let mut props = complete_bag(scheme);
                props.insert(nulled.name(), None);
                assert_eq!(
                    build_authentication(scheme, Some(&props)),
                    Err(AuthError::EmptyAuthProperty {
                        scheme,
                        property: nulled,
                    })
                );
            }
        }
    }

    #[test]
    fn basic_missing_username_reported() {
        let props = bag(&[("password", Some("x"))]);
        let err = build_authentication(AuthenticationScheme::Basic, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthProperty {
                scheme: AuthenticationScheme::Basic,
                property: AuthProperty::Username,
            }
        );
    }

    #[test]
    fn basic_missing_takes_precedence_over_empty() {
        let props = bag(&[("username", Some(""))]);
        let err = build_authentication(AuthenticationScheme::Basic, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthProperty {
                scheme: AuthenticationScheme::Basic,
                property: AuthProperty::Password,
            }
        );
    }

    #[test]
    fn basic_empty_username_reported() {
        let props = bag(&[("username", Some("")), ("password", Some("x"))]);
        let err = build_authentication(AuthenticationScheme::Basic, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::EmptyAuthProperty {
                scheme: AuthenticationScheme::Basic,
                property: AuthProperty::Username,
            }
        );
    }

    #[test]
    fn null_value_counts_as_empty() {
        let props = bag(&[("username", Some("svc")), ("password", None)]);
        let err = build_authentication(AuthenticationScheme::Basic, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::EmptyAuthProperty {
                scheme: AuthenticationScheme::Basic,
                property: AuthProperty::Password,
            }
        );
    }

    #[test]
    fn bearer_empty_and_missing_token() {
        let props = bag(&[("accessToken", Some(""))]);
        let err = build_authentication(AuthenticationScheme::Bearer, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::EmptyAuthProperty {
                scheme: AuthenticationScheme::Bearer,
                property: AuthProperty::AccessToken,
            }
        );

        let props = bag(&[("token", Some("abc"))]);
        let err = build_authentication(AuthenticationScheme::Bearer, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthProperty {
                scheme: AuthenticationScheme::Bearer,
                property: AuthProperty::AccessToken,
            }
        );
    }

    #[test]
    fn bearer_without_bag_reports_missing_token() {
        let err = build_authentication(AuthenticationScheme::Bearer, None).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthProperty {
                scheme: AuthenticationScheme::Bearer,
                property: AuthProperty::AccessToken,
            }
        );
    }

    #[test]
    fn api_key_missing_value() {
        let props = bag(&[("header", Some("X-Api-Key"))]);
        let err = build_authentication(AuthenticationScheme::ApiKey, Some(&props)).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthProperty {
                scheme: AuthenticationScheme::ApiKey,
                property: AuthProperty::Value,
            }
        );
    }

    #[test]
    fn api_key_builds() {
        let props = bag(&[("header", Some("X-Api-Key")), ("value", Some("k-123"))]);
        let config = build_authentication(AuthenticationScheme::ApiKey, Some(&props))
            .expect("api key should build");
        let AuthenticationConfig::ApiKey(api_key) = &config else {
            panic!("expected api key variant, got {config:?}");
        };
        assert_eq!(api_key.header(), "X-Api-Key");
        assert_eq!(api_key.value().expose(), "k-123");
    }

    #[test]
    fn property_keys_are_case_sensitive() {
        let props = bag(&[("AccessToken", Some("abc"))]);
        let err = build_authentication(AuthenticationScheme::Bearer, Some(&props)).unwrap_err();
        assert_eq!(err.code(), "missing_auth_property");
    }

    #[test]
    fn none_ignores_supplied_properties() {
        let props = bag(&[("username", Some("u")), ("anything", None)]);
        let config = build_authentication(AuthenticationScheme::None, Some(&props))
            .expect("none accepts extra properties");
        assert_eq!(config, AuthenticationConfig::None);
        assert_eq!(
            build_authentication(AuthenticationScheme::None, None),
            Ok(AuthenticationConfig::None)
        );
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let err = build_authentication_from_tag("DIGEST", None).unwrap_err();
        assert_eq!(
            err,
            AuthError::UnsupportedAuthScheme {
                scheme: "DIGEST".to_string()
            }
        );
    }

    #[test]
    fn summaries_carry_only_the_scheme() {
        let props = bag(&[
            ("username", Some("svc-user")),
            ("password", Some("pw-value")),
            ("accessToken", Some("tok-value")),
            ("header", Some("X-Hdr")),
            ("value", Some("key-value")),
        ]);

        for scheme in AuthenticationScheme::ALL {
            let config = build_authentication(scheme, Some(&props)).expect("should build");
            let summary = summarize(&config);
            assert_eq!(summary, SchemeSummary { scheme });
            assert_eq!(summarize(&config), summary);

            let rendered = serde_json::to_string(&summary).expect("serialize summary");
            for secret in ["svc-user", "pw-value", "tok-value", "X-Hdr", "key-value"] {
                assert!(!rendered.contains(secret), "{rendered} leaked {secret}");
            }
        }
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let props = bag(&[
            ("username", Some("svc")),
            ("password", Some("pw-value")),
            ("accessToken", Some("tok-value")),
            ("header", Some("X-Hdr")),
            ("value", Some("key-value")),
        ]);
        for scheme in AuthenticationScheme::ALL {
            let config = build_authentication(scheme, Some(&props)).expect("should build");
            let rendered = format!("{config:?}");
            for secret in ["pw-value", "tok-value", "key-value"] {
                assert!(!rendered.contains(secret), "{rendered} leaked {secret}");
            }
        }
    }
}
