//! Error types for authentication mapping and rule compilation.

use thiserror::Error;

use crate::action::ActionType;
use crate::model::{AuthProperty, AuthenticationScheme};

/// Errors raised while turning a property bag into an authentication value.
///
/// Every variant is caused by caller-supplied data. The mapper reports the
/// first violated rule and stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A property required by the scheme was not supplied at all.
    #[error("missing authentication property '{property}' for scheme '{scheme}'")]
    MissingAuthProperty {
        /// Scheme that declared the property.
        scheme: AuthenticationScheme,
        /// Property that was absent.
        property: AuthProperty,
    },
    /// A property required by the scheme was supplied with an empty value.
    #[error("authentication property '{property}' for scheme '{scheme}' must not be empty")]
    EmptyAuthProperty {
        /// Scheme that declared the property.
        scheme: AuthenticationScheme,
        /// Property that was empty or null.
        property: AuthProperty,
    },
    /// The scheme tag is not one of the known schemes.
    #[error("unsupported authentication scheme '{scheme}'")]
    UnsupportedAuthScheme {
        /// Raw scheme tag supplied by the caller.
        scheme: String,
    },
}

impl AuthError {
    /// Stable machine-readable identifier for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingAuthProperty { .. } => "missing_auth_property",
            Self::EmptyAuthProperty { .. } => "empty_auth_property",
            Self::UnsupportedAuthScheme { .. } => "unsupported_auth_scheme",
        }
    }

    /// Scheme tag the error refers to, rendered as its wire string.
    #[must_use]
    pub fn scheme(&self) -> &str {
        match self {
            Self::MissingAuthProperty { scheme, .. } | Self::EmptyAuthProperty { scheme, .. } => {
                scheme.as_str()
            }
            Self::UnsupportedAuthScheme { scheme } => scheme,
        }
    }

    /// Offending property, when the error concerns a single property.
    #[must_use]
    pub const fn property(&self) -> Option<AuthProperty> {
        match self {
            Self::MissingAuthProperty { property, .. } | Self::EmptyAuthProperty { property, .. } => {
                Some(*property)
            }
            Self::UnsupportedAuthScheme { .. } => None,
        }
    }
}

/// Convenience alias for authentication mapping results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors reported by a [`crate::RuleMapper`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleMappingError {
    /// The rule payload did not have the expected shape.
    #[error("invalid rule for action type '{action_type}': {reason}")]
    InvalidRule {
        /// Action type the rule was compiled for.
        action_type: ActionType,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The rule compiler rejected the rule.
    #[error("rule rejected for action type '{action_type}': {message}")]
    Rejected {
        /// Action type the rule was compiled for.
        action_type: ActionType,
        /// Diagnostic supplied by the rule compiler.
        message: String,
    },
}

/// Raised when an action type string does not name a known action type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action type '{value}'")]
pub struct UnknownActionType {
    /// Value supplied by the caller.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_kind() {
        let missing = AuthError::MissingAuthProperty {
            scheme: AuthenticationScheme::Basic,
            property: AuthProperty::Username,
        };
        let empty = AuthError::EmptyAuthProperty {
            scheme: AuthenticationScheme::Bearer,
            property: AuthProperty::AccessToken,
        };
        let unsupported = AuthError::UnsupportedAuthScheme {
            scheme: "DIGEST".to_string(),
        };

        assert_eq!(missing.code(), "missing_auth_property");
        assert_eq!(empty.code(), "empty_auth_property");
        assert_eq!(unsupported.code(), "unsupported_auth_scheme");
    }

    #[test]
    fn accessors_expose_scheme_and_property() {
        let err = AuthError::EmptyAuthProperty {
            scheme: AuthenticationScheme::ApiKey,
            property: AuthProperty::Header,
        };
        assert_eq!(err.scheme(), "API_KEY");
        assert_eq!(err.property(), Some(AuthProperty::Header));

        let err = AuthError::UnsupportedAuthScheme {
            scheme: "digest".to_string(),
        };
        assert_eq!(err.scheme(), "digest");
        assert_eq!(err.property(), None);
    }

    #[test]
    fn messages_name_scheme_and_property() {
        let err = AuthError::MissingAuthProperty {
            scheme: AuthenticationScheme::Basic,
            property: AuthProperty::Password,
        };
        assert_eq!(
            err.to_string(),
            "missing authentication property 'password' for scheme 'BASIC'"
        );

        let err = RuleMappingError::InvalidRule {
            action_type: ActionType::PreIssueAccessToken,
            reason: "rule must be a JSON object",
        };
        assert_eq!(
            err.to_string(),
            "invalid rule for action type 'PRE_ISSUE_ACCESS_TOKEN': rule must be a JSON object"
        );
    }
}
