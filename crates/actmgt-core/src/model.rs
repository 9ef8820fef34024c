//! Authentication schemes and the typed values built from property bags.
//!
//! # Design
//! - Schemes are a closed enum; adding one is a code change.
//! - Payload structs keep their fields private and expose no constructor, so a
//!   populated [`AuthenticationConfig`] only comes out of
//!   [`crate::build_authentication`].
//! - Secret material is wrapped in [`Secret`], whose `Debug`/`Display` never
//!   render the value.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const REDACTED: &str = "***";

pub(crate) const BASIC_PROPERTIES: [AuthProperty; 2] =
    [AuthProperty::Username, AuthProperty::Password];
pub(crate) const BEARER_PROPERTIES: [AuthProperty; 1] = [AuthProperty::AccessToken];
pub(crate) const API_KEY_PROPERTIES: [AuthProperty; 2] = [AuthProperty::Header, AuthProperty::Value];

/// Authentication schemes an action endpoint may declare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationScheme {
    /// No credentials are sent.
    None,
    /// HTTP basic credentials.
    Basic,
    /// Bearer access token.
    Bearer,
    /// Static API key sent in a named header.
    ApiKey,
}

impl AuthenticationScheme {
    /// Every scheme, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Basic, Self::Bearer, Self::ApiKey];

    #[must_use]
    /// Render the scheme as its wire tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Basic => "BASIC",
            Self::Bearer => "BEARER",
            Self::ApiKey => "API_KEY",
        }
    }

    #[must_use]
    /// Properties the scheme requires, in the order they are checked.
    pub const fn required_properties(self) -> &'static [AuthProperty] {
        match self {
            Self::None => &[],
            Self::Basic => &BASIC_PROPERTIES,
            Self::Bearer => &BEARER_PROPERTIES,
            Self::ApiKey => &API_KEY_PROPERTIES,
        }
    }
}

impl Display for AuthenticationScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthenticationScheme {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| AuthError::UnsupportedAuthScheme {
                scheme: s.to_string(),
            })
    }
}

/// Property names understood by the authentication schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthProperty {
    /// Basic auth user name.
    Username,
    /// Basic auth password.
    Password,
    /// Bearer access token.
    AccessToken,
    /// Header carrying the API key.
    Header,
    /// API key value.
    Value,
}

impl AuthProperty {
    #[must_use]
    /// Case-sensitive key used in property bags.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::AccessToken => "accessToken",
            Self::Header => "header",
            Self::Value => "value",
        }
    }
}

impl Display for AuthProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied authentication properties (name to nullable value).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PropertyBag(BTreeMap<String, Option<String>>);

impl PropertyBag {
    #[must_use]
    /// Create an empty bag.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace a property; `None` records an explicit null.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.insert(name.into(), value);
    }

    #[must_use]
    /// Whether the key was supplied, regardless of its value.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    /// Value for the key; `None` when absent or null.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Option::as_deref)
    }

    #[must_use]
    /// Number of supplied keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Whether no keys were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<Option<String>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Secret string that never renders its contents through formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    /// Raw secret for the outbound call that needs it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&REDACTED).finish()
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Basic credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub(crate) username: String,
    pub(crate) password: Secret,
}

impl BasicAuth {
    #[must_use]
    /// User name sent to the endpoint.
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    /// Password sent to the endpoint.
    pub const fn password(&self) -> &Secret {
        &self.password
    }
}

/// Bearer token credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerAuth {
    pub(crate) access_token: Secret,
}

impl BearerAuth {
    #[must_use]
    /// Access token sent to the endpoint.
    pub const fn access_token(&self) -> &Secret {
        &self.access_token
    }
}

/// API key credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyAuth {
    pub(crate) header: String,
    pub(crate) value: Secret,
}

impl ApiKeyAuth {
    #[must_use]
    /// Header name that carries the key.
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    /// Key value placed in the header.
    pub const fn value(&self) -> &Secret {
        &self.value
    }
}

/// Validated authentication configuration for an action endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationConfig {
    /// No credentials.
    None,
    /// Basic credentials.
    Basic(BasicAuth),
    /// Bearer token.
    Bearer(BearerAuth),
    /// API key header.
    ApiKey(ApiKeyAuth),
}

impl AuthenticationConfig {
    #[must_use]
    /// Scheme matching the populated variant.
    pub const fn scheme(&self) -> AuthenticationScheme {
        match self {
            Self::None => AuthenticationScheme::None,
            Self::Basic(_) => AuthenticationScheme::Basic,
            Self::Bearer(_) => AuthenticationScheme::Bearer,
            Self::ApiKey(_) => AuthenticationScheme::ApiKey,
        }
    }
}

/// Externally visible view of an authentication configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemeSummary {
    /// Scheme of the summarised configuration.
    pub scheme: AuthenticationScheme,
}
