#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared DTOs for the action management API.
//!
//! Inbound models mirror the create/update payloads; outbound models carry
//! the authentication *type* only, never its properties. The mapping between
//! these DTOs and the `actmgt-core` domain lives in `mapper.rs`.

pub mod error;
pub mod links;
pub mod mapper;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use actmgt_core::{
    ActionStatus, ActionType, AuthResult, AuthenticationConfig, AuthenticationScheme, PropertyBag,
    SchemeSummary, build_authentication_from_tag,
};

pub use error::ActionMapperError;
pub use links::ActionLinkBuilder;
pub use mapper::{
    build_action_basic_response, build_action_request, build_action_response,
    build_updating_action_request,
};

/// Authentication block of an inbound endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticationRequest {
    #[serde(rename = "type")]
    /// Scheme tag (`NONE`, `BASIC`, `BEARER`, `API_KEY`).
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Scheme properties keyed by their case-sensitive names.
    pub properties: Option<PropertyBag>,
}

impl AuthenticationRequest {
    /// Validate the block and build the typed configuration.
    ///
    /// # Errors
    ///
    /// Returns the authentication error for the first violated rule.
    pub fn to_config(&self) -> AuthResult<AuthenticationConfig> {
        build_authentication_from_tag(&self.scheme, self.properties.as_ref())
    }
}

/// Endpoint block of an action create payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointModel {
    /// Endpoint URI.
    pub uri: String,
    /// Endpoint credentials.
    pub authentication: AuthenticationRequest,
}

/// Endpoint block of an action update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointUpdateModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement endpoint URI.
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement endpoint credentials.
    pub authentication: Option<AuthenticationRequest>,
}

/// Action create payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionModel {
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-form description.
    pub description: Option<String>,
    /// Endpoint configuration.
    pub endpoint: EndpointModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Rule payload forwarded to the rule mapper.
    pub rule: Option<Value>,
}

/// Action update payload; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionUpdateModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement display name.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement description.
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement endpoint configuration.
    pub endpoint: Option<EndpointUpdateModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement rule payload.
    pub rule: Option<Value>,
}

/// Authentication block of an outbound endpoint: the scheme only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticationTypeResponse {
    #[serde(rename = "type")]
    /// Scheme of the stored configuration.
    pub scheme: AuthenticationScheme,
}

impl From<SchemeSummary> for AuthenticationTypeResponse {
    fn from(summary: SchemeSummary) -> Self {
        Self {
            scheme: summary.scheme,
        }
    }
}

/// Endpoint block of an action response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Endpoint URI.
    pub uri: Option<String>,
    /// Endpoint authentication type.
    pub authentication: AuthenticationTypeResponse,
}

/// Full representation of a stored action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    /// Action identifier.
    pub id: Uuid,
    #[serde(rename = "type")]
    /// Extension point the action is bound to.
    pub action_type: ActionType,
    /// Display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form description.
    pub description: Option<String>,
    /// Activation state.
    pub status: ActionStatus,
    /// Endpoint summary.
    pub endpoint: EndpointResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Rendered rule.
    pub rule: Option<Value>,
}

/// HTTP method advertised on a link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkMethod {
    /// `GET`.
    Get,
}

/// Hypermedia link attached to list entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Target URL.
    pub href: String,
    /// Link relation.
    pub rel: String,
    /// Method to use on the target.
    pub method: LinkMethod,
}

/// Compact representation of a stored action used in listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionBasicResponse {
    /// Action identifier.
    pub id: Uuid,
    #[serde(rename = "type")]
    /// Extension point the action is bound to.
    pub action_type: ActionType,
    /// Display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form description.
    pub description: Option<String>,
    /// Activation state.
    pub status: ActionStatus,
    /// Related links.
    pub links: Vec<Link>,
}
