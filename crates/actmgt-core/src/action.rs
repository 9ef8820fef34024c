//! Action domain types shared by the request builders and response mappers.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::UnknownActionType;
use crate::model::AuthenticationConfig;

/// Extension points an action can be registered against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Runs before an access token is issued.
    PreIssueAccessToken,
    /// Runs before a password update.
    PreUpdatePassword,
    /// Runs before a profile update.
    PreUpdateProfile,
    /// Runs before self registration.
    PreRegistration,
    /// Runs as an authentication step.
    Authentication,
}

impl ActionType {
    /// Every action type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::PreIssueAccessToken,
        Self::PreUpdatePassword,
        Self::PreUpdateProfile,
        Self::PreRegistration,
        Self::Authentication,
    ];

    #[must_use]
    /// Render the type as its wire tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreIssueAccessToken => "PRE_ISSUE_ACCESS_TOKEN",
            Self::PreUpdatePassword => "PRE_UPDATE_PASSWORD",
            Self::PreUpdateProfile => "PRE_UPDATE_PROFILE",
            Self::PreRegistration => "PRE_REGISTRATION",
            Self::Authentication => "AUTHENTICATION",
        }
    }

    #[must_use]
    /// URL path segment used for the type's collection.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::PreIssueAccessToken => "preIssueAccessToken",
            Self::PreUpdatePassword => "preUpdatePassword",
            Self::PreUpdateProfile => "preUpdateProfile",
            Self::PreRegistration => "preRegistration",
            Self::Authentication => "authentication",
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    /// Accepts either the wire tag or the path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.path_segment() == s)
            .ok_or_else(|| UnknownActionType {
                value: s.to_string(),
            })
    }
}

/// Activation state of a stored action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    /// The action is invoked at its extension point.
    Active,
    /// The action is registered but skipped.
    Inactive,
}

/// Compiled rule deciding when an action runs.
///
/// The expression is produced and interpreted by a [`crate::RuleMapper`]; this
/// crate treats it as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRule {
    expression: Value,
}

impl ActionRule {
    #[must_use]
    /// Wrap a compiled rule expression.
    pub const fn new(expression: Value) -> Self {
        Self { expression }
    }

    #[must_use]
    /// Compiled rule expression.
    pub const fn expression(&self) -> &Value {
        &self.expression
    }
}

/// Outbound endpoint of an action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointConfig {
    /// Endpoint URI, when supplied.
    pub uri: Option<String>,
    /// Credentials sent with each call, when supplied.
    pub authentication: Option<AuthenticationConfig>,
}

/// Action create or update request handed to the persistence workflow.
///
/// Absent fields on an update mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRequest {
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Endpoint configuration.
    pub endpoint: Option<EndpointConfig>,
    /// Compiled rule.
    pub rule: Option<ActionRule>,
}

/// Stored action returned by the persistence workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Identifier assigned on creation.
    pub id: Uuid,
    /// Extension point the action is bound to.
    pub action_type: ActionType,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Activation state.
    pub status: ActionStatus,
    /// Endpoint configuration.
    pub endpoint: EndpointConfig,
    /// Compiled rule.
    pub rule: Option<ActionRule>,
}
