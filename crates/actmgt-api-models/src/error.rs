//! Error types for action request mapping.

use actmgt_core::{AuthError, RuleMappingError};
use thiserror::Error;

/// Failures raised while turning an inbound payload into an action request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionMapperError {
    /// Endpoint authentication failed validation.
    #[error(transparent)]
    Authentication(#[from] AuthError),
    /// The rule mapper rejected the rule payload.
    #[error("failed to map action rule")]
    Rule {
        /// Rule mapper failure.
        #[from]
        source: RuleMappingError,
    },
}

impl ActionMapperError {
    /// Stable machine-readable identifier for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Authentication(err) => err.code(),
            Self::Rule { .. } => "invalid_action_rule",
        }
    }
}
