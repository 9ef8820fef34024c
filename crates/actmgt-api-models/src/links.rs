//! Link construction for action listings.

use actmgt_config::ActionApiConfig;
use actmgt_core::{Action, ActionType};

use crate::{Link, LinkMethod};

/// Builds per-type collection URIs and `self` links for actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLinkBuilder {
    base: String,
}

impl ActionLinkBuilder {
    /// Combine the public base URL with the actions collection path.
    ///
    /// Trailing slashes on either part are dropped.
    #[must_use]
    pub fn new(public_base_url: &str, actions_base_path: &str) -> Self {
        let host = public_base_url.trim_end_matches('/');
        let path = actions_base_path.trim_end_matches('/');
        Self {
            base: format!("{host}{path}"),
        }
    }

    /// Builder for the public base URL and collection path in `config`.
    #[must_use]
    pub fn from_config(config: &ActionApiConfig) -> Self {
        Self::new(&config.public_base_url, &config.actions_base_path)
    }

    /// Collection URI for one action type.
    #[must_use]
    pub fn for_action_type(&self, action_type: ActionType) -> String {
        format!("{}/{}", self.base, action_type.path_segment())
    }

    /// `self` link for a stored action.
    #[must_use]
    pub fn self_link(&self, action: &Action) -> Link {
        Link {
            href: format!("{}/{}", self.for_action_type(action.action_type), action.id),
            rel: "self".to_string(),
            method: LinkMethod::Get,
        }
    }
}
