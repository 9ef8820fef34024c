//! Conversions between action DTOs and the `actmgt-core` domain.
//!
//! # Design
//! - Authentication is always rebuilt from the inbound payload; there is no
//!   patching of a stored configuration.
//! - Responses go through [`actmgt_core::summarize`], so only the scheme tag
//!   ever leaves the service.
//! - Events carry the action type and scheme tag, nothing from the property bag.

use actmgt_core::{
    Action, ActionRequest, ActionRule, ActionType, AuthenticationConfig, AuthenticationScheme,
    EndpointConfig, RuleMapper, SchemeSummary, summarize,
};
use serde_json::Value;
use tracing::debug;

use crate::error::ActionMapperError;
use crate::links::ActionLinkBuilder;
use crate::{
    ActionBasicResponse, ActionModel, ActionResponse, ActionUpdateModel, AuthenticationRequest,
    AuthenticationTypeResponse, EndpointResponse,
};

/// Build a create request from an inbound action payload.
///
/// # Errors
///
/// Returns [`ActionMapperError::Authentication`] when the endpoint credentials
/// fail validation and [`ActionMapperError::Rule`] when the rule mapper
/// rejects the rule.
pub fn build_action_request(
    action_type: ActionType,
    model: ActionModel,
    rules: &dyn RuleMapper,
    tenant_domain: &str,
) -> Result<ActionRequest, ActionMapperError> {
    let authentication = model.endpoint.authentication.to_config()?;
    let rule = compile_rule(model.rule.as_ref(), action_type, rules, tenant_domain)?;

    debug!(
        action_type = action_type.as_str(),
        scheme = authentication.scheme().as_str(),
        has_rule = rule.is_some(),
        "built action create request"
    );

    Ok(ActionRequest {
        name: Some(model.name),
        description: model.description,
        endpoint: Some(EndpointConfig {
            uri: Some(model.endpoint.uri),
            authentication: Some(authentication),
        }),
        rule,
    })
}

/// Build an update request from an inbound partial payload.
///
/// Credentials are only validated when the update carries an endpoint with an
/// authentication block; everything absent stays absent.
///
/// # Errors
///
/// Same as [`build_action_request`].
pub fn build_updating_action_request(
    action_type: ActionType,
    model: ActionUpdateModel,
    rules: &dyn RuleMapper,
    tenant_domain: &str,
) -> Result<ActionRequest, ActionMapperError> {
    let endpoint = match model.endpoint {
        Some(endpoint) => {
            let authentication = endpoint
                .authentication
                .as_ref()
                .map(AuthenticationRequest::to_config)
                .transpose()?;
            Some(EndpointConfig {
                uri: endpoint.uri,
                authentication,
            })
        }
        None => None,
    };
    let rule = compile_rule(model.rule.as_ref(), action_type, rules, tenant_domain)?;

    debug!(
        action_type = action_type.as_str(),
        scheme = endpoint
            .as_ref()
            .and_then(|endpoint| endpoint.authentication.as_ref())
            .map_or("unchanged", |auth| auth.scheme().as_str()),
        has_rule = rule.is_some(),
        "built action update request"
    );

    Ok(ActionRequest {
        name: model.name,
        description: model.description,
        endpoint,
        rule,
    })
}

/// Render a stored action as a full response.
#[must_use]
pub fn build_action_response(action: &Action, rules: &dyn RuleMapper) -> ActionResponse {
    ActionResponse {
        id: action.id,
        action_type: action.action_type,
        name: action.name.clone(),
        description: action.description.clone(),
        status: action.status,
        endpoint: EndpointResponse {
            uri: action.endpoint.uri.clone(),
            authentication: authentication_type(action.endpoint.authentication.as_ref()),
        },
        rule: action
            .rule
            .as_ref()
            .map(|rule| rules.to_rule_response(rule)),
    }
}

/// Render a stored action as a listing entry with its `self` link.
#[must_use]
pub fn build_action_basic_response(
    action: &Action,
    links: &ActionLinkBuilder,
) -> ActionBasicResponse {
    ActionBasicResponse {
        id: action.id,
        action_type: action.action_type,
        name: action.name.clone(),
        description: action.description.clone(),
        status: action.status,
        links: vec![links.self_link(action)],
    }
}

fn compile_rule(
    rule: Option<&Value>,
    action_type: ActionType,
    rules: &dyn RuleMapper,
    tenant_domain: &str,
) -> Result<Option<ActionRule>, ActionMapperError> {
    rule.map(|rule| rules.to_action_rule(rule, action_type, tenant_domain))
        .transpose()
        .map_err(ActionMapperError::from)
}

fn authentication_type(config: Option<&AuthenticationConfig>) -> AuthenticationTypeResponse {
    config.map_or(
        SchemeSummary {
            scheme: AuthenticationScheme::None,
        },
        summarize,
    )
    .into()
}
