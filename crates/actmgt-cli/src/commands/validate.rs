//! `validate` command: map a payload file and print its projection.

use std::fs;
use std::path::Path;

use actmgt_api_models::{
    ActionLinkBuilder, ActionModel, ActionUpdateModel, build_action_request,
    build_updating_action_request,
};
use actmgt_config::ActionApiConfig;
use actmgt_core::{ActionRequest, ActionType, OpaqueRuleMapper};
use anyhow::Context;
use tracing::info;

use crate::error::{CliError, CliResult};
use crate::output::{RequestSummary, render_summary};

pub(crate) fn handle_validate(
    action_type: &str,
    update: bool,
    file: &Path,
    config: &ActionApiConfig,
) -> CliResult<()> {
    let action_type = action_type
        .parse::<ActionType>()
        .map_err(|err| CliError::validation(err.to_string()))?;
    let payload = fs::read_to_string(file)
        .with_context(|| format!("failed to read payload file {}", file.display()))
        .map_err(CliError::failure)?;

    let request = map_payload(action_type, &payload, update, &config.tenant_domain)?;
    let links = ActionLinkBuilder::from_config(config);
    info!(
        action_type = action_type.as_str(),
        collection = %links.for_action_type(action_type),
        update,
        "action payload is valid"
    );
    render_summary(&RequestSummary::from(&request))
}

pub(crate) fn map_payload(
    action_type: ActionType,
    payload: &str,
    update: bool,
    tenant_domain: &str,
) -> CliResult<ActionRequest> {
    let rules = OpaqueRuleMapper;
    let mapped = if update {
        let model: ActionUpdateModel = serde_json::from_str(payload)
            .context("failed to parse action update payload")
            .map_err(CliError::failure)?;
        build_updating_action_request(action_type, model, &rules, tenant_domain)
    } else {
        let model: ActionModel = serde_json::from_str(payload)
            .context("failed to parse action payload")
            .map_err(CliError::failure)?;
        build_action_request(action_type, model, &rules, tenant_domain)
    };
    mapped.map_err(|err| CliError::validation(format!("{:#}", anyhow::Error::new(err))))
}
