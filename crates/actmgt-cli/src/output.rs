//! Output renderers for CLI commands.

use actmgt_api_models::AuthenticationTypeResponse;
use actmgt_core::{ActionRequest, EndpointConfig, summarize};
use anyhow::anyhow;
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Secret-free projection of a validated action request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct RequestSummary {
    pub(crate) name: Option<String>,
    pub(crate) endpoint: Option<EndpointSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct EndpointSummary {
    pub(crate) uri: Option<String>,
    pub(crate) authentication: Option<AuthenticationTypeResponse>,
}

impl From<&EndpointConfig> for EndpointSummary {
    fn from(endpoint: &EndpointConfig) -> Self {
        Self {
            uri: endpoint.uri.clone(),
            authentication: endpoint
                .authentication
                .as_ref()
                .map(|config| summarize(config).into()),
        }
    }
}

impl From<&ActionRequest> for RequestSummary {
    fn from(request: &ActionRequest) -> Self {
        Self {
            name: request.name.clone(),
            endpoint: request.endpoint.as_ref().map(EndpointSummary::from),
        }
    }
}

pub(crate) fn format_summary(summary: &RequestSummary) -> CliResult<String> {
    serde_json::to_string_pretty(summary)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn render_summary(summary: &RequestSummary) -> CliResult<()> {
    let text = format_summary(summary)?;
    println!("{text}");
    Ok(())
}
