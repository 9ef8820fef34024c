//! Rule mapper doubles.

use std::sync::{Mutex, PoisonError};

use actmgt_core::{ActionRule, ActionType, RuleMapper, RuleMappingError};
use serde_json::{Value, json};

/// Call recorded by [`RecordingRuleMapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    /// Action type passed to the mapper.
    pub action_type: ActionType,
    /// Tenant domain passed to the mapper.
    pub tenant_domain: String,
}

/// Rule mapper that records every compile call and optionally rejects them.
#[derive(Debug, Default)]
pub struct RecordingRuleMapper {
    calls: Mutex<Vec<RuleCall>>,
    reject_with: Option<String>,
}

impl RecordingRuleMapper {
    /// Mapper that accepts every rule.
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Mapper that rejects every rule with `message`.
    #[must_use]
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_with: Some(message.into()),
        }
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RuleCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RuleMapper for RecordingRuleMapper {
    fn to_action_rule(
        &self,
        rule: &Value,
        action_type: ActionType,
        tenant_domain: &str,
    ) -> Result<ActionRule, RuleMappingError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RuleCall {
                action_type,
                tenant_domain: tenant_domain.to_string(),
            });

        if let Some(message) = &self.reject_with {
            return Err(RuleMappingError::Rejected {
                action_type,
                message: message.clone(),
            });
        }
        Ok(ActionRule::new(json!({ "compiled": rule })))
    }

    fn to_rule_response(&self, rule: &ActionRule) -> Value {
        rule.expression()
            .get("compiled")
            .cloned()
            .unwrap_or(Value::Null)
    }
}
