//! Seam for compiling action rules.
//!
//! Rule compilation lives outside this workspace; callers pass an
//! implementation of [`RuleMapper`] into the action builders.

use serde_json::Value;

use crate::action::{ActionRule, ActionType};
use crate::error::RuleMappingError;

/// Compiles inbound rule payloads and renders stored rules back.
pub trait RuleMapper: Send + Sync {
    /// Compile `rule` for the given action type and tenant.
    ///
    /// # Errors
    ///
    /// Returns [`RuleMappingError`] when the rule cannot be compiled.
    fn to_action_rule(
        &self,
        rule: &Value,
        action_type: ActionType,
        tenant_domain: &str,
    ) -> Result<ActionRule, RuleMappingError>;

    /// Render a stored rule for a response payload.
    fn to_rule_response(&self, rule: &ActionRule) -> Value;
}

/// Rule mapper that keeps rule payloads as-is.
///
/// Accepts any JSON object and renders it back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueRuleMapper;

impl RuleMapper for OpaqueRuleMapper {
    fn to_action_rule(
        &self,
        rule: &Value,
        action_type: ActionType,
        _tenant_domain: &str,
    ) -> Result<ActionRule, RuleMappingError> {
        if !rule.is_object() {
            return Err(RuleMappingError::InvalidRule {
                action_type,
                reason: "rule must be a JSON object",
            });
        }
        Ok(ActionRule::new(rule.clone()))
    }

    fn to_rule_response(&self, rule: &ActionRule) -> Value {
        rule.expression().clone()
    }
}
