//! Shared payloads and stored actions for tests.

use actmgt_core::{
    Action, ActionStatus, ActionType, AuthResult, AuthenticationScheme, EndpointConfig,
    PropertyBag, build_authentication,
};
use serde_json::{Value, json};
use uuid::Uuid;

/// Endpoint URI used by the payload fixtures.
pub const HOOK_URI: &str = "https://hooks.example/action";

/// Secret values placed in [`full_property_bag`]; none may appear in responses.
pub const SECRET_VALUES: [&str; 3] = ["fixture-password", "fixture-token", "fixture-key"];

/// Build a bag where every entry has a non-null value.
#[must_use]
pub fn property_bag(entries: &[(&str, &str)]) -> PropertyBag {
    entries
        .iter()
        .map(|(name, value)| (*name, Some((*value).to_string())))
        .collect()
}

/// Bag populating every property any scheme understands.
#[must_use]
pub fn full_property_bag() -> PropertyBag {
    property_bag(&[
        ("username", "fixture-user"),
        ("password", SECRET_VALUES[0]),
        ("accessToken", SECRET_VALUES[1]),
        ("header", "X-Fixture-Key"),
        ("value", SECRET_VALUES[2]),
    ])
}

/// Create payload for an action using `scheme` and the given properties.
#[must_use]
pub fn action_payload(scheme: &str, properties: &Value) -> Value {
    json!({
        "name": "fixture-action",
        "description": "fixture description",
        "endpoint": {
            "uri": HOOK_URI,
            "authentication": {
                "type": scheme,
                "properties": properties,
            }
        }
    })
}

/// Stored action whose endpoint is authenticated with `scheme`.
///
/// # Errors
///
/// Propagates the authentication error when `properties` do not satisfy `scheme`.
pub fn stored_action(
    action_type: ActionType,
    scheme: AuthenticationScheme,
    properties: &PropertyBag,
) -> AuthResult<Action> {
    Ok(Action {
        id: Uuid::new_v4(),
        action_type,
        name: "fixture-action".to_string(),
        description: Some("fixture description".to_string()),
        status: ActionStatus::Active,
        endpoint: EndpointConfig {
            uri: Some(HOOK_URI.to_string()),
            authentication: Some(build_authentication(scheme, Some(properties))?),
        },
        rule: None,
    })
}
