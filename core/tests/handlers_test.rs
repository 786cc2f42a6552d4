use std::sync::Arc;

use greeter_core::errors::CAN_ONLY_GREET_NICKNAMES;
use greeter_core::registry::{self, HandlerName};
use greeter_core::{InvocationContext, TracingGreetingLog};
use serde_json::json;

fn invoke(name: HandlerName, event: serde_json::Value) -> Result<serde_json::Value, String> {
    let handler = registry::resolve(name, Arc::new(TracingGreetingLog));
    let ctx = InvocationContext::new("integration", name.as_str());
    registry::invoke_json(&handler, event, &ctx).map_err(|e| e.to_string())
}

#[test]
fn test_greeting_scenario() {
    let out = invoke(
        HandlerName::Processing,
        json!({ "name": "Ana", "greeting": "Hello" }),
    )
    .unwrap();
    assert_eq!(out, json!({ "result": "Hello Ana" }));
}

#[test]
fn test_forbidden_name_scenario() {
    let err = invoke(
        HandlerName::Processing,
        json!({ "name": "Stuart", "greeting": "Hi" }),
    )
    .unwrap_err();
    assert_eq!(err, CAN_ONLY_GREET_NICKNAMES);
}

#[test]
fn test_lowercase_forbidden_name_succeeds() {
    let out = invoke(
        HandlerName::Processing,
        json!({ "name": "stuart", "greeting": "Hi" }),
    )
    .unwrap();
    assert_eq!(out["result"], "Hi stuart");
}

#[test]
fn test_absent_name_scenario() {
    let err = invoke(HandlerName::Processing, json!({ "greeting": "Hi" })).unwrap_err();
    assert_eq!(err, "Missing required field: name");
}

#[test]
fn test_absent_greeting_scenario() {
    let out = invoke(HandlerName::Processing, json!({ "name": "Ana" })).unwrap();
    assert_eq!(out, json!({ "result": " Ana" }));
}

#[test]
fn test_constant_handler_scenarios() {
    for event in [
        json!({ "name": "x", "greeting": "y" }),
        json!({}),
        json!({ "name": null, "greeting": null }),
        json!({ "name": "Stuart" }),
        json!({ "name": 42 }),
        json!("hello"),
    ] {
        let out = invoke(HandlerName::Another, event).unwrap();
        assert_eq!(out, json!({ "result": "Another lambda" }));
    }
}

#[test]
fn test_handlers_are_idempotent() {
    for name in HandlerName::ALL {
        let event = json!({ "name": "Ana", "greeting": "Hello" });
        let first = invoke(name, event.clone()).unwrap();
        let second = invoke(name, event).unwrap();
        assert_eq!(first, second);
    }
}
