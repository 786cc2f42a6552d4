use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::context::InvocationContext;
use crate::errors::{ConfigError, HandlerError};
use crate::handler::{AnotherLambda, GreetingLog, ProcessingService, RequestHandler};
use crate::model::{InputObject, OutputObject};

/// Names under which handlers are exposed to the invocation platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerName {
    Another,
    #[default]
    Processing,
}

impl HandlerName {
    pub const ALL: [HandlerName; 2] = [HandlerName::Another, HandlerName::Processing];

    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerName::Another => "another",
            HandlerName::Processing => "processing",
        }
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandlerName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandlerName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::Invalid {
                message: format!(
                    "unknown handler '{}', expected one of: another, processing",
                    s
                ),
            })
    }
}

/// A resolved handler. Each variant decodes the raw event into the input type
/// its handler declares, so `another` never rejects a payload.
#[derive(Clone)]
pub enum Handler {
    Another(AnotherLambda),
    Processing(ProcessingService),
}

impl Handler {
    pub fn name(&self) -> HandlerName {
        match self {
            Handler::Another(_) => HandlerName::Another,
            Handler::Processing(_) => HandlerName::Processing,
        }
    }

    pub fn invoke(&self, event: Value, context: &InvocationContext) -> Result<OutputObject, HandlerError> {
        match self {
            Handler::Another(handler) => handler.handle_request(event, context),
            Handler::Processing(handler) => {
                let input: InputObject = serde_json::from_value(event)?;
                handler.handle_request(input, context)
            }
        }
    }
}

/// Builds the handler registered under `name`.
///
/// `log` is only used by handlers that emit greeting events.
pub fn resolve(name: HandlerName, log: Arc<dyn GreetingLog>) -> Handler {
    debug!("Resolving handler {}", name);
    match name {
        HandlerName::Another => Handler::Another(AnotherLambda),
        HandlerName::Processing => Handler::Processing(ProcessingService::new(log)),
    }
}

/// Runs one invocation against a raw JSON event and returns the JSON response.
pub fn invoke_json(
    handler: &Handler,
    event: Value,
    context: &InvocationContext,
) -> Result<Value, HandlerError> {
    let output = handler.invoke(event, context)?;
    Ok(serde_json::to_value(output)?)
}
