use std::sync::Arc;

use tracing::info;

use crate::context::InvocationContext;
use crate::errors::{HandlerError, ValidationError};
use crate::handler::RequestHandler;
use crate::model::{InputObject, OutputObject};

/// The one name this service refuses to greet. Compared case-sensitively.
pub const FORBIDDEN_NAME: &str = "Stuart";

/// Sink for the informational event emitted on each successful greeting.
#[cfg_attr(test, mockall::automock)]
pub trait GreetingLog: Send + Sync {
    fn greeting(&self, name: &str);
}

/// Writes greeting events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingGreetingLog;

impl GreetingLog for TracingGreetingLog {
    fn greeting(&self, name: &str) {
        info!("Received request to greet {}", name);
    }
}

/// Validates the requested name and joins it with the greeting.
#[derive(Clone)]
pub struct ProcessingService {
    log: Arc<dyn GreetingLog>,
}

impl ProcessingService {
    pub fn new(log: Arc<dyn GreetingLog>) -> Self {
        Self { log }
    }

    /// Produces `"{greeting} {name}"`, or a `ValidationError` when the name is
    /// absent or forbidden.
    ///
    /// An absent greeting counts as empty. Empty strings are accepted as-is,
    /// so an empty name yields a trailing space and an empty greeting a
    /// leading one.
    pub fn process(&self, input: InputObject) -> Result<OutputObject, ValidationError> {
        let name = input.name.ok_or_else(|| ValidationError::MissingField {
            field: "name".to_string(),
        })?;
        if name == FORBIDDEN_NAME {
            return Err(ValidationError::ForbiddenName);
        }
        let greeting = input.greeting.unwrap_or_default();

        self.log.greeting(&name);
        Ok(OutputObject::new(format!("{} {}", greeting, name)))
    }
}

impl RequestHandler<InputObject, OutputObject> for ProcessingService {
    fn handle_request(
        &self,
        input: InputObject,
        _context: &InvocationContext,
    ) -> Result<OutputObject, HandlerError> {
        Ok(self.process(input)?)
    }
}
