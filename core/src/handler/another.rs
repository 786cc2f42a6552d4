use serde_json::Value;

use crate::context::InvocationContext;
use crate::errors::HandlerError;
use crate::handler::RequestHandler;
use crate::model::OutputObject;

pub const ANOTHER_LAMBDA_RESULT: &str = "Another lambda";

/// Returns a fixed result regardless of the event it is given.
///
/// The event is taken as raw JSON so that any payload, whatever its shape,
/// is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnotherLambda;

impl RequestHandler<Value, OutputObject> for AnotherLambda {
    fn handle_request(
        &self,
        _input: Value,
        _context: &InvocationContext,
    ) -> Result<OutputObject, HandlerError> {
        Ok(OutputObject::new(ANOTHER_LAMBDA_RESULT))
    }
}
