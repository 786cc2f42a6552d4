pub mod another;
pub mod processing;

use crate::context::InvocationContext;
use crate::errors::HandlerError;

/// The contract every function exposed to the invocation platform implements.
///
/// A handler receives one deserialized event plus the invocation context and
/// produces exactly one response or one failure. Handlers hold no per-request
/// state, so the same instance may serve any number of invocations.
pub trait RequestHandler<I, O>: Send + Sync {
    fn handle_request(&self, input: I, context: &InvocationContext) -> Result<O, HandlerError>;
}

pub use another::AnotherLambda;
pub use processing::{GreetingLog, ProcessingService, TracingGreetingLog};
