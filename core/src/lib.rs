pub mod config;
pub mod context;
pub mod errors;
pub mod handler;
pub mod model;
pub mod registry;
pub mod telemetry;

pub use config::GreeterConfig;
pub use context::InvocationContext;
pub use errors::{ConfigError, HandlerError, ValidationError};
pub use handler::{AnotherLambda, GreetingLog, ProcessingService, RequestHandler, TracingGreetingLog};
pub use model::{InputObject, OutputObject};
pub use registry::{Handler, HandlerName};
