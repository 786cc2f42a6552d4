use std::sync::Arc;

use anyhow::Context as _;
use greeter_core::config::GreeterConfig;
use greeter_core::registry::{self, Handler};
use greeter_core::telemetry::init_tracing;
use greeter_core::{HandlerError, InvocationContext, OutputObject, TracingGreetingLog};
use lambda_runtime::{service_fn, Context, Diagnostic, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Failure reported back to the Lambda runtime API as `errorType`/`errorMessage`.
#[derive(Debug)]
pub struct InvocationFailure(HandlerError);

impl From<InvocationFailure> for Diagnostic {
    fn from(failure: InvocationFailure) -> Self {
        Diagnostic {
            error_type: failure.0.error_type().to_string(),
            error_message: failure.0.to_string(),
        }
    }
}

fn invocation_context(ctx: &Context) -> InvocationContext {
    InvocationContext::new(ctx.request_id.clone(), ctx.env_config.function_name.clone())
        .with_deadline(ctx.deadline)
}

/// Events arrive as raw JSON; the resolved handler decodes its own input type.
pub async fn lambda_handler(
    handler: &Handler,
    event: LambdaEvent<Value>,
) -> Result<OutputObject, InvocationFailure> {
    let (payload, ctx) = event.into_parts();
    let context = invocation_context(&ctx);
    debug!(
        "Invocation {} for {} ({}), deadline {:?}",
        context.request_id,
        context.function_name,
        handler.name(),
        context.deadline_ms
    );

    handler.invoke(payload, &context).map_err(|e| {
        warn!("Invocation {} failed: {}", context.request_id, e);
        InvocationFailure(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = GreeterConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(config.log_filter.as_deref());

    info!("Serving handler {}", config.handler);
    let handler = registry::resolve(config.handler, Arc::new(TracingGreetingLog));
    let handler_ref = &handler;

    lambda_runtime::run(service_fn(move |event| async move {
        lambda_handler(handler_ref, event).await
    }))
    .await
}
