use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use greeter_core::config::load_config;
use greeter_core::registry::{self, HandlerName};
use greeter_core::telemetry::init_tracing;
use greeter_core::{InvocationContext, TracingGreetingLog};
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;
use tracing::info;

/// Invokes one handler locally against a JSON event, the way the Lambda
/// runtime would, and prints the response.
#[derive(Parser, Debug)]
#[command(name = "runner-local")]
#[command(version)]
#[command(about = "Invoke a greeter handler locally", long_about = None)]
struct Cli {
    /// Handler to invoke (another, processing). Overrides the configuration.
    #[arg(short = 'H', long)]
    handler: Option<HandlerName>,

    /// YAML configuration file. Falls back to GREETER_* environment variables.
    #[arg(short, long)]
    config: Option<String>,

    /// Event file containing the JSON payload. Reads stdin when omitted.
    event: Option<String>,
}

async fn read_event(path: Option<&str>) -> Result<Value> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read event file {}", path))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Event is not valid JSON")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(config.log_filter.as_deref());

    let name = cli.handler.unwrap_or(config.handler);
    let handler = registry::resolve(name, Arc::new(TracingGreetingLog));
    let context = InvocationContext::new("local-1", name.as_str());

    let event = read_event(cli.event.as_deref()).await?;
    info!("Invoking {} locally", name);

    match registry::invoke_json(&handler, event, &context) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let envelope = json!({
                "errorType": e.error_type(),
                "errorMessage": e.to_string(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_handler_and_event() {
        let cli = Cli::try_parse_from(["runner-local", "--handler", "another", "event.json"]).unwrap();
        assert_eq!(cli.handler, Some(HandlerName::Another));
        assert_eq!(cli.event.as_deref(), Some("event.json"));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_rejects_unknown_handler() {
        assert!(Cli::try_parse_from(["runner-local", "-H", "unused"]).is_err());
    }

    fn event_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_read_event_from_file() {
        let file = event_file(r#"{"name": "Ana", "greeting": "Hello"}"#);

        let event = read_event(file.path().to_str()).await.unwrap();
        assert_eq!(event["name"], "Ana");
    }

    #[tokio::test]
    async fn test_read_event_rejects_invalid_json() {
        let file = event_file("not json");

        let err = read_event(file.path().to_str()).await.unwrap_err();
        assert!(err.to_string().contains("Event is not valid JSON"));
    }

    #[tokio::test]
    async fn test_read_event_missing_file() {
        let err = read_event(Some("/definitely/not/here.json")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read event file"));
    }
}
