use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::registry::HandlerName;

pub const CONFIG_ENV: &str = "GREETER_CONFIG";
pub const HANDLER_ENV: &str = "GREETER_HANDLER";
pub const LOG_ENV: &str = "GREETER_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreeterConfig {
    /// Which registered handler the runner serves.
    #[serde(default)]
    pub handler: HandlerName,
    /// Fallback tracing filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

pub fn load_config(config_path: Option<&str>) -> Result<GreeterConfig, ConfigError> {
    let config = match config_path {
        Some(path) => GreeterConfig::from_file(path)?,
        None => GreeterConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

impl GreeterConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: GreeterConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Reads `GREETER_CONFIG` as inline YAML when present, otherwise starts
    /// from defaults and applies `GREETER_HANDLER` and `GREETER_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(inline) = lookup(CONFIG_ENV) {
            return Self::from_yaml(&inline);
        }

        let mut config = GreeterConfig::default();
        if let Some(handler) = lookup(HANDLER_ENV) {
            config.handler = handler.trim().parse()?;
        }
        if let Some(filter) = lookup(LOG_ENV) {
            config.log_filter = Some(filter);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: "log_filter cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
