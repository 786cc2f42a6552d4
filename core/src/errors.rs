use thiserror::Error;

/// Message returned when the forbidden name is supplied to the greeting handler.
pub const CAN_ONLY_GREET_NICKNAMES: &str = "Can only greet nicknames";

/// The one business-rule failure a handler can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", CAN_ONLY_GREET_NICKNAMES)]
    ForbiddenName,

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] SerializationError),

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },

    #[error("YAML serialization failed: {reason}")]
    Yaml { reason: String },
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Serialization(SerializationError::Json {
            reason: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(SerializationError::Yaml {
            reason: err.to_string(),
        })
    }
}

impl HandlerError {
    /// Name reported as `errorType` in the platform's failure envelope.
    pub fn error_type(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "ValidationError",
            HandlerError::Serialization(_) => "SerializationError",
        }
    }
}
