use serde::{Deserialize, Serialize};

/// Event accepted by every handler.
///
/// Both fields are optional on the wire so that handlers which ignore their
/// input can still accept partial or empty events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub greeting: Option<String>,
}

impl InputObject {
    pub fn new(name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            greeting: Some(greeting.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputObject {
    pub result: String,
}

impl OutputObject {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}
