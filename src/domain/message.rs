use thiserror::Error;

/// Opaque description of an upstream failure.
///
/// Whatever produced the failure has already flattened it to text; the
/// value travels through the result stream and into the error state
/// unchanged, and the view renders it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CustomMessage(String);

impl CustomMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CustomMessage {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for CustomMessage {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}
