// Error types for configuration, cookie storage and CLI usage.
// Validation failures are never errors: they come back as ValidationResult values.

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cookie storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Usage: {0}")]
    Usage(String),
}
