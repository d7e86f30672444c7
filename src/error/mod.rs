use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Azure OpenAI error: {0}")]
    Azure(#[from] AzureError),

    #[error("Reasoning error: {0}")]
    Reasoning(#[from] ReasoningError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Azure OpenAI API errors
#[derive(Debug, Error)]
pub enum AzureError {
    #[error("Azure OpenAI unavailable: {message} (retries: {retries})")]
    Unavailable { message: String, retries: u32 },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors produced while orchestrating a reasoning request
#[derive(Debug, Error)]
pub enum ReasoningError {
    #[error("Validation failed: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("No valid thought steps found in response")]
    NoStepsExtracted,

    #[error("Model returned an empty completion")]
    EmptyCompletion,
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Azure OpenAI operations
pub type AzureResult<T> = Result<T, AzureError>;
