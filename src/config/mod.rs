use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub azure: AzureConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// Azure OpenAI API configuration
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
}

/// Model sampling configuration
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let azure = AzureConfig {
            endpoint: env::var("AZURE_OPENAI_ENDPOINT")
                .map(|s| s.trim_end_matches('/').to_string())
                .map_err(|_| AppError::Config {
                    message: "AZURE_OPENAI_ENDPOINT is required".to_string(),
                })?,
            api_key: env::var("AZURE_OPENAI_API_KEY").map_err(|_| AppError::Config {
                message: "AZURE_OPENAI_API_KEY is required".to_string(),
            })?,
            deployment: env::var("AZURE_DEPLOYMENT_NAME").unwrap_or_else(|_| "gpt-4o".to_string()),
            api_version: env::var("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|_| "2024-08-01-preview".to_string()),
        };

        let model = ModelConfig {
            temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.7),
            max_tokens: env::var("MODEL_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2000),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
            max_retries: env::var("MAX_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: env::var("RETRY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
        };

        Ok(Config {
            azure,
            model,
            logging,
            request,
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}
