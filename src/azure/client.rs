use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::types::{ChatRequest, ChatResponse};
use crate::config::{AzureConfig, RequestConfig};
use crate::error::{AzureError, AzureResult};

/// Client for the Azure OpenAI chat-completions API
#[derive(Clone)]
pub struct AzureClient {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    request_config: RequestConfig,
}

impl AzureClient {
    /// Create a new Azure OpenAI client
    pub fn new(config: &AzureConfig, request_config: RequestConfig) -> AzureResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(AzureError::Http)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            deployment: config.deployment.clone(),
            api_version: config.api_version.clone(),
            request_config,
        })
    }

    /// Request a chat completion, retrying transient failures with
    /// exponential backoff
    pub async fn chat_completion(&self, request: ChatRequest) -> AzureResult<ChatResponse> {
        let url = self.completions_url();

        let mut last_error = None;
        let mut retries = 0;

        while retries <= self.request_config.max_retries {
            if retries > 0 {
                let delay = Duration::from_millis(
                    self.request_config.retry_delay_ms * (2_u64.pow(retries - 1)),
                );
                warn!(
                    deployment = %self.deployment,
                    retry = retries,
                    delay_ms = delay.as_millis(),
                    "Retrying Azure OpenAI request"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();

            match self.execute_request(&url, &request).await {
                Ok(response) => {
                    let latency = start.elapsed();
                    info!(
                        deployment = %self.deployment,
                        latency_ms = latency.as_millis(),
                        "Chat completion succeeded"
                    );
                    return Ok(response);
                }
                Err(e) => {
                    let latency = start.elapsed();
                    error!(
                        deployment = %self.deployment,
                        error = %e,
                        latency_ms = latency.as_millis(),
                        retry = retries,
                        "Chat completion failed"
                    );
                    last_error = Some(e);
                    retries += 1;
                }
            }
        }

        Err(AzureError::Unavailable {
            message: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string()),
            retries,
        })
    }

    /// Execute a single request (internal)
    async fn execute_request(
        &self,
        url: &str,
        request: &ChatRequest,
    ) -> AzureResult<ChatResponse> {
        debug!(
            deployment = %self.deployment,
            messages = request.messages.len(),
            "Calling Azure OpenAI"
        );

        let response = self
            .client
            .post(url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AzureError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    AzureError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AzureError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| AzureError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        Ok(chat_response)
    }

    /// Build the deployment-scoped chat-completions URL
    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    /// Get the deployment name
    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    /// Get the base endpoint (for testing)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
