use anyhow::{Context, Result};
use async_trait::async_trait;
use moneystack_logging::{log_request, log_response};
use moneystack_models::{ChatRequest, LlmResponse};

use super::LlmClient;
use crate::config::{ANTHROPIC_VERSION, API_KEY_HEADER};

/// Anthropic LLM client implementation using native Anthropic API
pub struct AnthropicLlmClient {
    api_key: String,
    base_url: String,
    verbose: bool,
    client: reqwest::Client,
}

impl AnthropicLlmClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn get_messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl LlmClient for AnthropicLlmClient {
    async fn chat(&self, request: ChatRequest) -> Result<LlmResponse> {
        let url = self.get_messages_url();
        if self.verbose {
            let body = serde_json::to_value(&request)?;
            log_request("POST", &url, Some(&body), API_KEY_HEADER, &self.api_key, true);
        }

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to reach the Anthropic API")?;

        let status = response.status();
        let body = response.text().await?;
        log_response(status, &body, self.verbose);

        if !status.is_success() {
            return Err(anyhow::anyhow!("Anthropic API error ({}): {}", status.as_u16(), body));
        }

        serde_json::from_str(&body).context("Failed to parse Anthropic response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url_trims_slash() {
        let client = AnthropicLlmClient::new("key".to_string(), "https://api.anthropic.com/".to_string());
        assert_eq!(client.get_messages_url(), "https://api.anthropic.com/v1/messages");
    }
}
