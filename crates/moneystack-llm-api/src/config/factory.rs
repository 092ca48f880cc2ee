use anyhow::{bail, Result};
use std::env;
use std::sync::Arc;

use crate::client::{anthropic::AnthropicLlmClient, LlmClient};
use crate::config::ANTHROPIC_API_URL;

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an Anthropic client.
    ///
    /// # Arguments
    /// * `api_key` - API key; falls back to `ANTHROPIC_API_KEY`, then `ANTHROPIC_AUTH_TOKEN`
    /// * `api_url` - Optional custom API URL; falls back to `ANTHROPIC_BASE_URL`, then the public endpoint
    /// * `verbose` - Print request/response debug dumps
    pub fn create(api_key: Option<String>, api_url: Option<String>, verbose: bool) -> Result<Arc<dyn LlmClient>> {
        let key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env::var("ANTHROPIC_API_KEY").ok().filter(|k| !k.is_empty()))
            .or_else(|| env::var("ANTHROPIC_AUTH_TOKEN").ok().filter(|k| !k.is_empty()));
        let Some(key) = key else {
            bail!("ANTHROPIC_API_KEY is not set");
        };

        let url = api_url
            .or_else(|| env::var("ANTHROPIC_BASE_URL").ok())
            .unwrap_or_else(|| ANTHROPIC_API_URL.to_string());

        Ok(Arc::new(AnthropicLlmClient::new(key, url).with_verbose(verbose)))
    }
}
