use anyhow::Result;
use async_trait::async_trait;
use moneystack_models::{ChatRequest, LlmResponse};

pub mod anthropic;

/// Trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one request carrying the full transcript and return the model's reply
    async fn chat(&self, request: ChatRequest) -> Result<LlmResponse>;
}
