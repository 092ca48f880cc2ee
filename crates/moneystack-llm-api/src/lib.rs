//! # moneystack-llm-api
//!
//! The model side of the agent loop: an [`LlmClient`] trait and an Anthropic
//! Messages API implementation of it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use moneystack_llm_api::{ClientFactory, LlmClient, DEFAULT_MODEL};
//! use moneystack_models::{ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(Some("your-api-key".to_string()), None, false)?;
//!
//!     let request = ChatRequest {
//!         model: DEFAULT_MODEL.to_string(),
//!         max_tokens: 1024,
//!         system: None,
//!         messages: vec![Message::user("Hello!")],
//!         tools: vec![],
//!     };
//!
//!     let response = client.chat(request).await?;
//!     println!("Response: {}", response.into_message().text());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

// Re-export commonly used types
pub use client::{anthropic::AnthropicLlmClient, LlmClient};
pub use config::{
    ClientFactory, ANTHROPIC_API_URL, ANTHROPIC_VERSION, API_KEY_HEADER, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
