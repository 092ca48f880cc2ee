// Models module - data structures for LLM conversations
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use requests::{ChatRequest, ToolDefinition};
pub use responses::{LlmResponse, StopReason, TokenUsage};
pub use types::{ContentBlock, Message, Role, ToolCall};
