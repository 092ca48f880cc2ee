use serde::{Deserialize, Serialize};

use crate::types::{ContentBlock, Message, ToolCall};

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    ToolUse,
    MaxTokens,
    StopSequence,
    #[serde(other)]
    Other,
}

/// Token usage information
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// One model reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: StopReason,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    pub fn into_message(self) -> Message {
        Message::assistant(self.content)
    }

    pub fn tool_calls(&self) -> Vec<ToolCall> {
        Message::assistant(self.content.clone()).tool_calls()
    }

    /// True only when the model stopped for tools and actually named at least one
    pub fn wants_tools(&self) -> bool {
        self.stop_reason == StopReason::ToolUse
            && self.content.iter().any(|block| matches!(block, ContentBlock::ToolUse { .. }))
    }
}
