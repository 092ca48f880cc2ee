use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conversation roles accepted by the Messages API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One block of message content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        is_error: bool,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>, is_error: bool) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
            is_error,
        }
    }
}

/// Tool invocation requested by the model
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}

/// Message structure for the conversation transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::text(text)],
        }
    }

    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }

    /// A user turn carrying tool results back to the model
    pub fn tool_results(results: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: results,
        }
    }

    /// Concatenated text blocks
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tool calls in the order the model emitted them
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse { id, name, input } => Some(ToolCall {
                    id: id.clone(),
                    name: name.clone(),
                    input: input.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn is_tool_result_turn(&self) -> bool {
        self.role == Role::User
            && !self.content.is_empty()
            && self
                .content
                .iter()
                .all(|block| matches!(block, ContentBlock::ToolResult { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_content_block_wire_format() {
        let block = ContentBlock::ToolUse {
            id: "toolu_1".to_string(),
            name: "get_market_price".to_string(),
            input: json!({"symbol": "BTC-PERP"}),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "tool_use", "id": "toolu_1", "name": "get_market_price", "input": {"symbol": "BTC-PERP"}})
        );

        let ok = ContentBlock::tool_result("toolu_1", "BTC-PERP: $1.00", false);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"type": "tool_result", "tool_use_id": "toolu_1", "content": "BTC-PERP: $1.00"})
        );

        let failed = ContentBlock::tool_result("toolu_2", "Error: boom", true);
        assert_eq!(serde_json::to_value(&failed).unwrap()["is_error"], json!(true));
    }

    #[test]
    fn test_message_accessors() {
        let message = Message::assistant(vec![
            ContentBlock::text("Checking prices."),
            ContentBlock::ToolUse { id: "a".into(), name: "get_market_price".into(), input: json!({"symbol": "BTC-PERP"}) },
            ContentBlock::ToolUse { id: "b".into(), name: "get_market_price".into(), input: json!({"symbol": "ETH-PERP"}) },
        ]);

        assert_eq!(message.text(), "Checking prices.");
        let ids: Vec<String> = message.tool_calls().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!message.is_tool_result_turn());
    }

    #[test]
    fn test_tool_result_turn_detection() {
        let turn = Message::tool_results(vec![ContentBlock::tool_result("a", "ok", false)]);
        assert!(turn.is_tool_result_turn());
        assert!(!Message::user("hello").is_tool_result_turn());
    }
}
