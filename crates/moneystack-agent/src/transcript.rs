use moneystack_models::{Message, Role};

/// Ordered, append-only conversation history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(task: &str) -> Self {
        Self {
            messages: vec![Message::user(task)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user turns that carry tool results
    pub fn tool_result_turns(&self) -> usize {
        self.messages.iter().filter(|m| m.is_tool_result_turn()).count()
    }

    pub fn last_assistant_text(&self) -> Option<String> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneystack_models::ContentBlock;

    #[test]
    fn test_counts_tool_result_turns() {
        let mut transcript = Transcript::new("do it");
        transcript.push(Message::assistant(vec![ContentBlock::ToolUse {
            id: "t1".to_string(),
            name: "get_market_price".to_string(),
            input: serde_json::json!({"symbol": "BTC-PERP"}),
        }]));
        transcript.push(Message::tool_results(vec![ContentBlock::tool_result("t1", "ok", false)]));
        transcript.push(Message::assistant(vec![ContentBlock::text("done")]));

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.tool_result_turns(), 1);
        assert_eq!(transcript.last_assistant_text().as_deref(), Some("done"));
    }
}
