use async_trait::async_trait;
use moneystack_models::{ToolCall, ToolDefinition};
use moneystack_toolcore::ToolResult;
use moneystack_tools::Dispatcher;

/// What the loop needs from the tool side
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    fn definitions(&self) -> Vec<ToolDefinition>;

    /// Run one call; failures come back as an error `ToolResult`, never as a fault
    async fn call_tool(&self, call: &ToolCall) -> ToolResult;
}

#[async_trait]
impl ToolExecutor for Dispatcher {
    fn definitions(&self) -> Vec<ToolDefinition> {
        self.tool_definitions()
    }

    async fn call_tool(&self, call: &ToolCall) -> ToolResult {
        self.dispatch(&call.name, &call.input).await
    }
}
