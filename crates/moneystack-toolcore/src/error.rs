use moneystack_sdk::ApiError;
use thiserror::Error;

/// Why a tool call produced no result
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("missing required field '{field}' for {tool}")]
    MissingField { tool: String, field: String },

    #[error("invalid input for {tool}: {message}")]
    InvalidInput { tool: String, message: String },

    #[error("{0}")]
    Api(#[from] ApiError),
}

impl DispatchError {
    /// Text returned to the model in place of a result
    pub fn to_tool_output(&self) -> String {
        match self {
            DispatchError::UnknownTool(_) => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}

/// Problems found while assembling the tool registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool '{0}' registered twice")]
    DuplicateTool(String),

    #[error("tool '{0}' is not registered")]
    MissingTool(String),

    #[error("tool '{tool}': {message}")]
    InvalidSchema { tool: String, message: String },
}
