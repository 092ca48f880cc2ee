//! The agent conversation loop.
//!
//! [`AgentLoop`] alternates between asking the model for its next move and
//! running the tool calls it asks for, until the model ends its turn, the
//! turn limit is reached, or the run is cancelled.

pub mod config;
pub mod executor;
pub mod session;
pub mod transcript;

pub use config::{system_prompt, AgentConfig};
pub use executor::ToolExecutor;
pub use session::{AgentLoop, AgentOutcome, AgentRun, IncompleteReason};
pub use transcript::Transcript;

// Re-exported so callers can cancel a run without depending on tokio-util
pub use tokio_util::sync::CancellationToken;
