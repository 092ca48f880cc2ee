pub mod commands;
pub mod setup;
pub mod task;

pub use setup::{build_agent, build_dispatcher};
pub use task::run_task_mode;
