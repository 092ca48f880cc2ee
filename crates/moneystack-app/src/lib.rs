//! `moneystack` command-line application
//!
//! Parses the CLI, assembles service and agent configuration, and either runs
//! an agent task or a single direct service command.

pub mod app;
pub mod cli;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::ClientConfig;

use anyhow::Result;

use crate::app::commands;

impl Commands {
    /// Run a direct (non-agent) command and return what to print
    pub async fn execute(&self, config: &ClientConfig) -> Result<String> {
        match self {
            Commands::Agent(_) => anyhow::bail!("agent tasks run through run_task_mode"),
            Commands::Verify {
                server_seed,
                client_seed,
                nonce,
                hash,
            } => Ok(commands::verify_seeds(server_seed, client_seed, *nonce, hash)),
            Commands::Wallet { command } => commands::run_wallet(command, &config.wallet()?).await,
            Commands::Trade { command } => commands::run_trade(command, &config.trading()?).await,
            Commands::Casino { command } => commands::run_casino(command, &config.casino()?).await,
            Commands::Domains { command } => commands::run_domains(command, &config.domains()?).await,
        }
    }
}
