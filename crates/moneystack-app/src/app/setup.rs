use anyhow::{Context, Result};
use moneystack_agent::{AgentConfig, AgentLoop};
use moneystack_llm_api::ClientFactory;
use moneystack_tools::{Dispatcher, Services};
use std::sync::Arc;

use crate::cli::AgentArgs;
use crate::config::ClientConfig;

/// Dispatcher over the real service clients
pub fn build_dispatcher(services: Services) -> Result<Dispatcher> {
    Dispatcher::new(services).context("Tool registry is inconsistent")
}

pub fn agent_config(args: &AgentArgs, client_config: &ClientConfig) -> AgentConfig {
    AgentConfig::default()
        .with_model(args.model.clone())
        .with_max_tokens(args.max_tokens)
        .with_max_turns(args.max_turns)
        .with_referral_code(&client_config.referral_code)
}

/// Wire the model client, the tools and the config into a loop ready to run
pub fn build_agent(args: &AgentArgs, client_config: &ClientConfig) -> Result<AgentLoop> {
    let llm = ClientFactory::create(
        args.anthropic_api_key.clone(),
        args.anthropic_base_url.clone(),
        client_config.verbose,
    )?;
    let dispatcher = build_dispatcher(client_config.services()?)?;
    Ok(AgentLoop::new(llm, Arc::new(dispatcher), agent_config(args, client_config)))
}
