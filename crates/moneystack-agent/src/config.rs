use moneystack_llm_api::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use moneystack_types::{DEFAULT_MAX_TURNS, DEFAULT_REFERRAL_CODE};

/// Settings for one agent run
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub model: String,
    pub max_tokens: u32,
    /// Model calls allowed before the run is abandoned
    pub max_turns: usize,
    pub system_prompt: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            max_turns: DEFAULT_MAX_TURNS,
            system_prompt: system_prompt(DEFAULT_REFERRAL_CODE),
        }
    }
}

impl AgentConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_referral_code(mut self, referral_code: &str) -> Self {
        self.system_prompt = system_prompt(referral_code);
        self
    }
}

/// System prompt describing the four services
pub fn system_prompt(referral_code: &str) -> String {
    format!(
        "You are an autonomous AI agent with access to the Purple Flea Money Stack:\n\
         - Wallet API (https://wallet.purpleflea.com): Create wallets, check balances, send crypto\n\
         - Trading API (https://trading.purpleflea.com): Trade 275+ markets including BTC, ETH, TSLA, NVDA, GOLD\n\
         - Casino API (https://casino.purpleflea.com): Play provably fair games\n\
         - Domains API (https://domains.purpleflea.com): Register and manage domain names\n\
         \n\
         Your referral code is {} - always use it. All APIs are JSON-only and agent-native.\n\
         Complete the user's task autonomously using the available tools.",
        referral_code
    )
}
