use moneystack_models::ToolDefinition;
use moneystack_sdk::{CasinoApi, DomainsApi, RegisterRequest, TradingApi, WalletApi};
use moneystack_toolcore::{DispatchError, RegistryError, ToolInput, ToolRegistry, ToolResult};
use moneystack_types::{GamePlay, OrderRequest};
use serde_json::Value;
use std::sync::Arc;

use crate::format;

/// Service handles the tools call into
#[derive(Clone)]
pub struct Services {
    pub wallet: Arc<dyn WalletApi>,
    pub trading: Arc<dyn TradingApi>,
    pub casino: Arc<dyn CasinoApi>,
    pub domains: Arc<dyn DomainsApi>,
}

/// Routes model tool calls to the services and summarizes the results
pub struct Dispatcher {
    registry: ToolRegistry,
    services: Services,
}

impl Dispatcher {
    /// Dispatcher over the standard tool set; fails if the registry is incomplete
    pub fn new(services: Services) -> Result<Self, RegistryError> {
        Ok(Self::with_registry(ToolRegistry::standard()?, services))
    }

    pub fn with_registry(registry: ToolRegistry, services: Services) -> Self {
        Self { registry, services }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.get_tool_definitions()
    }

    /// Run one tool call and render the outcome as text for the model
    pub async fn dispatch(&self, name: &str, input: &Value) -> ToolResult {
        ToolResult::from_dispatch(self.try_dispatch(name, input).await)
    }

    pub async fn try_dispatch(&self, name: &str, input: &Value) -> Result<String, DispatchError> {
        let input = self.registry.resolve(name, input)?;
        self.execute(input).await
    }

    /// Execute already validated input
    pub async fn execute(&self, input: ToolInput) -> Result<String, DispatchError> {
        let Services {
            wallet,
            trading,
            casino,
            domains,
        } = &self.services;

        let summary = match input {
            ToolInput::CreateWallet(input) => {
                let created = wallet
                    .create_wallet(&input.name, &input.chains_or_default())
                    .await?;
                format::wallet_created(&created)
            }
            ToolInput::GetWalletBalance(input) => {
                let balances = wallet.get_balances(&input.wallet_id).await?;
                format::balances(&balances)
            }
            ToolInput::GetMarketPrice(input) => {
                let market = trading.get_market(&input.symbol).await?;
                format::market_price(&market)
            }
            ToolInput::PlaceTrade(input) => {
                let request = OrderRequest::market(&input.symbol, input.side, input.size_usd);
                let order = trading.create_order(&request).await?;
                format::order_executed(&order, input.size_usd)
            }
            ToolInput::SearchDomains(input) => {
                let results = domains.search(&input.name, &[]).await?;
                format::available_domains(&results)
            }
            ToolInput::RegisterDomain(input) => {
                let registration = domains.register(&RegisterRequest::new(&input.domain)).await?;
                format::registered(&registration)
            }
            ToolInput::PlayDice(input) => {
                let play = GamePlay::dice(input.bet_amount, input.target, input.over);
                let result = casino.play(&play).await?;
                format::dice_roll(&result, input.bet_amount)
            }
        };

        Ok(summary)
    }
}
