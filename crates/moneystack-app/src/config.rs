use anyhow::{bail, Result};
use moneystack_sdk::{CasinoClient, DomainsClient, ServiceClient, TradingClient, WalletClient};
use moneystack_tools::Services;
use std::sync::Arc;

use crate::cli::ServiceArgs;

/// Connection settings shared by the four service clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub referral_code: String,
    pub wallet_api: String,
    pub trading_api: String,
    pub casino_api: String,
    pub domains_api: String,
    pub verbose: bool,
}

impl ClientConfig {
    /// Build from parsed CLI args; clap has already applied env fallbacks
    pub fn from_args(args: &ServiceArgs, verbose: bool) -> Self {
        Self {
            api_key: args.api_key.clone().filter(|key| !key.trim().is_empty()),
            referral_code: args.referral_code.clone(),
            wallet_api: args.wallet_api.clone(),
            trading_api: args.trading_api.clone(),
            casino_api: args.casino_api.clone(),
            domains_api: args.domains_api.clone(),
            verbose,
        }
    }

    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) => Ok(key),
            None => bail!("PURPLEFLEA_API_KEY is not set (use --api-key or the environment)"),
        }
    }

    pub fn service_client(&self, base_url: &str) -> Result<ServiceClient> {
        Ok(ServiceClient::new(base_url, self.api_key()?)
            .with_referral_code(self.referral_code.clone())
            .with_verbose(self.verbose))
    }

    pub fn wallet(&self) -> Result<WalletClient> {
        Ok(WalletClient::new(self.service_client(&self.wallet_api)?))
    }

    pub fn trading(&self) -> Result<TradingClient> {
        Ok(TradingClient::new(self.service_client(&self.trading_api)?))
    }

    pub fn casino(&self) -> Result<CasinoClient> {
        Ok(CasinoClient::new(self.service_client(&self.casino_api)?))
    }

    pub fn domains(&self) -> Result<DomainsClient> {
        Ok(DomainsClient::new(self.service_client(&self.domains_api)?))
    }

    /// All four clients behind their traits, as the dispatcher wants them
    pub fn services(&self) -> Result<Services> {
        Ok(Services {
            wallet: Arc::new(self.wallet()?),
            trading: Arc::new(self.trading()?),
            casino: Arc::new(self.casino()?),
            domains: Arc::new(self.domains()?),
        })
    }
}
