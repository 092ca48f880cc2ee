use async_trait::async_trait;
use moneystack_types::{Balances, TransactionRecord, TransferReceipt, Wallet};
use serde::Serialize;

use crate::client::ServiceClient;
use crate::error::ApiError;

/// Outgoing transfer parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    pub to: String,
    /// Decimal string in token units
    pub amount: String,
    pub token: String,
    pub chain: String,
}

#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn create_wallet(&self, name: &str, chains: &[String]) -> Result<Wallet, ApiError>;
    async fn get_balances(&self, wallet_id: &str) -> Result<Balances, ApiError>;
    async fn send(&self, wallet_id: &str, transfer: &TransferRequest) -> Result<TransferReceipt, ApiError>;
    async fn get_transactions(&self, wallet_id: &str, limit: u32) -> Result<Vec<TransactionRecord>, ApiError>;
}

pub struct WalletClient {
    client: ServiceClient,
}

impl WalletClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct CreateWallet<'a> {
    name: &'a str,
    chains: &'a [String],
}

#[async_trait]
impl WalletApi for WalletClient {
    async fn create_wallet(&self, name: &str, chains: &[String]) -> Result<Wallet, ApiError> {
        self.client.post("/wallets", &CreateWallet { name, chains }).await
    }

    async fn get_balances(&self, wallet_id: &str) -> Result<Balances, ApiError> {
        self.client
            .get(&format!("/wallets/{}/balances", wallet_id), &[])
            .await
    }

    async fn send(&self, wallet_id: &str, transfer: &TransferRequest) -> Result<TransferReceipt, ApiError> {
        self.client
            .post(&format!("/wallets/{}/send", wallet_id), transfer)
            .await
    }

    async fn get_transactions(&self, wallet_id: &str, limit: u32) -> Result<Vec<TransactionRecord>, ApiError> {
        self.client
            .get(
                &format!("/wallets/{}/transactions", wallet_id),
                &[("limit", limit.to_string())],
            )
            .await
    }
}
