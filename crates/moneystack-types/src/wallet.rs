use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multi-chain wallet as returned by the wallet service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// chain -> address
    #[serde(default)]
    pub addresses: BTreeMap<String, String>,
}

impl Wallet {
    /// `chain=address` pairs in chain order
    pub fn address_summary(&self) -> String {
        self.addresses
            .iter()
            .map(|(chain, address)| format!("{}={}", chain, address))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Token holding on one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    /// Decimal string, kept as sent to avoid losing precision
    pub balance: String,
    #[serde(default)]
    pub usd_value: f64,
}

impl TokenBalance {
    pub fn is_zero(&self) -> bool {
        self.balance.trim().parse::<f64>().map(|b| b <= 0.0).unwrap_or(true)
    }
}

/// chain -> token balances
pub type Balances = BTreeMap<String, Vec<TokenBalance>>;

/// Receipt returned after submitting a transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub hash: String,
    pub status: String,
    #[serde(default)]
    pub explorer_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub token: String,
    pub status: String,
}
