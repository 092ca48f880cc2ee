//! Core types and structures for moneystack
//!
//! This crate provides the data returned by the wallet, trading, casino and
//! domains services, plus a few pure helpers shared by the CLI and the tools.

pub mod casino;
pub mod domains;
pub mod money;
pub mod trading;
pub mod wallet;

pub use casino::{Game, GamePlay, GameRecord, GameResult, HistorySummary};
pub use domains::{DnsRecord, DomainAvailability, OwnedDomain, Registration};
pub use money::{format_signed, format_usd};
pub use trading::{ClosedPosition, Market, Order, OrderRequest, OrderType, Portfolio, Position, Side};
pub use wallet::{Balances, TokenBalance, TransactionRecord, TransferReceipt, Wallet};

// ============================================================================
// Constants
// ============================================================================

/// Referral code attached to every request unless overridden
pub const DEFAULT_REFERRAL_CODE: &str = "STARTER";

/// Default service endpoints
pub const DEFAULT_WALLET_API: &str = "https://wallet.purpleflea.com/api/v1";
pub const DEFAULT_TRADING_API: &str = "https://trading.purpleflea.com/api/v1";
pub const DEFAULT_CASINO_API: &str = "https://casino.purpleflea.com/api/v1";
pub const DEFAULT_DOMAINS_API: &str = "https://domains.purpleflea.com/api/v1";

/// Chains a wallet is created on when the caller does not name any
pub const DEFAULT_WALLET_CHAINS: [&str; 2] = ["ethereum", "base"];

/// Default number of turns the agent loop may take before giving up
pub const DEFAULT_MAX_TURNS: usize = 25;
