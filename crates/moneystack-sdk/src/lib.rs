//! Typed clients for the wallet, trading, casino and domains services
//!
//! Each service sits behind a trait so callers can swap in fakes; the
//! `*Client` types implement them over [`ServiceClient`].

pub mod casino;
pub mod client;
pub mod domains;
pub mod error;
pub mod trading;
pub mod wallet;

pub use casino::{CasinoApi, CasinoClient};
pub use client::{ServiceClient, REFERRAL_HEADER};
pub use domains::{DomainsApi, DomainsClient, RegisterRequest};
pub use error::ApiError;
pub use trading::{TradingApi, TradingClient};
pub use wallet::{TransferRequest, WalletApi, WalletClient};
