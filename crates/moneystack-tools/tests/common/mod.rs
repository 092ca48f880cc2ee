use async_trait::async_trait;
use moneystack_sdk::{
    ApiError, CasinoApi, DomainsApi, RegisterRequest, TradingApi, TransferRequest, WalletApi,
};
use moneystack_tools::Services;
use moneystack_types::{
    Balances, ClosedPosition, DnsRecord, DomainAvailability, Game, GamePlay, GameRecord, GameResult, Market,
    Order, OrderRequest, OwnedDomain, Portfolio, Registration, TransactionRecord, TransferReceipt, Wallet,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for all four services.
///
/// Every call is recorded as `operation:argument`; `failing` makes every
/// call return a status error.
#[derive(Default)]
pub struct FakeServices {
    pub calls: Mutex<Vec<String>>,
    pub failing: Option<String>,
}

impl FakeServices {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failing: Some(message.to_string()),
        })
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            wallet: self.clone(),
            trading: self.clone(),
            casino: self.clone(),
            domains: self.clone(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match &self.failing {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WalletApi for FakeServices {
    async fn create_wallet(&self, name: &str, chains: &[String]) -> Result<Wallet, ApiError> {
        self.record(format!("create_wallet:{}:{}", name, chains.join(",")))?;
        let addresses = chains
            .iter()
            .map(|chain| (chain.clone(), format!("0x{}", chain)))
            .collect();
        Ok(Wallet {
            id: "w_1".to_string(),
            name: name.to_string(),
            addresses,
        })
    }

    async fn get_balances(&self, wallet_id: &str) -> Result<Balances, ApiError> {
        self.record(format!("get_balances:{}", wallet_id))?;
        Ok(BTreeMap::new())
    }

    async fn send(&self, wallet_id: &str, transfer: &TransferRequest) -> Result<TransferReceipt, ApiError> {
        self.record(format!("send:{}:{}", wallet_id, transfer.amount))?;
        Ok(TransferReceipt {
            hash: "0xhash".to_string(),
            status: "pending".to_string(),
            explorer_url: None,
        })
    }

    async fn get_transactions(&self, wallet_id: &str, _limit: u32) -> Result<Vec<TransactionRecord>, ApiError> {
        self.record(format!("get_transactions:{}", wallet_id))?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl TradingApi for FakeServices {
    async fn get_market(&self, symbol: &str) -> Result<Market, ApiError> {
        self.record(format!("get_market:{}", symbol))?;
        Ok(Market {
            symbol: symbol.to_string(),
            price: 97250.5,
            change_24h: 2.346,
            volume_24h: 1.0e9,
            funding_rate: 0.0001,
        })
    }

    async fn list_markets(&self, _min_volume: Option<f64>) -> Result<Vec<Market>, ApiError> {
        self.record("list_markets".to_string())?;
        Ok(Vec::new())
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<Order, ApiError> {
        self.record(format!("create_order:{}:{}:{}", order.symbol, order.side, order.size_usd))?;
        Ok(Order {
            id: "o_1".to_string(),
            symbol: order.symbol.clone(),
            side: order.side,
            order_type: order.order_type,
            fill_price: Some(3001.25),
        })
    }

    async fn get_portfolio(&self) -> Result<Portfolio, ApiError> {
        self.record("get_portfolio".to_string())?;
        Ok(Portfolio {
            total_value: 0.0,
            unrealized_pnl: 0.0,
            daily_pnl: 0.0,
            positions: Vec::new(),
        })
    }

    async fn close_position(&self, position_id: &str) -> Result<ClosedPosition, ApiError> {
        self.record(format!("close_position:{}", position_id))?;
        Ok(ClosedPosition {
            id: position_id.to_string(),
            realized_pnl: 0.0,
        })
    }
}

#[async_trait]
impl CasinoApi for FakeServices {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        self.record("list_games".to_string())?;
        Ok(Vec::new())
    }

    async fn play(&self, play: &GamePlay) -> Result<GameResult, ApiError> {
        self.record(format!("play:{}:{}", play.game, play.options))?;
        // Win when betting over, lose otherwise
        let won = play.options["over"] == serde_json::json!(true);
        Ok(GameResult {
            roll: Some(73.21),
            outcome: None,
            won,
            payout: if won { play.bet_amount * 1.98 } else { 0.0 },
            profit: None,
            client_seed: "player-seed".to_string(),
            nonce: 1,
            server_seed_hash: "00".repeat(32),
            server_seed: None,
        })
    }

    async fn get_history(&self, _limit: u32) -> Result<Vec<GameRecord>, ApiError> {
        self.record("get_history".to_string())?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl DomainsApi for FakeServices {
    async fn search(&self, name: &str, _tlds: &[String]) -> Result<Vec<DomainAvailability>, ApiError> {
        self.record(format!("search:{}", name))?;
        Ok([".com", ".io", ".ai"]
            .iter()
            .map(|tld| DomainAvailability {
                domain: format!("{}{}", name, tld),
                available: *tld != ".com",
                price: Some(12.0),
            })
            .collect())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Registration, ApiError> {
        self.record(format!("register:{}", request.domain))?;
        Ok(Registration {
            domain: request.domain.clone(),
            expires_at: "2027-10-19".to_string(),
            auto_renew: request.auto_renew,
            nameservers: Vec::new(),
        })
    }

    async fn list_domains(&self) -> Result<Vec<OwnedDomain>, ApiError> {
        self.record("list_domains".to_string())?;
        Ok(Vec::new())
    }

    async fn renew(&self, domain: &str, years: u32) -> Result<Registration, ApiError> {
        self.record(format!("renew:{}:{}", domain, years))?;
        Ok(Registration {
            domain: domain.to_string(),
            expires_at: "2028-10-19".to_string(),
            auto_renew: true,
            nameservers: Vec::new(),
        })
    }

    async fn set_dns(&self, domain: &str, records: &[DnsRecord]) -> Result<(), ApiError> {
        self.record(format!("set_dns:{}:{}", domain, records.len()))
    }
}
