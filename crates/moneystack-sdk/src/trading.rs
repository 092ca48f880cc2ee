use async_trait::async_trait;
use moneystack_types::{ClosedPosition, Market, Order, OrderRequest, Portfolio};

use crate::client::ServiceClient;
use crate::error::ApiError;

#[async_trait]
pub trait TradingApi: Send + Sync {
    async fn get_market(&self, symbol: &str) -> Result<Market, ApiError>;
    async fn list_markets(&self, min_volume: Option<f64>) -> Result<Vec<Market>, ApiError>;
    async fn create_order(&self, order: &OrderRequest) -> Result<Order, ApiError>;
    async fn get_portfolio(&self) -> Result<Portfolio, ApiError>;
    async fn close_position(&self, position_id: &str) -> Result<ClosedPosition, ApiError>;
}

pub struct TradingClient {
    client: ServiceClient,
}

impl TradingClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TradingApi for TradingClient {
    async fn get_market(&self, symbol: &str) -> Result<Market, ApiError> {
        self.client.get(&format!("/markets/{}", symbol), &[]).await
    }

    async fn list_markets(&self, min_volume: Option<f64>) -> Result<Vec<Market>, ApiError> {
        let query: Vec<(&str, String)> = min_volume
            .map(|v| vec![("min_volume", v.to_string())])
            .unwrap_or_default();
        self.client.get("/markets", &query).await
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<Order, ApiError> {
        self.client.post("/orders", order).await
    }

    async fn get_portfolio(&self) -> Result<Portfolio, ApiError> {
        self.client.get("/portfolio", &[]).await
    }

    async fn close_position(&self, position_id: &str) -> Result<ClosedPosition, ApiError> {
        self.client
            .post(&format!("/positions/{}/close", position_id), &serde_json::json!({}))
            .await
    }
}
