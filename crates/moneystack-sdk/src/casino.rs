use async_trait::async_trait;
use moneystack_types::{Game, GamePlay, GameRecord, GameResult};

use crate::client::ServiceClient;
use crate::error::ApiError;

#[async_trait]
pub trait CasinoApi: Send + Sync {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError>;
    async fn play(&self, play: &GamePlay) -> Result<GameResult, ApiError>;
    async fn get_history(&self, limit: u32) -> Result<Vec<GameRecord>, ApiError>;
}

pub struct CasinoClient {
    client: ServiceClient,
}

impl CasinoClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CasinoApi for CasinoClient {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        self.client.get("/games", &[]).await
    }

    async fn play(&self, play: &GamePlay) -> Result<GameResult, ApiError> {
        self.client.post("/games/play", play).await
    }

    async fn get_history(&self, limit: u32) -> Result<Vec<GameRecord>, ApiError> {
        self.client
            .get("/games/history", &[("limit", limit.to_string())])
            .await
    }
}
