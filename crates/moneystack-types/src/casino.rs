use serde::{Deserialize, Serialize};

/// Casino game listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_bet: f64,
    pub max_bet: f64,
    /// Percent, e.g. 1.0 for a 1% edge
    pub house_edge: f64,
}

impl Game {
    pub fn rtp(&self) -> f64 {
        100.0 - self.house_edge
    }
}

/// Parameters for a single play
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamePlay {
    pub game: String,
    pub bet_amount: f64,
    pub options: serde_json::Value,
}

impl GamePlay {
    pub fn dice(bet_amount: f64, target: u8, over: bool) -> Self {
        Self {
            game: "dice".to_string(),
            bet_amount,
            options: serde_json::json!({ "target": target, "over": over }),
        }
    }

    pub fn coinflip(bet_amount: f64, choice: &str) -> Self {
        Self {
            game: "coinflip".to_string(),
            bet_amount,
            options: serde_json::json!({ "choice": choice }),
        }
    }
}

/// Outcome of a play, carrying the commitment needed for fairness checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Dice roll, when the game produces one
    #[serde(default)]
    pub roll: Option<f64>,
    /// Named outcome (e.g. "heads") for non-numeric games
    #[serde(default)]
    pub outcome: Option<String>,
    pub won: bool,
    #[serde(default)]
    pub payout: f64,
    #[serde(default)]
    pub profit: Option<f64>,
    pub client_seed: String,
    pub nonce: u64,
    pub server_seed_hash: String,
    /// Revealed once the bet has resolved, if the service includes it
    #[serde(default)]
    pub server_seed: Option<String>,
}

impl GameResult {
    /// Roll or named outcome, whichever the game produced
    pub fn outcome_label(&self) -> String {
        match (&self.roll, &self.outcome) {
            (Some(roll), _) => roll.to_string(),
            (None, Some(outcome)) => outcome.clone(),
            (None, None) => "unknown".to_string(),
        }
    }

    /// Net winnings for a given stake
    pub fn net(&self, bet_amount: f64) -> f64 {
        self.profit.unwrap_or(self.payout - bet_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub game: String,
    pub won: bool,
    pub bet_amount: f64,
    pub payout: f64,
}

/// Aggregate over a slice of game history
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistorySummary {
    pub games: usize,
    pub wins: usize,
    pub total_wagered: f64,
    pub net_pnl: f64,
}

impl HistorySummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.games += 1;
            if r.won {
                acc.wins += 1;
            }
            acc.total_wagered += r.bet_amount;
            acc.net_pnl += r.payout - r.bet_amount;
            acc
        })
    }

    /// Win rate in percent; zero for an empty history
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}
