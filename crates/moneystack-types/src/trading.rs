use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "long" => Ok(Side::Buy),
            "sell" | "short" => Ok(Side::Sell),
            other => Err(format!("invalid side '{}', expected buy or sell", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

/// Market snapshot with 24h stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub symbol: String,
    pub price: f64,
    #[serde(default)]
    pub change_24h: f64,
    #[serde(default)]
    pub volume_24h: f64,
    #[serde(default)]
    pub funding_rate: f64,
}

/// Order placement parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size_usd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
}

impl OrderRequest {
    pub fn market(symbol: impl Into<String>, side: Side, size_usd: f64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            size_usd,
            leverage: None,
            limit_price: None,
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn limit(symbol: impl Into<String>, side: Side, size_usd: f64, limit_price: f64) -> Self {
        Self {
            order_type: OrderType::Limit,
            limit_price: Some(limit_price),
            ..Self::market(symbol, side, size_usd)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type", default = "default_order_type")]
    pub order_type: OrderType,
    /// Unset for limit orders that have not filled yet
    #[serde(default)]
    pub fill_price: Option<f64>,
}

fn default_order_type() -> OrderType {
    OrderType::Market
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub id: String,
    pub symbol: String,
    pub side: Side,
    pub size_usd: f64,
    #[serde(default)]
    pub unrealized_pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub total_value: f64,
    #[serde(default)]
    pub unrealized_pnl: f64,
    #[serde(default)]
    pub daily_pnl: f64,
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPosition {
    #[serde(default)]
    pub id: String,
    pub realized_pnl: f64,
}

/// The `count` markets with the largest absolute 24h move, biggest first
pub fn top_movers(markets: &[Market], count: usize) -> Vec<Market> {
    let mut movers = markets.to_vec();
    movers.sort_by(|a, b| b.change_24h.abs().total_cmp(&a.change_24h.abs()));
    movers.truncate(count);
    movers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn market(symbol: &str, change: f64) -> Market {
        Market {
            symbol: symbol.to_string(),
            price: 100.0,
            change_24h: change,
            volume_24h: 1_000_000.0,
            funding_rate: 0.01,
        }
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn test_market_order_serialization_skips_unset_fields() {
        let order = OrderRequest::market("BTC-PERP", Side::Buy, 25.0);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "symbol": "BTC-PERP",
                "side": "buy",
                "type": "market",
                "size_usd": 25.0
            })
        );
    }

    #[test]
    fn test_limit_order_carries_price() {
        let order = OrderRequest::limit("ETH-PERP", Side::Sell, 10.0, 3100.0);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.limit_price, Some(3100.0));
    }

    #[test]
    fn test_top_movers_orders_by_absolute_change() {
        let markets = vec![market("A", 1.0), market("B", -7.5), market("C", 3.2), market("D", 0.1)];
        let movers: Vec<String> = top_movers(&markets, 3).into_iter().map(|m| m.symbol).collect();
        assert_eq!(movers, vec!["B", "C", "A"]);
    }
}
