use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// Every tool the agent can call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
    CreateWallet,
    GetWalletBalance,
    GetMarketPrice,
    PlaceTrade,
    SearchDomains,
    RegisterDomain,
    PlayDice,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::CreateWallet,
        ToolKind::GetWalletBalance,
        ToolKind::GetMarketPrice,
        ToolKind::PlaceTrade,
        ToolKind::SearchDomains,
        ToolKind::RegisterDomain,
        ToolKind::PlayDice,
    ];

    /// Wire name the model uses
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::CreateWallet => "create_wallet",
            ToolKind::GetWalletBalance => "get_wallet_balance",
            ToolKind::GetMarketPrice => "get_market_price",
            ToolKind::PlaceTrade => "place_trade",
            ToolKind::SearchDomains => "search_domains",
            ToolKind::RegisterDomain => "register_domain",
            ToolKind::PlayDice => "play_dice",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Built-in description and input schema
    pub fn spec(&self) -> ToolSpec {
        match self {
            ToolKind::CreateWallet => ToolSpec::new(
                *self,
                "Create a new multi-chain crypto wallet for the agent",
                json!({
                    "name": {"type": "string", "description": "Name for the wallet"},
                    "chains": {"type": "array", "items": {"type": "string"}, "description": "Blockchain networks"}
                }),
                &["name"],
            ),
            ToolKind::GetWalletBalance => ToolSpec::new(
                *self,
                "Get crypto balances for a wallet",
                json!({
                    "wallet_id": {"type": "string", "description": "Wallet ID"}
                }),
                &["wallet_id"],
            ),
            ToolKind::GetMarketPrice => ToolSpec::new(
                *self,
                "Get current price for a trading market (BTC-PERP, ETH-PERP, TSLA-PERP, etc.)",
                json!({
                    "symbol": {"type": "string", "description": "Market symbol"}
                }),
                &["symbol"],
            ),
            ToolKind::PlaceTrade => ToolSpec::new(
                *self,
                "Place a market order to buy or sell",
                json!({
                    "symbol": {"type": "string", "description": "Market symbol"},
                    "side": {"type": "string", "enum": ["buy", "sell"]},
                    "size_usd": {"type": "number", "description": "Position size in USD"}
                }),
                &["symbol", "side", "size_usd"],
            ),
            ToolKind::SearchDomains => ToolSpec::new(
                *self,
                "Search for available domain names",
                json!({
                    "name": {"type": "string", "description": "Domain name to search (without TLD)"}
                }),
                &["name"],
            ),
            ToolKind::RegisterDomain => ToolSpec::new(
                *self,
                "Register an available domain name",
                json!({
                    "domain": {"type": "string", "description": "Full domain name to register"}
                }),
                &["domain"],
            ),
            ToolKind::PlayDice => ToolSpec::new(
                *self,
                "Play a provably fair dice game",
                json!({
                    "bet_amount": {"type": "number", "description": "Bet amount in USD"},
                    "target": {"type": "integer", "minimum": 1, "maximum": 99, "description": "Roll target (1-99)"},
                    "over": {"type": "boolean", "description": "Bet on roll over (true) or under (false) target"}
                }),
                &["bet_amount", "target", "over"],
            ),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DispatchError::UnknownTool(s.to_string()))
    }
}

/// Registry entry: what the model is told about a tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub kind: ToolKind,
    pub description: String,
    /// JSON schema `properties` object
    pub properties: Value,
    pub required: Vec<String>,
}

impl ToolSpec {
    pub fn new(kind: ToolKind, description: &str, properties: Value, required: &[&str]) -> Self {
        Self {
            kind,
            description: description.to_string(),
            properties,
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Full object schema sent as `input_schema`
    pub fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties
            .as_object()
            .map(|props| props.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Tool execution result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub content: String,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error),
        }
    }

    /// Render a dispatch outcome; this is where errors become text
    pub fn from_dispatch(outcome: Result<String, DispatchError>) -> Self {
        match outcome {
            Ok(content) => Self::success(content),
            Err(e) => Self::error(e.to_tool_output()),
        }
    }

    /// Text handed back to the model
    pub fn output(&self) -> &str {
        match &self.error {
            Some(error) if !self.success => error,
            _ => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.spec().name(), kind.name());
        }
        assert_eq!(ToolKind::from_name("launch_missiles"), None);
        assert!("launch_missiles".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = ToolKind::PlayDice.spec().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["bet_amount", "target", "over"]));
        assert_eq!(schema["properties"]["target"]["maximum"], 99);
    }

    #[test]
    fn test_tool_result_output() {
        let ok = ToolResult::from_dispatch(Ok("Registered a.io, expires 2027-01-01".to_string()));
        assert!(ok.success);
        assert_eq!(ok.output(), "Registered a.io, expires 2027-01-01");

        let unknown = ToolResult::from_dispatch(Err(DispatchError::UnknownTool("nope".to_string())));
        assert!(!unknown.success);
        assert_eq!(unknown.output(), "Unknown tool: nope");
    }
}
