use moneystack_types::{Side, DEFAULT_WALLET_CHAINS};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DispatchError;
use crate::tool::{ToolKind, ToolSpec};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateWalletInput {
    pub name: String,
    #[serde(default)]
    pub chains: Option<Vec<String>>,
}

impl CreateWalletInput {
    /// Requested chains, or ethereum + base when none were given
    pub fn chains_or_default(&self) -> Vec<String> {
        self.chains
            .clone()
            .unwrap_or_else(|| DEFAULT_WALLET_CHAINS.iter().map(|c| c.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetWalletBalanceInput {
    pub wallet_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetMarketPriceInput {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceTradeInput {
    pub symbol: String,
    pub side: Side,
    pub size_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchDomainsInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterDomainInput {
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayDiceInput {
    pub bet_amount: f64,
    pub target: u8,
    pub over: bool,
}

/// A validated tool call argument set, one variant per tool
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInput {
    CreateWallet(CreateWalletInput),
    GetWalletBalance(GetWalletBalanceInput),
    GetMarketPrice(GetMarketPriceInput),
    PlaceTrade(PlaceTradeInput),
    SearchDomains(SearchDomainsInput),
    RegisterDomain(RegisterDomainInput),
    PlayDice(PlayDiceInput),
}

impl ToolInput {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolInput::CreateWallet(_) => ToolKind::CreateWallet,
            ToolInput::GetWalletBalance(_) => ToolKind::GetWalletBalance,
            ToolInput::GetMarketPrice(_) => ToolKind::GetMarketPrice,
            ToolInput::PlaceTrade(_) => ToolKind::PlaceTrade,
            ToolInput::SearchDomains(_) => ToolKind::SearchDomains,
            ToolInput::RegisterDomain(_) => ToolKind::RegisterDomain,
            ToolInput::PlayDice(_) => ToolKind::PlayDice,
        }
    }

    /// Parse raw model arguments against a tool's spec.
    ///
    /// Required keys are checked first so a missing key is reported by name;
    /// type errors, unknown keys and out-of-range values come back as
    /// [`DispatchError::InvalidInput`].
    pub fn parse(spec: &ToolSpec, input: &Value) -> Result<Self, DispatchError> {
        let tool = spec.name();
        let Some(fields) = input.as_object() else {
            return Err(invalid(tool, "arguments must be a JSON object"));
        };

        if let Some(field) = spec.required.iter().find(|f| !fields.contains_key(f.as_str())) {
            return Err(DispatchError::MissingField {
                tool: tool.to_string(),
                field: field.clone(),
            });
        }

        let parsed = match spec.kind {
            ToolKind::CreateWallet => ToolInput::CreateWallet(decode(tool, input)?),
            ToolKind::GetWalletBalance => ToolInput::GetWalletBalance(decode(tool, input)?),
            ToolKind::GetMarketPrice => ToolInput::GetMarketPrice(decode(tool, input)?),
            ToolKind::PlaceTrade => ToolInput::PlaceTrade(decode(tool, input)?),
            ToolKind::SearchDomains => ToolInput::SearchDomains(decode(tool, input)?),
            ToolKind::RegisterDomain => ToolInput::RegisterDomain(decode(tool, input)?),
            ToolKind::PlayDice => ToolInput::PlayDice(decode(tool, input)?),
        };
        parsed.check_ranges()?;
        Ok(parsed)
    }

    fn check_ranges(&self) -> Result<(), DispatchError> {
        let tool = self.kind().name();
        match self {
            ToolInput::PlaceTrade(trade) if !(trade.size_usd.is_finite() && trade.size_usd > 0.0) => {
                Err(invalid(tool, "size_usd must be a positive amount"))
            }
            ToolInput::PlayDice(dice) if !(dice.bet_amount.is_finite() && dice.bet_amount > 0.0) => {
                Err(invalid(tool, "bet_amount must be a positive amount"))
            }
            ToolInput::PlayDice(dice) if !(1..=99).contains(&dice.target) => {
                Err(invalid(tool, "target must be between 1 and 99"))
            }
            _ => Ok(()),
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, input: &Value) -> Result<T, DispatchError> {
    serde_json::from_value(input.clone()).map_err(|e| invalid(tool, &e.to_string()))
}

fn invalid(tool: &str, message: &str) -> DispatchError {
    DispatchError::InvalidInput {
        tool: tool.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(kind: ToolKind, input: Value) -> Result<ToolInput, DispatchError> {
        ToolInput::parse(&kind.spec(), &input)
    }

    #[test]
    fn test_parse_place_trade() {
        let input = parse(
            ToolKind::PlaceTrade,
            json!({"symbol": "ETH-PERP", "side": "sell", "size_usd": 25}),
        )
        .unwrap();
        assert_eq!(
            input,
            ToolInput::PlaceTrade(PlaceTradeInput {
                symbol: "ETH-PERP".to_string(),
                side: Side::Sell,
                size_usd: 25.0,
            })
        );
    }

    #[test]
    fn test_missing_field_named() {
        let err = parse(ToolKind::PlaceTrade, json!({})).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MissingField { ref field, .. } if field == "symbol"
        ));

        let err = parse(ToolKind::PlayDice, json!({"bet_amount": 1.0, "target": 50})).unwrap_err();
        assert_eq!(err.to_string(), "missing required field 'over' for play_dice");
    }

    #[test]
    fn test_unknown_fields_and_bad_types_rejected() {
        let err = parse(ToolKind::GetMarketPrice, json!({"symbol": "BTC-PERP", "leverage": 5})).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput { .. }));

        let err = parse(
            ToolKind::PlaceTrade,
            json!({"symbol": "BTC-PERP", "side": "hold", "size_usd": 10}),
        )
        .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput { .. }));

        let err = parse(ToolKind::RegisterDomain, json!(["a.io"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid input for register_domain: arguments must be a JSON object");
    }

    #[test]
    fn test_dice_target_range() {
        for target in [0, 100, 150] {
            let err = parse(
                ToolKind::PlayDice,
                json!({"bet_amount": 1.0, "target": target, "over": true}),
            )
            .unwrap_err();
            assert!(matches!(err, DispatchError::InvalidInput { .. }), "target {}", target);
        }
        for target in [1, 99] {
            assert!(parse(
                ToolKind::PlayDice,
                json!({"bet_amount": 1.0, "target": target, "over": false}),
            )
            .is_ok());
        }
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        assert!(parse(ToolKind::PlayDice, json!({"bet_amount": 0, "target": 50, "over": true})).is_err());
        assert!(parse(
            ToolKind::PlaceTrade,
            json!({"symbol": "BTC-PERP", "side": "buy", "size_usd": -5}),
        )
        .is_err());
    }

    #[test]
    fn test_wallet_chains_default() {
        let ToolInput::CreateWallet(input) = parse(ToolKind::CreateWallet, json!({"name": "agent"})).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(input.chains_or_default(), vec!["ethereum".to_string(), "base".to_string()]);

        let ToolInput::CreateWallet(input) =
            parse(ToolKind::CreateWallet, json!({"name": "agent", "chains": ["solana"]})).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(input.chains_or_default(), vec!["solana".to_string()]);
    }

    #[test]
    fn test_every_schema_property_is_accepted() {
        let samples = [
            (ToolKind::CreateWallet, json!({"name": "a", "chains": ["base"]})),
            (ToolKind::GetWalletBalance, json!({"wallet_id": "w"})),
            (ToolKind::GetMarketPrice, json!({"symbol": "BTC-PERP"})),
            (ToolKind::PlaceTrade, json!({"symbol": "BTC-PERP", "side": "buy", "size_usd": 1})),
            (ToolKind::SearchDomains, json!({"name": "agent"})),
            (ToolKind::RegisterDomain, json!({"domain": "agent.io"})),
            (ToolKind::PlayDice, json!({"bet_amount": 1, "target": 50, "over": true})),
        ];
        for (kind, input) in samples {
            let spec = kind.spec();
            let keys: Vec<&str> = input.as_object().unwrap().keys().map(|k| k.as_str()).collect();
            let mut props = spec.property_names();
            props.sort();
            let mut keys = keys;
            keys.sort();
            assert_eq!(keys, props, "{}", kind);
            assert_eq!(parse(kind, input).unwrap().kind(), kind);
        }
    }
}
