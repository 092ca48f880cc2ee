//! One-line summaries handed back to the model

use moneystack_types::domains::available_names;
use moneystack_types::{
    format_signed, format_usd, Balances, DomainAvailability, GameResult, Market, Order, Registration, Wallet,
};

/// Most available domains listed in a search summary
pub const MAX_LISTED_DOMAINS: usize = 5;

pub fn wallet_created(wallet: &Wallet) -> String {
    format!("Wallet created: id={}, addresses={}", wallet.id, wallet.address_summary())
}

pub fn balances(balances: &Balances) -> String {
    let entries: Vec<String> = balances
        .iter()
        .flat_map(|(chain, tokens)| {
            tokens.iter().map(move |token| {
                format!(
                    "{} {} {} (${})",
                    chain,
                    token.symbol,
                    token.balance,
                    format_usd(token.usd_value)
                )
            })
        })
        .collect();

    if entries.is_empty() {
        "Balances: none".to_string()
    } else {
        format!("Balances: {}", entries.join(", "))
    }
}

pub fn market_price(market: &Market) -> String {
    format!(
        "{}: ${} | 24h: {}%",
        market.symbol,
        format_usd(market.price),
        format_signed(market.change_24h)
    )
}

pub fn order_executed(order: &Order, size_usd: f64) -> String {
    let fill = order
        .fill_price
        .map(|p| format!("${}", format_usd(p)))
        .unwrap_or_else(|| "pending fill".to_string());
    format!("Order executed: {} {} ${} @ {}", order.side, order.symbol, size_usd, fill)
}

pub fn available_domains(results: &[DomainAvailability]) -> String {
    format!("Available: [{}]", available_names(results, MAX_LISTED_DOMAINS).join(", "))
}

pub fn registered(registration: &Registration) -> String {
    format!("Registered {}, expires {}", registration.domain, registration.expires_at)
}

pub fn dice_roll(result: &GameResult, bet_amount: f64) -> String {
    let outcome = if result.won {
        format!("WIN +${:.2}", result.payout - bet_amount)
    } else {
        "LOSS".to_string()
    };
    format!("Dice roll: {} | {}", result.outcome_label(), outcome)
}
