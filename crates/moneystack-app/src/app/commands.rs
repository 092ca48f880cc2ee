//! Direct subcommands: one service call (or a short sequence), rendered as text

use anyhow::{Context, Result};
use moneystack_fairness::{verify_result, Verification};
use moneystack_sdk::{CasinoApi, DomainsApi, RegisterRequest, TradingApi, TransferRequest, WalletApi};
use moneystack_types::trading::top_movers;
use moneystack_types::{
    format_usd, Balances, ClosedPosition, DnsRecord, DomainAvailability, Game, GamePlay, GameRecord, GameResult,
    HistorySummary, Market, Order, OrderRequest, OwnedDomain, Portfolio, Registration, TransactionRecord,
    TransferReceipt, Wallet, DEFAULT_WALLET_CHAINS,
};
use std::fmt::Write as _;

use crate::cli::{CasinoCommands, DomainsCommands, TradeCommands, WalletCommands, DEFAULT_SEARCH_TLDS};

/// Days left below which an owned domain is flagged
pub const EXPIRY_WARNING_DAYS: i64 = 30;

pub async fn run_wallet(command: &WalletCommands, api: &dyn WalletApi) -> Result<String> {
    match command {
        WalletCommands::Create { name, chains } => {
            let chains = if chains.is_empty() {
                DEFAULT_WALLET_CHAINS.iter().map(|c| c.to_string()).collect()
            } else {
                chains.clone()
            };
            let wallet = api.create_wallet(name, &chains).await.context("Failed to create wallet")?;
            Ok(render_wallet(name, &wallet))
        }
        WalletCommands::Balances { wallet_id } => {
            let balances = api.get_balances(wallet_id).await.context("Failed to fetch balances")?;
            Ok(render_balances(wallet_id, &balances))
        }
        WalletCommands::Send {
            wallet_id,
            to,
            amount,
            token,
            chain,
        } => {
            let transfer = TransferRequest {
                to: to.clone(),
                amount: amount.clone(),
                token: token.clone(),
                chain: chain.clone(),
            };
            let receipt = api.send(wallet_id, &transfer).await.context("Transfer failed")?;
            Ok(render_receipt(&receipt))
        }
        WalletCommands::History { wallet_id, limit } => {
            let records = api
                .get_transactions(wallet_id, *limit)
                .await
                .context("Failed to fetch transactions")?;
            Ok(render_transactions(*limit, &records))
        }
    }
}

pub async fn run_trade(command: &TradeCommands, api: &dyn TradingApi) -> Result<String> {
    match command {
        TradeCommands::Price { symbol } => {
            let market = api.get_market(symbol).await.context("Failed to fetch market")?;
            Ok(render_market(&market))
        }
        TradeCommands::Scan { min_volume, top } => {
            let markets = api.list_markets(Some(*min_volume)).await.context("Failed to list markets")?;
            Ok(render_movers(*min_volume, &top_movers(&markets, *top)))
        }
        TradeCommands::Order {
            symbol,
            side,
            size_usd,
            leverage,
            limit_price,
            stop_loss,
            take_profit,
        } => {
            let request = match limit_price {
                Some(price) => OrderRequest {
                    leverage: Some(*leverage),
                    stop_loss: *stop_loss,
                    take_profit: *take_profit,
                    ..OrderRequest::limit(symbol.clone(), *side, *size_usd, *price)
                },
                None => OrderRequest {
                    leverage: Some(*leverage),
                    ..OrderRequest::market(symbol.clone(), *side, *size_usd)
                },
            };
            let order = api.create_order(&request).await.context("Order rejected")?;
            Ok(render_order(&request, &order))
        }
        TradeCommands::Portfolio => {
            let portfolio = api.get_portfolio().await.context("Failed to fetch portfolio")?;
            Ok(render_portfolio(&portfolio))
        }
        TradeCommands::Close { position_id } => {
            let closed = api.close_position(position_id).await.context("Failed to close position")?;
            Ok(render_closed(position_id, &closed))
        }
    }
}

pub async fn run_casino(command: &CasinoCommands, api: &dyn CasinoApi) -> Result<String> {
    match command {
        CasinoCommands::Games => {
            let games = api.list_games().await.context("Failed to list games")?;
            Ok(render_games(&games))
        }
        CasinoCommands::Dice { bet, target, under } => {
            let over = !under;
            let result = api
                .play(&GamePlay::dice(*bet, *target, over))
                .await
                .context("Dice roll failed")?;
            Ok(render_dice(*bet, *target, over, &result))
        }
        CasinoCommands::Coinflip { bet, choice } => {
            let result = api
                .play(&GamePlay::coinflip(*bet, choice))
                .await
                .context("Coin flip failed")?;
            Ok(render_coinflip(*bet, choice, &result))
        }
        CasinoCommands::History { limit } => {
            let records = api.get_history(*limit).await.context("Failed to fetch history")?;
            Ok(render_history(*limit, &records))
        }
    }
}

pub async fn run_domains(command: &DomainsCommands, api: &dyn DomainsApi) -> Result<String> {
    match command {
        DomainsCommands::Search { name, tlds } => {
            let tlds = if tlds.is_empty() {
                DEFAULT_SEARCH_TLDS.iter().map(|t| t.to_string()).collect()
            } else {
                tlds.clone()
            };
            let results = api.search(name, &tlds).await.context("Domain search failed")?;
            Ok(render_search(name, &results))
        }
        DomainsCommands::Register {
            domain,
            years,
            no_auto_renew,
            no_privacy,
        } => {
            let request = RegisterRequest {
                years: *years,
                auto_renew: !no_auto_renew,
                privacy: !no_privacy,
                ..RegisterRequest::new(domain.clone())
            };
            let registration = api.register(&request).await.context("Registration failed")?;
            Ok(render_registration(&registration))
        }
        DomainsCommands::List => {
            let domains = api.list_domains().await.context("Failed to list domains")?;
            Ok(render_owned(&domains))
        }
        DomainsCommands::Renew { days, years } => {
            let domains = api.list_domains().await.context("Failed to list domains")?;
            let mut renewed = Vec::new();
            for domain in domains.iter().filter(|d| d.expires_within(*days)) {
                api.renew(&domain.domain, *years)
                    .await
                    .with_context(|| format!("Failed to renew {}", domain.domain))?;
                renewed.push(domain.domain.clone());
            }
            Ok(render_renewals(*days, *years, &renewed))
        }
        DomainsCommands::Point { domain, ip } => {
            let records = DnsRecord::point_to(ip);
            api.set_dns(domain, &records).await.context("Failed to update DNS")?;
            Ok(render_dns(domain, &records))
        }
    }
}

/// Check a result given only its seeds, nonce and committed hash
pub fn verify_seeds(server_seed: &str, client_seed: &str, nonce: u64, hash: &str) -> String {
    let result = GameResult {
        roll: None,
        outcome: None,
        won: false,
        payout: 0.0,
        profit: None,
        client_seed: client_seed.to_string(),
        nonce,
        server_seed_hash: hash.to_string(),
        server_seed: Some(server_seed.to_string()),
    };
    render_verification(&verify_result(&result, server_seed))
}

// ============================================================================
// Rendering
// ============================================================================

/// `+1,234.50` / `-12.00`
fn signed_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("${}{}", sign, format_usd(value.abs()))
}

fn whole_usd(value: f64) -> String {
    let formatted = format_usd(value.round());
    formatted.trim_end_matches(".00").to_string()
}

pub fn render_wallet(name: &str, wallet: &Wallet) -> String {
    let mut out = format!("Created wallet for agent '{}' (id: {}):", name, wallet.id);
    for (chain, address) in &wallet.addresses {
        let _ = write!(out, "\n  {}: {}", chain, address);
    }
    out
}

pub fn render_balances(wallet_id: &str, balances: &Balances) -> String {
    let mut out = format!("Balances for wallet {}:", wallet_id);
    let mut any = false;
    for (chain, tokens) in balances {
        for token in tokens.iter().filter(|t| !t.is_zero()) {
            any = true;
            let _ = write!(
                out,
                "\n  {} {}: {} (${})",
                chain,
                token.symbol,
                token.balance,
                format_usd(token.usd_value)
            );
        }
    }
    if !any {
        out.push_str("\n  (no balances)");
    }
    out
}

pub fn render_receipt(receipt: &TransferReceipt) -> String {
    let mut out = format!("Transaction submitted:\n  Hash: {}\n  Status: {}", receipt.hash, receipt.status);
    if let Some(url) = &receipt.explorer_url {
        let _ = write!(out, "\n  Explorer: {}", url);
    }
    out
}

pub fn render_transactions(limit: u32, records: &[TransactionRecord]) -> String {
    let mut out = format!("Recent transactions (last {}):", limit);
    for tx in records {
        let _ = write!(
            out,
            "\n  {} | {} | {} {} | {}",
            tx.timestamp, tx.kind, tx.amount, tx.token, tx.status
        );
    }
    out
}

pub fn render_market(market: &Market) -> String {
    format!(
        "{}:\n  Price: ${}\n  24h Change: {:+.2}%\n  24h Volume: ${}\n  Funding Rate: {:.4}%",
        market.symbol,
        format_usd(market.price),
        market.change_24h,
        whole_usd(market.volume_24h),
        market.funding_rate
    )
}

pub fn render_movers(min_volume: f64, movers: &[Market]) -> String {
    let mut out = format!("Top {} movers (>{:.0}M volume):", movers.len(), min_volume / 1e6);
    for m in movers {
        let _ = write!(
            out,
            "\n  {}: {:+.1}% | ${} | Vol: ${:.1}M",
            m.symbol,
            m.change_24h,
            format_usd(m.price),
            m.volume_24h / 1e6
        );
    }
    out
}

pub fn render_order(request: &OrderRequest, order: &Order) -> String {
    let side = order.side.as_str().to_uppercase();
    match request.limit_price {
        Some(limit) => {
            let mut out = format!("Limit order placed:\n  {} {} @ ${}", side, order.symbol, format_usd(limit));
            if let Some(stop) = request.stop_loss {
                let _ = write!(out, "\n  Stop-loss: ${}", format_usd(stop));
            }
            if let Some(take) = request.take_profit {
                let _ = write!(out, "\n  Take-profit: ${}", format_usd(take));
            }
            let _ = write!(out, "\n  Order ID: {}", order.id);
            out
        }
        None => {
            let fill = order
                .fill_price
                .map(|p| format!("${}", format_usd(p)))
                .unwrap_or_else(|| "pending".to_string());
            format!(
                "Order placed:\n  Symbol: {}\n  Side: {}\n  Size: ${:.2} at {}x leverage\n  Fill price: {}\n  Order ID: {}",
                order.symbol,
                side,
                request.size_usd,
                request.leverage.unwrap_or(1),
                fill,
                order.id
            )
        }
    }
}

pub fn render_portfolio(portfolio: &Portfolio) -> String {
    let mut out = format!(
        "Portfolio Summary:\n  Total Value: ${}\n  Unrealized P&L: {}\n  Today's P&L: {}\n\n  Open Positions:",
        format_usd(portfolio.total_value),
        signed_usd(portfolio.unrealized_pnl),
        signed_usd(portfolio.daily_pnl)
    );
    if portfolio.positions.is_empty() {
        out.push_str("\n    (none)");
    }
    for pos in &portfolio.positions {
        let _ = write!(
            out,
            "\n    {}: {} ${:.0} | PnL: {}",
            pos.symbol,
            pos.side,
            pos.size_usd,
            signed_usd(pos.unrealized_pnl)
        );
    }
    out
}

pub fn render_closed(position_id: &str, closed: &ClosedPosition) -> String {
    format!(
        "Closed position {}\n  Realized P&L: {}",
        position_id,
        signed_usd(closed.realized_pnl)
    )
}

pub fn render_games(games: &[Game]) -> String {
    let mut out = String::from("Available games:");
    for game in games {
        let _ = write!(
            out,
            "\n  {}: {}\n    Min bet: ${} | Max bet: ${}\n    House edge: {}% | RTP: {:.1}%",
            game.name,
            game.description,
            game.min_bet,
            game.max_bet,
            game.house_edge,
            game.rtp()
        );
    }
    out
}

pub fn render_dice(bet: f64, target: u8, over: bool, result: &GameResult) -> String {
    let mut out = format!(
        "Dice Roll:\n  Bet: ${:.2} | Target: {}{}\n  Result: {}\n  Outcome: {}",
        bet,
        if over { ">" } else { "<" },
        target,
        result.outcome_label(),
        if result.won { "WIN" } else { "LOSS" }
    );
    if result.won {
        let _ = write!(
            out,
            "\n  Payout: ${:.2} (profit: {})",
            result.payout,
            signed_usd(result.net(bet))
        );
    }
    let _ = write!(out, "\n  Server seed hash: {}", result.server_seed_hash);
    append_revealed_check(&mut out, result);
    out
}

pub fn render_coinflip(bet: f64, choice: &str, result: &GameResult) -> String {
    let mut out = format!(
        "Coin Flip:\n  Bet: ${:.2} on {}\n  Result: {}\n  {}",
        bet,
        choice,
        result.outcome_label(),
        if result.won {
            format!("WIN {}", signed_usd(result.net(bet)))
        } else {
            "LOSS".to_string()
        }
    );
    append_revealed_check(&mut out, result);
    out
}

fn append_revealed_check(out: &mut String, result: &GameResult) {
    if let Some(seed) = &result.server_seed {
        out.push_str("\n\n");
        out.push_str(&render_verification(&verify_result(result, seed)));
    }
}

pub fn render_verification(verification: &Verification) -> String {
    format!(
        "Fairness verification: {}\n  Expected hash: {}...\n  Recorded hash: {}...",
        verification.status(),
        verification.expected_preview(),
        verification.recorded_preview()
    )
}

pub fn render_history(limit: u32, records: &[GameRecord]) -> String {
    let summary = HistorySummary::from_records(records);
    if summary.games == 0 {
        return format!("Game History (last {}):\n  No games played", limit);
    }
    format!(
        "Game History (last {}):\n  Win rate: {}/{} ({:.0}%)\n  Total wagered: ${:.2}\n  Net P&L: ${:+.2}",
        limit,
        summary.wins,
        summary.games,
        summary.win_rate(),
        summary.total_wagered,
        summary.net_pnl
    )
}

pub fn render_search(name: &str, results: &[DomainAvailability]) -> String {
    let mut out = format!("Domain search for '{}':", name);
    for result in results {
        if result.available {
            let price = result
                .price
                .map(|p| format!(" ${:.2}/yr", p))
                .unwrap_or_default();
            let _ = write!(out, "\n  {}: AVAILABLE{}", result.domain, price);
        } else {
            let _ = write!(out, "\n  {}: taken", result.domain);
        }
    }
    out
}

pub fn render_registration(registration: &Registration) -> String {
    format!(
        "Domain registered:\n  Domain: {}\n  Expires: {}\n  Auto-renew: {}\n  Nameservers: {}",
        registration.domain,
        registration.expires_at,
        registration.auto_renew,
        registration.nameservers.join(", ")
    )
}

pub fn render_owned(domains: &[OwnedDomain]) -> String {
    let mut out = format!("Owned domains ({} total):", domains.len());
    for domain in domains {
        let status = if domain.expires_within(EXPIRY_WARNING_DAYS) {
            "EXPIRING SOON"
        } else {
            "active"
        };
        let _ = write!(
            out,
            "\n  {}: expires in {} days [{}]",
            domain.domain, domain.days_until_expiry, status
        );
    }
    out
}

pub fn render_renewals(days: i64, years: u32, renewed: &[String]) -> String {
    if renewed.is_empty() {
        return format!("No domains expire within {} days", days);
    }
    let unit = if years == 1 { "year" } else { "years" };
    renewed
        .iter()
        .map(|domain| format!("Renewed {} for {} {}", domain, years, unit))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dns(domain: &str, records: &[DnsRecord]) -> String {
    let mut out = format!("DNS records updated for {}:", domain);
    for record in records {
        let _ = write!(out, "\n  {} {} → {}", record.record_type, record.name, record.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneystack_fairness::compute_digest;
    use moneystack_types::{Position, Side};
    use pretty_assertions::assert_eq;

    fn dice_result(won: bool, server_seed: Option<&str>, hash: &str) -> GameResult {
        GameResult {
            roll: Some(73.21),
            outcome: None,
            won,
            payout: if won { 1.98 } else { 0.0 },
            profit: None,
            client_seed: "client".to_string(),
            nonce: 7,
            server_seed_hash: hash.to_string(),
            server_seed: server_seed.map(str::to_string),
        }
    }

    #[test]
    fn test_render_market() {
        let market = Market {
            symbol: "BTC-PERP".to_string(),
            price: 97250.5,
            change_24h: 2.346,
            volume_24h: 1_234_567_890.4,
            funding_rate: 0.0125,
        };
        assert_eq!(
            render_market(&market),
            "BTC-PERP:\n  Price: $97,250.50\n  24h Change: +2.35%\n  24h Volume: $1,234,567,890\n  Funding Rate: 0.0125%"
        );
    }

    #[test]
    fn test_render_dice_win_with_revealed_seed() {
        let hash = compute_digest("server", "client", 7);
        let out = render_dice(1.0, 50, true, &dice_result(true, Some("server"), &hash));

        assert!(out.contains("Target: >50"));
        assert!(out.contains("Outcome: WIN"));
        assert!(out.contains("Payout: $1.98 (profit: $+0.98)"));
        assert!(out.contains("Fairness verification: VALID"));
        assert!(out.contains(&format!("Expected hash: {}...", &hash[..16])));
    }

    #[test]
    fn test_render_dice_loss_without_seed_skips_verification() {
        let out = render_dice(2.5, 30, false, &dice_result(false, None, "abcd"));

        assert!(out.contains("Bet: $2.50 | Target: <30"));
        assert!(out.contains("Outcome: LOSS"));
        assert!(!out.contains("Payout"));
        assert!(!out.contains("Fairness verification"));
    }

    #[test]
    fn test_tampered_hash_is_invalid() {
        let out = verify_seeds("server", "client", 7, "0000000000000000000000");
        assert!(out.starts_with("Fairness verification: INVALID"));
        assert!(out.contains("Recorded hash: 0000000000000000..."));
    }

    #[test]
    fn test_render_history() {
        let records = vec![
            GameRecord { game: "dice".to_string(), won: true, bet_amount: 1.0, payout: 1.98 },
            GameRecord { game: "dice".to_string(), won: false, bet_amount: 2.0, payout: 0.0 },
        ];
        assert_eq!(
            render_history(10, &records),
            "Game History (last 10):\n  Win rate: 1/2 (50%)\n  Total wagered: $3.00\n  Net P&L: $-1.02"
        );
        assert_eq!(render_history(5, &[]), "Game History (last 5):\n  No games played");
    }

    #[test]
    fn test_render_owned_flags_expiring() {
        let domains = vec![
            OwnedDomain { domain: "agent.ai".to_string(), days_until_expiry: 12 },
            OwnedDomain { domain: "agent.io".to_string(), days_until_expiry: 30 },
        ];
        assert_eq!(
            render_owned(&domains),
            "Owned domains (2 total):\n  agent.ai: expires in 12 days [EXPIRING SOON]\n  agent.io: expires in 30 days [active]"
        );
    }

    #[test]
    fn test_render_portfolio() {
        let portfolio = Portfolio {
            total_value: 10500.0,
            unrealized_pnl: -42.5,
            daily_pnl: 120.0,
            positions: vec![Position {
                id: "p1".to_string(),
                symbol: "ETH-PERP".to_string(),
                side: Side::Buy,
                size_usd: 500.0,
                unrealized_pnl: -42.5,
            }],
        };
        let out = render_portfolio(&portfolio);
        assert!(out.contains("Total Value: $10,500.00"));
        assert!(out.contains("Unrealized P&L: $-42.50"));
        assert!(out.contains("Today's P&L: $+120.00"));
        assert!(out.contains("ETH-PERP: buy $500 | PnL: $-42.50"));
    }

    #[test]
    fn test_render_limit_order() {
        let request = OrderRequest {
            stop_loss: Some(90000.0),
            ..OrderRequest::limit("BTC-PERP", Side::Sell, 100.0, 99000.0)
        };
        let order = Order {
            id: "ord_1".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Sell,
            order_type: request.order_type,
            fill_price: None,
        };
        assert_eq!(
            render_order(&request, &order),
            "Limit order placed:\n  SELL BTC-PERP @ $99,000.00\n  Stop-loss: $90,000.00\n  Order ID: ord_1"
        );
    }

    #[test]
    fn test_render_search() {
        let results = vec![
            DomainAvailability { domain: "agent.ai".to_string(), available: true, price: Some(69.0) },
            DomainAvailability { domain: "agent.com".to_string(), available: false, price: None },
        ];
        assert_eq!(
            render_search("agent", &results),
            "Domain search for 'agent':\n  agent.ai: AVAILABLE $69.00/yr\n  agent.com: taken"
        );
    }

    #[test]
    fn test_render_renewals() {
        assert_eq!(render_renewals(30, 1, &[]), "No domains expire within 30 days");
        assert_eq!(
            render_renewals(30, 2, &["a.io".to_string()]),
            "Renewed a.io for 2 years"
        );
    }
}
