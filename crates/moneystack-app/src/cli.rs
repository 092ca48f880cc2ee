use clap::{Args, Parser, Subcommand};
use moneystack_llm_api::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use moneystack_types::{
    Side, DEFAULT_CASINO_API, DEFAULT_DOMAINS_API, DEFAULT_MAX_TURNS, DEFAULT_REFERRAL_CODE, DEFAULT_TRADING_API,
    DEFAULT_WALLET_API,
};

/// TLDs searched when none are given
pub const DEFAULT_SEARCH_TLDS: [&str; 6] = [".com", ".io", ".ai", ".xyz", ".org", ".net"];

/// CLI arguments for moneystack
#[derive(Parser, Debug)]
#[command(name = "moneystack")]
#[command(about = "Agent tooling for the Purple Flea wallet, trading, casino and domains APIs")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Print HTTP request/response debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Service credentials and endpoints, each with an env fallback
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Purple Flea API key
    #[arg(long, env = "PURPLEFLEA_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Referral code attached to every request
    #[arg(long, env = "PURPLEFLEA_REFERRAL_CODE", default_value = DEFAULT_REFERRAL_CODE, global = true)]
    pub referral_code: String,

    #[arg(long, env = "PURPLEFLEA_WALLET_API", default_value = DEFAULT_WALLET_API, global = true)]
    pub wallet_api: String,

    #[arg(long, env = "PURPLEFLEA_TRADING_API", default_value = DEFAULT_TRADING_API, global = true)]
    pub trading_api: String,

    #[arg(long, env = "PURPLEFLEA_CASINO_API", default_value = DEFAULT_CASINO_API, global = true)]
    pub casino_api: String,

    #[arg(long, env = "PURPLEFLEA_DOMAINS_API", default_value = DEFAULT_DOMAINS_API, global = true)]
    pub domains_api: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Let the model complete a task using the service tools
    Agent(AgentArgs),

    /// Check a casino result against its revealed server seed
    Verify {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long)]
        nonce: u64,
        /// Committed server seed hash (hex)
        #[arg(long)]
        hash: String,
    },

    /// Wallet operations
    Wallet {
        #[command(subcommand)]
        command: WalletCommands,
    },

    /// Trading operations
    Trade {
        #[command(subcommand)]
        command: TradeCommands,
    },

    /// Casino games
    Casino {
        #[command(subcommand)]
        command: CasinoCommands,
    },

    /// Domain registration and DNS
    Domains {
        #[command(subcommand)]
        command: DomainsCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Task for the agent
    #[arg(long, value_name = "TEXT")]
    pub task: String,

    /// Model calls allowed before giving up
    #[arg(long, env = "MONEYSTACK_MAX_TURNS", default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: usize,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_BASE_URL")]
    pub anthropic_base_url: Option<String>,

    /// Do not write a conversation log
    #[arg(long)]
    pub no_log: bool,
}

#[derive(Subcommand, Debug)]
pub enum WalletCommands {
    /// Create a multi-chain wallet
    Create {
        name: String,
        /// Comma-separated chains (default: ethereum,base)
        #[arg(long, value_delimiter = ',')]
        chains: Vec<String>,
    },
    /// Show non-zero balances
    Balances { wallet_id: String },
    /// Send tokens
    Send {
        wallet_id: String,
        to: String,
        amount: String,
        #[arg(long, default_value = "USDC")]
        token: String,
        #[arg(long, default_value = "base")]
        chain: String,
    },
    /// Recent transactions
    History {
        wallet_id: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum TradeCommands {
    /// Market snapshot
    Price { symbol: String },
    /// Biggest 24h movers above a volume floor
    Scan {
        #[arg(long, default_value_t = 1_000_000.0)]
        min_volume: f64,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Place a market order, or a limit order with --limit-price
    Order {
        symbol: String,
        side: Side,
        size_usd: f64,
        #[arg(long, default_value_t = 1)]
        leverage: u32,
        #[arg(long)]
        limit_price: Option<f64>,
        #[arg(long, requires = "limit_price")]
        stop_loss: Option<f64>,
        #[arg(long, requires = "limit_price")]
        take_profit: Option<f64>,
    },
    /// Portfolio summary and open positions
    Portfolio,
    /// Close a position
    Close { position_id: String },
}

#[derive(Subcommand, Debug)]
pub enum CasinoCommands {
    /// List games with limits and house edge
    Games,
    /// Roll over (default) or under a target
    Dice {
        bet: f64,
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=99))]
        target: u8,
        #[arg(long)]
        under: bool,
    },
    /// Flip a coin
    Coinflip {
        bet: f64,
        #[arg(long, default_value = "heads", value_parser = ["heads", "tails"])]
        choice: String,
    },
    /// Win rate and P&L over recent games
    History {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum DomainsCommands {
    /// Check availability across TLDs
    Search {
        name: String,
        /// Comma-separated TLDs (default: .com,.io,.ai,.xyz,.org,.net)
        #[arg(long, value_delimiter = ',')]
        tlds: Vec<String>,
    },
    /// Register a domain
    Register {
        domain: String,
        #[arg(long, default_value_t = 1)]
        years: u32,
        #[arg(long)]
        no_auto_renew: bool,
        #[arg(long)]
        no_privacy: bool,
    },
    /// Owned domains and their expiry
    List,
    /// Renew every domain expiring within --days
    Renew {
        #[arg(long, default_value_t = 30)]
        days: i64,
        #[arg(long, default_value_t = 1)]
        years: u32,
    },
    /// Point apex and www A records at an IP
    Point { domain: String, ip: String },
}
