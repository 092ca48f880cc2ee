pub mod factory;
pub use factory::ClientFactory;

/// Default Anthropic API URL
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Messages API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Header the Messages API reads the key from
pub const API_KEY_HEADER: &str = "x-api-key";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Reply token cap per model call
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
