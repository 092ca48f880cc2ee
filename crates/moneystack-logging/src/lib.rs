// Logging module - conversation and request logging
pub mod conversation_logger;
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use conversation_logger::ConversationLogger;
pub use request_logger::{auth_header_line, log_request, log_response, redact_key};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base moneystack directory (~/.moneystack)
pub fn get_moneystack_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let dir = PathBuf::from(home_dir).join(".moneystack");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create moneystack directory")?;
    }

    Ok(dir)
}

/// Get or create the logs directory (~/.moneystack/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_moneystack_dir()?.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate() {
        assert_eq!(safe_truncate("short", 10), "short");
        assert_eq!(safe_truncate("abcdefghij", 8), "abcde...");
        assert_eq!(safe_truncate("héllo wörld", 6), "hél...");
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }
}
