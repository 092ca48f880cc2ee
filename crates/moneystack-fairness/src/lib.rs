//! Provably-fair verification for casino results
//!
//! The casino commits to `HMAC-SHA256(server_seed, "client_seed:nonce")` before a
//! bet resolves and reveals `server_seed` afterwards. Recomputing the digest from
//! the revealed seed and comparing it with the committed hash shows whether the
//! outcome was altered after the commitment.

use hmac::{Hmac, Mac};
use moneystack_types::GameResult;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub type HmacSha256 = Hmac<Sha256>;

/// Number of hex characters shown when printing a hash
pub const HASH_PREVIEW_LEN: usize = 16;

/// Message the server seed is keyed over: `client_seed:nonce`
pub fn commitment_message(client_seed: &str, nonce: u64) -> String {
    format!("{}:{}", client_seed, nonce)
}

/// Lowercase hex HMAC-SHA256 of `client_seed:nonce` keyed by `server_seed`
pub fn compute_digest(server_seed: &str, client_seed: &str, nonce: u64) -> String {
    let mut mac = HmacSha256::new_from_slice(server_seed.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(commitment_message(client_seed, nonce).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// True iff the recomputed digest equals `claimed_hash` exactly.
///
/// The comparison runs in constant time over the hash bytes; a length mismatch
/// is rejected up front and leaks only the length.
pub fn verify(server_seed: &str, client_seed: &str, nonce: u64, claimed_hash: &str) -> bool {
    let expected = compute_digest(server_seed, client_seed, nonce);
    constant_time_eq(&expected, claimed_hash)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

/// Verification outcome with both hashes, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub expected: String,
    pub recorded: String,
    pub valid: bool,
}

impl Verification {
    pub fn status(&self) -> &'static str {
        if self.valid {
            "VALID"
        } else {
            "INVALID"
        }
    }

    pub fn expected_preview(&self) -> &str {
        preview(&self.expected)
    }

    pub fn recorded_preview(&self) -> &str {
        preview(&self.recorded)
    }
}

fn preview(hash: &str) -> &str {
    hash.char_indices()
        .nth(HASH_PREVIEW_LEN)
        .map(|(idx, _)| &hash[..idx])
        .unwrap_or(hash)
}

/// Check a game result against the server seed revealed for it
pub fn verify_result(result: &GameResult, server_seed: &str) -> Verification {
    let expected = compute_digest(server_seed, &result.client_seed, result.nonce);
    let valid = constant_time_eq(&expected, &result.server_seed_hash);
    Verification {
        expected,
        recorded: result.server_seed_hash.clone(),
        valid,
    }
}
