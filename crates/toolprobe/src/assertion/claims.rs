//! Claim set carried by an assertion.

use serde::{Deserialize, Serialize};

use crate::time;

/// Fixed validity window for every assertion, in seconds.
pub const ASSERTION_TTL_SECS: u64 = 60;

/// Claims signed into an assertion.
///
/// Field names follow the registered JWT claim names so the remote
/// authority can validate the token with a standard decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Subject — the stable client identifier.
    pub sub: String,
    /// One-time random nonce preventing replay.
    pub nonce: String,
    /// Issued-at timestamp, seconds since epoch.
    pub iat: u64,
    /// Expiry timestamp, always `iat + 60`.
    pub exp: u64,
}

impl AssertionClaims {
    /// Build a fresh claim set for `subject`: new nonce, validity window
    /// starting now.
    pub fn new(subject: &str) -> Self {
        let iat = time::now_secs();
        Self {
            sub: subject.to_string(),
            nonce: uuid::Uuid::new_v4().to_string(),
            iat,
            exp: iat + ASSERTION_TTL_SECS,
        }
    }

    /// Length of the validity window in seconds.
    pub fn ttl(&self) -> u64 {
        self.exp.saturating_sub(self.iat)
    }
}
