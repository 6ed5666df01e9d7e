//! Assertion issuance and verification.
//!
//! An assertion is a compact RS256 JWT binding a subject identity to a
//! one-time nonce inside a fixed 60-second validity window. One assertion
//! authenticates one session and is never reused across connection attempts.
//!
//! # Modules
//!
//! - [`claims`] — the signed claim set and its validity window.
//! - [`keyfile`] — private key material loading.
//! - [`issuer`] — RS256 issuance and the top-level `authenticate` entry.
//! - [`verify`] — signature/expiry verification against the public key.

pub mod claims;
pub mod issuer;
pub mod keyfile;
pub mod verify;

// Re-export the primary types so callers can write `assertion::Assertion`
// without reaching into sub-modules.
pub use claims::{AssertionClaims, ASSERTION_TTL_SECS};
pub use issuer::{authenticate, issue_assertion, Assertion};
pub use keyfile::load_key_material;
pub use verify::verify_assertion;
