//! Assertion verification.
//!
//! The issuing side never verifies its own tokens in production; this
//! mirror of the remote authority's check exists so the issuance
//! guarantees stay provable locally, and for any co-located verifier.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::{ProbeError, Result};

use super::claims::AssertionClaims;

/// Verify `token` against an RSA public key PEM and return its claims.
///
/// # Errors
///
/// Returns [`ProbeError::AssertionExpired`] when the validity window has
/// passed, and [`ProbeError::AssertionInvalid`] for a bad signature, a
/// malformed token, or an unusable public key.
pub fn verify_assertion(token: &str, public_key_pem: &str) -> Result<AssertionClaims> {
    let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| ProbeError::AssertionInvalid(e.to_string()))?;

    let mut validation = Validation::new(Algorithm::RS256);
    // The window is exactly 60 seconds; no grace period on top.
    validation.leeway = 0;

    match decode::<AssertionClaims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
            Err(ProbeError::AssertionExpired)
        }
        Err(e) => Err(ProbeError::AssertionInvalid(e.to_string())),
    }
}
