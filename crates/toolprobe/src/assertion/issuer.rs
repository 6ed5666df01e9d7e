//! RS256 assertion issuance.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};

use super::claims::AssertionClaims;
use super::keyfile;

/// A signed assertion: the compact token plus the claims that went into it.
///
/// The claims are kept alongside the token so callers can inspect subject,
/// nonce, and expiry without re-parsing the compact form.
#[derive(Debug, Clone)]
pub struct Assertion {
    token: String,
    claims: AssertionClaims,
}

impl Assertion {
    /// The compact serialized token, suitable as a bearer credential.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The claim set that was signed.
    pub fn claims(&self) -> &AssertionClaims {
        &self.claims
    }
}

impl std::fmt::Display for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

/// Issue a signed assertion for `subject` over a PKCS#8 PEM RSA private key.
///
/// The subject is checked before any key material is touched. The key
/// handle lives only for the duration of this call.
///
/// # Errors
///
/// Returns [`ProbeError::EmptySubject`] for an empty subject,
/// [`ProbeError::KeyLoad`] when the PEM is not an RSA key usable for RS256,
/// and [`ProbeError::Signing`] when the signing step itself fails.
pub fn issue_assertion(subject: &str, private_key_pem: &str) -> Result<Assertion> {
    if subject.is_empty() {
        return Err(ProbeError::EmptySubject);
    }

    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(ProbeError::KeyLoad)?;

    let claims = AssertionClaims::new(subject);
    let token =
        encode(&Header::new(Algorithm::RS256), &claims, &key).map_err(ProbeError::Signing)?;

    debug!(subject, nonce = %claims.nonce, exp = claims.exp, "issued assertion");

    Ok(Assertion { token, claims })
}

/// Authenticate the configured client: load the key material and issue an
/// assertion for the configured subject.
///
/// This is the top-level authentication entry point. Any key-file,
/// key-load, or signing failure is wrapped in
/// [`ProbeError::Authentication`] with the original cause preserved.
pub fn authenticate(config: &ProbeConfig) -> Result<Assertion> {
    let pem =
        keyfile::load_key_material(&config.key_dir, &config.key_file).map_err(ProbeError::auth)?;
    issue_assertion(&config.subject_id, &pem).map_err(ProbeError::auth)
}
