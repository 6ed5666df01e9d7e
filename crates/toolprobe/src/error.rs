//! Error types for toolprobe.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private key material is never included in error messages.

use std::path::PathBuf;

/// Probe error types covering authentication and session operations.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to read key file {path}")]
    KeyFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid signing key: {0}")]
    KeyLoad(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign assertion: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("subject identifier must not be empty")]
    EmptySubject,

    #[error("client authentication failed")]
    Authentication(#[source] Box<ProbeError>),

    #[error("assertion expired")]
    AssertionExpired,

    #[error("invalid assertion: {0}")]
    AssertionInvalid(String),

    #[error("connection to tool endpoint failed: {0}")]
    Connection(String),

    #[error("tool listing failed: {0}")]
    Listing(String),

    #[error("invocation of tool '{tool}' failed: {message}")]
    ToolInvocation { tool: String, message: String },
}

impl ProbeError {
    /// Wrap an error as a top-level authentication failure, preserving it
    /// as the cause.
    pub fn auth(cause: ProbeError) -> Self {
        ProbeError::Authentication(Box::new(cause))
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, ProbeError>;
