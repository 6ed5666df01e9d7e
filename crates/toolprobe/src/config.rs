//! Runtime configuration for a probe run.
//!
//! The subject id, key-file reference, and endpoint URL are explicit inputs
//! with compiled defaults, an environment layer (`TOOLPROBE_*`), and CLI
//! overrides applied by the frontend on top.

use std::path::PathBuf;

use serde::Serialize;

/// Default subject identifier presented to the endpoint.
pub const DEFAULT_SUBJECT: &str = "com.toolprobe.client";

/// Default private key file name, resolved against `key_dir`.
pub const DEFAULT_KEY_FILE: &str = "private.pem";

/// Default endpoint URL (streamable HTTP).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/mcp";

/// Client name reported at session initialization.
pub const DEFAULT_CLIENT_NAME: &str = "toolprobe";

/// Configuration for one probe run.
///
/// The key file name is resolved against `key_dir`, a base directory
/// controlled by the running process — the reference is operator-supplied,
/// never taken from the remote side.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeConfig {
    /// Stable, pre-assigned client identifier used as the assertion subject.
    pub subject_id: String,
    /// Base directory the key file name is resolved against.
    pub key_dir: PathBuf,
    /// Private key file name (PKCS#8 PEM), relative to `key_dir`.
    pub key_file: String,
    /// Tool endpoint URL.
    pub endpoint_url: String,
    /// Client name reported at session initialization.
    pub client_name: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            subject_id: DEFAULT_SUBJECT.to_string(),
            key_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            key_file: DEFAULT_KEY_FILE.to_string(),
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Build a configuration from the environment, falling back to the
    /// compiled defaults for anything unset.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            subject_id: std::env::var("TOOLPROBE_SUBJECT").unwrap_or(base.subject_id),
            key_dir: std::env::var("TOOLPROBE_KEY_DIR")
                .map(PathBuf::from)
                .unwrap_or(base.key_dir),
            key_file: std::env::var("TOOLPROBE_KEY_FILE").unwrap_or(base.key_file),
            endpoint_url: std::env::var("TOOLPROBE_ENDPOINT").unwrap_or(base.endpoint_url),
            client_name: base.client_name,
        }
    }

    /// The fully resolved key file path.
    pub fn key_path(&self) -> PathBuf {
        self.key_dir.join(&self.key_file)
    }
}
