//! toolprobe — authenticated smoke-probe for remote MCP tool endpoints.
//!
//! Issues a short-lived signed assertion for the configured subject, opens
//! a session against the endpoint with it, lists the tools the session
//! exposes, and invokes each one with empty arguments, printing normalized
//! results. One tool's failure never aborts the rest of the probe.

mod mcp;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use toolprobe::{authenticate, probe_tools, ProbeConfig, ProbePhase, ToolSession};

use crate::mcp::McpToolSession;

/// Authenticate to a remote MCP endpoint and smoke-test every tool it
/// exposes.
#[derive(Parser, Debug)]
#[command(name = "toolprobe", about = "Authenticated smoke-probe for MCP tool endpoints", version)]
struct Cli {
    /// Endpoint URL (streamable HTTP)
    #[arg(long)]
    endpoint: Option<String>,

    /// Subject identifier signed into the assertion
    #[arg(long)]
    subject: Option<String>,

    /// Directory the key file name is resolved against
    #[arg(long)]
    key_dir: Option<std::path::PathBuf>,

    /// PKCS#8 PEM RSA private key file name
    #[arg(long)]
    key_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Resolve the effective configuration: flags over environment over
    /// compiled defaults.
    fn into_config(self) -> ProbeConfig {
        let mut config = ProbeConfig::from_env();
        if let Some(endpoint) = self.endpoint {
            config.endpoint_url = endpoint;
        }
        if let Some(subject) = self.subject {
            config.subject_id = subject;
        }
        if let Some(key_dir) = self.key_dir {
            config.key_dir = key_dir;
        }
        if let Some(key_file) = self.key_file {
            config.key_file = key_file;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // Log to stderr; stdout carries the probe artifacts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "info" })
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();

    info!(phase = %ProbePhase::Authenticating, subject = %config.subject_id, "issuing assertion");
    let assertion = authenticate(&config).context("client authentication failed")?;
    println!("Assertion for client authentication: {}", assertion.token());
    if verbose {
        let claims = assertion.claims();
        let expires = chrono::DateTime::from_timestamp(claims.exp as i64, 0)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| claims.exp.to_string());
        println!(
            "  subject {}  nonce {}  expires {expires}",
            claims.sub, claims.nonce
        );
    }

    info!(phase = %ProbePhase::Connecting, endpoint = %config.endpoint_url, "opening session");
    let session = McpToolSession::connect(&config, &assertion)
        .await
        .context("failed to open session with the tool endpoint")?;
    println!("Connected to {}", config.endpoint_url);

    info!(phase = %ProbePhase::Listing, "listing tools");
    let tools = match session.list_tools().await {
        Ok(tools) => tools,
        Err(e) => {
            session.close().await;
            return Err(anyhow::Error::from(e).context("failed to list tools"));
        }
    };
    println!(
        "Available tools: {}",
        serde_json::to_string_pretty(&tools).context("failed to serialize tool list")?
    );

    if tools.is_empty() {
        info!("no tools available on the endpoint");
        session.close().await;
        return Ok(());
    }

    let reports = probe_tools(&session, &tools).await;
    session.close().await;

    for report in &reports {
        match &report.outcome {
            Ok(outcome) => println!("Result for {}:\n{outcome}", report.tool),
            Err(e) => eprintln!("Error invoking {}: {e}", report.tool),
        }
    }

    info!(phase = %ProbePhase::Done, probed = reports.len(), "probe complete");
    Ok(())
}
