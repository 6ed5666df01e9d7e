//! rmcp-backed tool session.
//!
//! Owns the streamable-HTTP MCP client. The assertion rides as a bearer
//! header on every request; the client identifier is reported in the MCP
//! implementation info at initialization.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rmcp::model::{CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation};
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::streamable_http_client::StreamableHttpClientTransportConfig;
use rmcp::transport::StreamableHttpClientTransport;
use rmcp::ServiceExt;
use serde_json::{Map, Value};

use toolprobe::{Assertion, ProbeConfig, ProbeError, Result, ToolDescriptor, ToolSession};

/// An authenticated MCP session over streamable HTTP.
pub struct McpToolSession {
    client: RunningService<RoleClient, ClientInfo>,
}

impl McpToolSession {
    /// Open a session against `config.endpoint_url`, presenting `assertion`
    /// as the bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Connection`] when the transport cannot be built
    /// or the MCP initialization handshake fails.
    pub async fn connect(config: &ProbeConfig, assertion: &Assertion) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", assertion.token()))
            .map_err(|e| ProbeError::Connection(e.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        let transport = StreamableHttpClientTransport::with_client(
            http,
            StreamableHttpClientTransportConfig::with_uri(config.endpoint_url.clone()),
        );

        let info = ClientInfo {
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: config.client_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
        };

        let client = info
            .serve(transport)
            .await
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        Ok(Self { client })
    }

    /// Shut the session down. Errors on teardown are ignored; the probe is
    /// already complete by the time this runs.
    pub async fn close(self) {
        let _ = self.client.cancel().await;
    }
}

#[async_trait]
impl ToolSession for McpToolSession {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>> {
        let result = self
            .client
            .list_tools(Default::default())
            .await
            .map_err(|e| ProbeError::Listing(e.to_string()))?;

        // Descriptors are externally defined; round-trip through JSON so
        // everything beyond the name stays opaque.
        let value =
            serde_json::to_value(result.tools).map_err(|e| ProbeError::Listing(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| ProbeError::Listing(e.to_string()))
    }

    async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> Result<Value> {
        let result = self
            .client
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: Some(arguments),
            })
            .await
            .map_err(|e| ProbeError::ToolInvocation {
                tool: name.to_string(),
                message: e.to_string(),
            })?;

        serde_json::to_value(result).map_err(|e| ProbeError::ToolInvocation {
            tool: name.to_string(),
            message: e.to_string(),
        })
    }
}
