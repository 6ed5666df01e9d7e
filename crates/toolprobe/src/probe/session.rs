//! The seam between the probe runner and the remote collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A tool advertised by the remote endpoint.
///
/// Only the name is interpreted; everything else the endpoint sends
/// (description, input schema, annotations) rides along opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name used for invocation.
    pub name: String,
    /// Whatever else the endpoint advertises.
    #[serde(flatten)]
    pub meta: serde_json::Map<String, Value>,
}

impl ToolDescriptor {
    /// A descriptor carrying nothing but a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: serde_json::Map::new(),
        }
    }
}

/// One authenticated session against a remote tool-serving endpoint.
///
/// Implementations surface [`crate::ProbeError::Listing`] from
/// [`list_tools`](Self::list_tools) and
/// [`crate::ProbeError::ToolInvocation`] from
/// [`call_tool`](Self::call_tool). Methods take `&self`: the session is
/// driven by one caller at a time and holds no probe-visible state.
#[async_trait]
pub trait ToolSession {
    /// Enumerate the tools this session exposes.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>>;

    /// Invoke `name` with the given arguments, returning the raw result.
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> Result<Value>;
}
