//! Sequential probe of every advertised tool.

use serde_json::Map;
use tracing::{info, warn};

use crate::error::Result;

use super::outcome::ToolOutcome;
use super::session::{ToolDescriptor, ToolSession};

/// Phases of one probe run.
///
/// `Authenticating`, `Connecting`, and `Listing` failures are fatal to the
/// run; an `Invoking` failure is confined to that tool's iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbePhase {
    Idle,
    Authenticating,
    Connecting,
    Listing,
    Invoking,
    Done,
}

impl std::fmt::Display for ProbePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProbePhase::Idle => "idle",
            ProbePhase::Authenticating => "authenticating",
            ProbePhase::Connecting => "connecting",
            ProbePhase::Listing => "listing",
            ProbePhase::Invoking => "invoking",
            ProbePhase::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Result of probing one tool.
#[derive(Debug)]
pub struct ToolReport {
    /// Tool name as advertised.
    pub tool: String,
    /// Normalized outcome, or the isolated invocation error.
    pub outcome: Result<ToolOutcome>,
}

/// Invoke every tool in `tools` with an empty argument set, one at a time
/// in list order.
///
/// One tool's failure never aborts the probe of the remaining tools: the
/// failure is captured in that tool's report and the loop continues. An
/// empty `tools` slice yields an empty report list without touching the
/// session.
pub async fn probe_tools(session: &dyn ToolSession, tools: &[ToolDescriptor]) -> Vec<ToolReport> {
    let mut reports = Vec::with_capacity(tools.len());

    for tool in tools {
        info!(phase = %ProbePhase::Invoking, tool = %tool.name, "invoking tool");

        let outcome = match session.call_tool(&tool.name, Map::new()).await {
            Ok(raw) => Ok(ToolOutcome::decode(raw)),
            Err(e) => {
                warn!(tool = %tool.name, error = %e, "tool invocation failed");
                Err(e)
            }
        };

        reports.push(ToolReport {
            tool: tool.name.clone(),
            outcome,
        });
    }

    reports
}
