//! Integration test: probe loop against a stub session.
//!
//! Drives the public probe API the way the CLI does — list, then invoke
//! each tool sequentially — and checks outcome normalization and
//! partial-failure isolation without a live endpoint.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

use toolprobe::{probe_tools, ProbeError, ToolDescriptor, ToolOutcome, ToolSession};

/// Stub endpoint: serves a fixed tool list and a canned result per tool.
struct StubEndpoint {
    tools: Vec<(String, Value)>,
    invocations: AtomicUsize,
}

impl StubEndpoint {
    fn new(tools: Vec<(&str, Value)>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|(name, result)| (name.to_string(), result))
                .collect(),
            invocations: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ToolSession for StubEndpoint {
    async fn list_tools(&self) -> toolprobe::Result<Vec<ToolDescriptor>> {
        Ok(self
            .tools
            .iter()
            .map(|(name, _)| ToolDescriptor::named(name.as_str()))
            .collect())
    }

    async fn call_tool(&self, name: &str, _arguments: Map<String, Value>) -> toolprobe::Result<Value> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        let (_, result) = self
            .tools
            .iter()
            .find(|(n, _)| n == name)
            .expect("probe asked for a tool that was never advertised");

        if result.get("__fail").is_some() {
            return Err(ProbeError::ToolInvocation {
                tool: name.to_string(),
                message: "stub failure".to_string(),
            });
        }
        Ok(result.clone())
    }
}

#[tokio::test]
async fn empty_tool_list_completes_cleanly() {
    let endpoint = StubEndpoint::new(vec![]);

    let tools = endpoint.list_tools().await.expect("listing should succeed");
    assert!(tools.is_empty());

    let reports = probe_tools(&endpoint, &tools).await;
    assert!(reports.is_empty());
    assert_eq!(
        endpoint.invocations.load(Ordering::SeqCst),
        0,
        "an empty list must not trigger any invocation"
    );
}

#[tokio::test]
async fn json_text_result_is_parsed() {
    let endpoint = StubEndpoint::new(vec![(
        "metadata",
        json!({"content": [{"type": "text", "text": "{\"a\":1}"}]}),
    )]);

    let tools = endpoint.list_tools().await.unwrap();
    let reports = probe_tools(&endpoint, &tools).await;

    assert_eq!(
        *reports[0].outcome.as_ref().unwrap(),
        ToolOutcome::ParsedJson(json!({"a": 1})),
        "JSON-encoded text must be displayed as the parsed structure"
    );
}

#[tokio::test]
async fn non_json_text_result_stays_raw() {
    let endpoint = StubEndpoint::new(vec![(
        "greeting",
        json!({"content": [{"type": "text", "text": "not json"}]}),
    )]);

    let tools = endpoint.list_tools().await.unwrap();
    let reports = probe_tools(&endpoint, &tools).await;

    assert_eq!(
        *reports[0].outcome.as_ref().unwrap(),
        ToolOutcome::RawText("not json".to_string())
    );
}

#[tokio::test]
async fn shapeless_result_passes_through_opaque() {
    let raw = json!({"status": "ok", "rows": [1, 2, 3]});
    let endpoint = StubEndpoint::new(vec![("query", raw.clone())]);

    let tools = endpoint.list_tools().await.unwrap();
    let reports = probe_tools(&endpoint, &tools).await;

    assert_eq!(
        *reports[0].outcome.as_ref().unwrap(),
        ToolOutcome::Opaque(raw)
    );
}

#[tokio::test]
async fn middle_failure_does_not_abort_the_probe() {
    let endpoint = StubEndpoint::new(vec![
        (
            "first",
            json!({"content": [{"type": "text", "text": "{\"n\":1}"}]}),
        ),
        ("second", json!({"__fail": true})),
        (
            "third",
            json!({"content": [{"type": "text", "text": "{\"n\":3}"}]}),
        ),
    ]);

    let tools = endpoint.list_tools().await.unwrap();
    let reports = probe_tools(&endpoint, &tools).await;

    assert_eq!(reports.len(), 3, "every tool must get a report");
    assert_eq!(
        endpoint.invocations.load(Ordering::SeqCst),
        3,
        "the failing tool must not stop the remaining invocations"
    );

    assert!(reports[0].outcome.is_ok());
    match &reports[1].outcome {
        Err(ProbeError::ToolInvocation { tool, .. }) => assert_eq!(tool, "second"),
        other => panic!("expected an isolated invocation error, got {other:?}"),
    }
    assert!(reports[2].outcome.is_ok());
}
