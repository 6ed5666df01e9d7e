//! Invocation-result normalization.
//!
//! Remote tools return results whose shape this crate does not own. The
//! decode below reduces them to a small tagged set with a fixed
//! precedence: a null result is empty; a content list whose first entry is
//! text-typed is parsed as JSON when possible and kept raw otherwise;
//! anything else passes through opaquely.

use serde_json::Value;

/// Normalized form of one tool invocation result.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The endpoint returned no result content at all.
    Empty,
    /// First content entry was text that parsed as JSON.
    ParsedJson(Value),
    /// First content entry was text that did not parse as JSON.
    RawText(String),
    /// Result did not match the content/text shape; kept verbatim.
    Opaque(Value),
}

impl ToolOutcome {
    /// Decode a raw invocation result.
    pub fn decode(result: Value) -> Self {
        if result.is_null() {
            return ToolOutcome::Empty;
        }
        if let Some(text) = first_text_entry(&result) {
            return match serde_json::from_str::<Value>(text) {
                Ok(parsed) => ToolOutcome::ParsedJson(parsed),
                Err(_) => ToolOutcome::RawText(text.to_string()),
            };
        }
        ToolOutcome::Opaque(result)
    }
}

/// The `text` payload of the first content entry, when the result has a
/// content list whose first entry is text-typed.
fn first_text_entry(result: &Value) -> Option<&str> {
    let first = result.get("content")?.as_array()?.first()?;
    if first.get("type")?.as_str()? != "text" {
        return None;
    }
    first.get("text")?.as_str()
}

impl std::fmt::Display for ToolOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolOutcome::Empty => write!(f, "(no content)"),
            ToolOutcome::RawText(text) => write!(f, "{text}"),
            ToolOutcome::ParsedJson(value) | ToolOutcome::Opaque(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| std::fmt::Error)?;
                write!(f, "{pretty}")
            }
        }
    }
}
