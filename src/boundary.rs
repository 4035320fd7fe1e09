//! Transport-agnostic request handling: JSON body in, status and JSON payload
//! out. An HTTP layer only has to forward the raw body and write the reply.

use crate::generator::{DEFAULT_PROMPT, Generator};
use crate::scenario::Scenario;
use serde_json::{Value, json};
use tracing::warn;

pub const GENERATION_FAILED: &str = "Une erreur est survenue lors de la génération du scénario.";

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Generated(Scenario),
    Failed { details: String },
}

impl Reply {
    /// HTTP status code for the reply.
    pub fn status(&self) -> u16 {
        match self {
            Reply::Generated(_) => 200,
            Reply::Failed { .. } => 500,
        }
    }

    /// Response payload: `{"scenario": …}` or `{"error": …, "details": …}`.
    pub fn to_json(&self) -> Value {
        match self {
            Reply::Generated(scenario) => json!({ "scenario": scenario }),
            Reply::Failed { details } => json!({
                "error": GENERATION_FAILED,
                "details": details,
            }),
        }
    }
}

/// The `prompt` field of a request payload when it is a string, the default
/// prompt otherwise.
pub fn prompt_from_payload(payload: &Value) -> &str {
    payload
        .get("prompt")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROMPT)
}

/// Handles a raw request body. Only a body that is not valid JSON fails.
pub fn handle_request(generator: &Generator, raw_body: &str) -> Reply {
    match serde_json::from_str::<Value>(raw_body) {
        Ok(payload) => Reply::Generated(generator.generate(prompt_from_payload(&payload))),
        Err(e) => {
            warn!(error = %e, "rejected malformed request body");
            Reply::Failed {
                details: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_prompt_falls_back_to_default() {
        assert_eq!(prompt_from_payload(&json!({ "prompt": 42 })), DEFAULT_PROMPT);
        assert_eq!(prompt_from_payload(&json!(["Slack"])), DEFAULT_PROMPT);
        assert_eq!(prompt_from_payload(&json!({ "prompt": "Slack" })), "Slack");
    }

    #[test]
    fn malformed_body_yields_server_error() {
        let reply = handle_request(&Generator::new(), "{ not json");
        assert_eq!(reply.status(), 500);
        let payload = reply.to_json();
        assert_eq!(payload["error"], GENERATION_FAILED);
        assert!(payload["details"].as_str().is_some_and(|d| !d.is_empty()));
    }
}
