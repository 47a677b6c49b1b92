// Worker message shapes
//
// Messages and responses share one wire shape: a `type` discriminator
// string plus an arbitrary JSON payload. No correlation ids, no session
// state; a message lives for a single handling cycle.

use serde::{Deserialize, Serialize};

/// Discriminator carried by every acknowledgment the worker emits
pub const READY_KIND: &str = "ready";

/// A message exchanged between the host and the worker
///
/// The `kind` field is serialized as `type` to match the host-side wire
/// shape. Both fields default so a bare `{}` deserializes cleanly —
/// malformed input must never make the handling path fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl WorkerMessage {
    /// Create a message with the given discriminator and payload
    pub fn new(kind: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Build the `ready` acknowledgment the worker answers with
    pub fn ready(data: impl Into<String>) -> Self {
        Self {
            kind: READY_KIND.to_string(),
            data: serde_json::Value::String(data.into()),
        }
    }

    /// Whether this message is a `ready` acknowledgment
    pub fn is_ready(&self) -> bool {
        self.kind == READY_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ready_shape() {
        let msg = WorkerMessage::ready("worker initialized");

        assert_eq!(msg.kind, "ready");
        assert!(msg.is_ready());
        assert_eq!(msg.data, json!("worker initialized"));
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let msg = WorkerMessage::new("ping", serde_json::Value::Null);
        let wire = serde_json::to_value(&msg).unwrap();

        assert_eq!(wire, json!({"type": "ping", "data": null}));
    }

    #[test]
    fn test_empty_object_deserializes() {
        let msg: WorkerMessage = serde_json::from_str("{}").unwrap();

        assert_eq!(msg.kind, "");
        assert_eq!(msg.data, serde_json::Value::Null);
        assert!(!msg.is_ready());
    }
}
