use async_trait::async_trait;

use super::message::WorkerMessage;

/// Message handler invoked by the worker endpoint for each inbound message
///
/// Infallible by contract: the handling path has no defined error
/// conditions, so a handler always produces a response. The real database
/// worker will eventually implement this trait; its protocol is not
/// defined here.
#[async_trait]
pub trait MessageHandler: Send {
    /// Handle one inbound message and produce the outbound response
    async fn handle(&mut self, message: WorkerMessage) -> WorkerMessage;
}

/// Liveness-probe handler: answers every message with `ready`
///
/// Ignores the inbound content entirely, including its discriminator.
#[derive(Debug, Clone)]
pub struct ReadyProbe {
    ready_data: String,
}

impl ReadyProbe {
    /// Create a probe that echoes the given string in each response
    pub fn new(ready_data: impl Into<String>) -> Self {
        Self {
            ready_data: ready_data.into(),
        }
    }
}

#[async_trait]
impl MessageHandler for ReadyProbe {
    async fn handle(&mut self, _message: WorkerMessage) -> WorkerMessage {
        WorkerMessage::ready(self.ready_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_ready_probe_ignores_input() {
        let mut probe = ReadyProbe::new("worker up");

        let response = probe
            .handle(WorkerMessage::new("query", json!({"sql": "SELECT 1"})))
            .await;

        assert!(response.is_ready());
        assert_eq!(response.data, json!("worker up"));
    }

    #[tokio::test]
    async fn test_ready_probe_is_stateless() {
        let mut probe = ReadyProbe::new("worker up");

        let first = probe.handle(WorkerMessage::new("a", json!(1))).await;
        let second = probe.handle(WorkerMessage::new("b", json!(2))).await;

        assert_eq!(first.data, second.data);
        assert_eq!(first.kind, second.kind);
    }
}
