use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::config::WorkerConfig;
use super::errors::{WorkerError, WorkerResult};
use super::handler::MessageHandler;
use super::message::WorkerMessage;
use super::startup;

/// Background message-handling endpoint
///
/// One long-lived task owns a receive loop over an inbound channel and
/// emits responses onto an outbound channel. There is no other state:
/// the worker listens, responds, and loops until the host closes the
/// inbound side.
pub struct WorkerEndpoint;

impl WorkerEndpoint {
    /// Spawn the worker and return a handle for exchanging messages
    ///
    /// If the configuration names a companion script it is loaded first;
    /// a load failure is returned as [`WorkerError::StartupLoad`] and no
    /// task is spawned.
    pub async fn spawn<H>(config: WorkerConfig, handler: H) -> WorkerResult<WorkerHandle>
    where
        H: MessageHandler + 'static,
    {
        let companion = match &config.companion_script {
            Some(script) => Some(startup::load_companion(script).await?),
            None => None,
        };

        let id = Uuid::new_v4();
        let (inbound_tx, inbound_rx) = mpsc::channel(config.channel_capacity);
        let (outbound_tx, outbound_rx) = mpsc::channel(config.channel_capacity);

        let task = WorkerTask {
            id,
            handler,
            outbound: outbound_tx,
            _companion: companion,
        };
        let join = tokio::spawn(task.run(inbound_rx));

        tracing::info!(worker_id = %id, "worker listening");

        Ok(WorkerHandle {
            id,
            started_at: Utc::now(),
            inbound: inbound_tx,
            outbound: outbound_rx,
            join,
        })
    }
}

/// State owned by the worker task for its entire lifetime
struct WorkerTask<H> {
    id: Uuid,
    handler: H,
    outbound: mpsc::Sender<WorkerMessage>,
    // Loaded companion script, resident until the worker terminates
    _companion: Option<String>,
}

impl<H: MessageHandler> WorkerTask<H> {
    async fn run(mut self, mut inbound: mpsc::Receiver<WorkerMessage>) {
        while let Some(message) = inbound.recv().await {
            tracing::debug!(
                worker_id = %self.id,
                kind = %message.kind,
                data = %message.data,
                "received message"
            );

            let response = self.handler.handle(message).await;
            if self.outbound.send(response).await.is_err() {
                // Host dropped its receiving end; nothing left to answer.
                break;
            }
        }

        tracing::info!(worker_id = %self.id, "worker terminated");
    }
}

/// Host-side handle to a running worker
pub struct WorkerHandle {
    id: Uuid,
    started_at: DateTime<Utc>,
    inbound: mpsc::Sender<WorkerMessage>,
    outbound: mpsc::Receiver<WorkerMessage>,
    join: JoinHandle<()>,
}

impl WorkerHandle {
    /// Identifier of this worker instance, used in log fields
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When this worker started listening
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Deliver one message to the worker
    ///
    /// Fails only if the worker task has already terminated.
    pub async fn send(&self, message: WorkerMessage) -> WorkerResult<()> {
        self.inbound
            .send(message)
            .await
            .map_err(|_| WorkerError::Terminated)
    }

    /// Await the worker's next response
    ///
    /// Returns `None` once the worker has terminated and all pending
    /// responses have been drained.
    pub async fn recv(&mut self) -> Option<WorkerMessage> {
        self.outbound.recv().await
    }

    /// Close the inbound channel and wait for the worker task to exit
    pub async fn shutdown(self) {
        drop(self.inbound);
        if let Err(err) = self.join.await {
            tracing::warn!(worker_id = %self.id, error = %err, "worker task panicked");
        }
    }
}
