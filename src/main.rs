use serde_json::json;

use sqflite_worker::{ReadyProbe, WorkerConfig, WorkerEndpoint, WorkerMessage};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // In-process configuration; the harness takes no arguments
    let config = WorkerConfig::default();
    let probe = ReadyProbe::new(config.ready_data.clone());

    // Spawn the worker
    tracing::info!("Starting worker...");
    let mut handle = WorkerEndpoint::spawn(config, probe)
        .await
        .expect("Failed to start worker");

    tracing::info!(
        worker_id = %handle.id(),
        started_at = %handle.started_at(),
        "Worker started"
    );

    // Probe it once, the way a host page would
    handle
        .send(WorkerMessage::new("ping", json!(null)))
        .await
        .expect("Failed to send ping");

    match handle.recv().await {
        Some(response) => tracing::info!(
            kind = %response.kind,
            data = %response.data,
            "worker responded"
        ),
        None => tracing::warn!("worker exited without responding"),
    }

    handle.shutdown().await;
}
