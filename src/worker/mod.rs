// Worker endpoint modules
//
// This module contains the background message-handling endpoint that
// stands in for the sqflite web worker: it acknowledges every inbound
// message with a `ready` response.

pub mod config;
pub mod endpoint;
pub mod errors;
pub mod handler;
pub mod message;
pub mod startup;

// Re-export main types
pub use config::WorkerConfig;
pub use endpoint::{WorkerEndpoint, WorkerHandle};
pub use errors::{WorkerError, WorkerResult};
pub use handler::{MessageHandler, ReadyProbe};
pub use message::{WorkerMessage, READY_KIND};
