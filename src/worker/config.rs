use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default payload carried by every `ready` acknowledgment
pub const DEFAULT_READY_DATA: &str = "sqflite_sw worker initialized";

/// Script the worker imports before registering its handler
pub const COMPANION_SCRIPT_NAME: &str = "flutter_service_worker.js";

/// Worker endpoint configuration
///
/// Plain in-process configuration; the endpoint takes no CLI flags and
/// reads no environment variables. `Deserialize` lets a host embed this
/// in its own config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// String echoed in the `data` field of each `ready` response
    pub ready_data: String,
    /// Companion script to load at startup; `None` skips the load
    pub companion_script: Option<PathBuf>,
    /// Capacity of the inbound and outbound channels
    pub channel_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            ready_data: DEFAULT_READY_DATA.to_string(),
            companion_script: None,
            channel_capacity: 32,
        }
    }
}

impl WorkerConfig {
    /// Default configuration with the companion script resolved against
    /// the given serving directory, mirroring a same-origin import
    pub fn with_companion_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            companion_script: Some(dir.as_ref().join(COMPANION_SCRIPT_NAME)),
            ..Self::default()
        }
    }
}
