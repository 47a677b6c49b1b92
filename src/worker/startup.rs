// Startup dependency loading
//
// Before registering its message handler the worker imports a companion
// script from its serving directory. A missing or unreadable script is a
// startup failure: the endpoint never comes up and the host sees the
// error.

use std::path::Path;

use super::errors::{WorkerError, WorkerResult};

/// Load the companion script the worker depends on at initialization
///
/// Returns the script text; the caller keeps it resident for the
/// worker's lifetime, matching the semantics of an executed import.
pub async fn load_companion(script: &Path) -> WorkerResult<String> {
    let source = tokio::fs::read_to_string(script)
        .await
        .map_err(|source| WorkerError::StartupLoad {
            script: script.to_path_buf(),
            source,
        })?;

    tracing::info!(
        script = %script.display(),
        bytes = source.len(),
        "companion script loaded"
    );

    Ok(source)
}
