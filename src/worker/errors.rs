use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the worker endpoint
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to load companion script {script}: {source}")]
    StartupLoad {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("worker task has terminated")]
    Terminated,
}

pub type WorkerResult<T> = Result<T, WorkerError>;
