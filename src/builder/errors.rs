//! Delegated-process failures.

use thiserror::Error;

use crate::util::ProcessStatus;

/// A delegated process ran but did not succeed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("backend build `{command}` failed with {status}")]
    BackendFailed {
        command: String,
        status: ProcessStatus,
    },

    #[error("build engine `{command}` failed with {status}")]
    EngineFailed {
        command: String,
        status: ProcessStatus,
    },
}

impl BuildError {
    /// Status of the process that failed.
    pub fn status(&self) -> ProcessStatus {
        match self {
            BuildError::BackendFailed { status, .. } | BuildError::EngineFailed { status, .. } => {
                *status
            }
        }
    }

    /// Exit code this program should terminate with.
    pub fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }
}
