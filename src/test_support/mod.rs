//! Test utilities and fakes for unit tests.
//!
//! The fakes stand in for the two delegated processes, recording what they
//! were asked to do and returning a canned status.
//!
//! # Example
//!
//! ```rust,ignore
//! use tutorial_build::test_support::{create_project, RecordingBackend, RecordingEngine};
//!
//! let project = create_project(tmp.path(), &["a.c", "b.c"]);
//! let backend = RecordingBackend::succeeding();
//! let engine = RecordingEngine::failing(1);
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;

use crate::builder::{BackendBuilder, BuildEngine};
use crate::util::ProcessStatus;

pub use fixtures::*;

/// Fake backend builder recording each requested build.
#[derive(Debug)]
pub struct RecordingBackend {
    status: ProcessStatus,
    watch: Option<PathBuf>,
    calls: Mutex<Vec<bool>>,
    seen: Mutex<Vec<bool>>,
}

impl RecordingBackend {
    /// A backend whose builds exit with `status`.
    pub fn new(status: ProcessStatus) -> Self {
        RecordingBackend {
            status,
            watch: None,
            calls: Mutex::new(Vec::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A backend whose builds succeed.
    pub fn succeeding() -> Self {
        Self::new(ProcessStatus::success_status())
    }

    /// A backend whose builds exit with `code`.
    pub fn failing(code: i32) -> Self {
        Self::new(ProcessStatus::from_code(code))
    }

    /// Record whether `path` exists at the moment of each build.
    pub fn watching(mut self, path: impl Into<PathBuf>) -> Self {
        self.watch = Some(path.into());
        self
    }

    /// The `optimize` argument of each call, in order.
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether the watched path existed at each call.
    pub fn saw_description(&self) -> Vec<bool> {
        self.seen.lock().unwrap().clone()
    }
}

impl BackendBuilder for RecordingBackend {
    fn build(&self, optimize: bool) -> Result<ProcessStatus> {
        self.calls.lock().unwrap().push(optimize);
        if let Some(ref watch) = self.watch {
            self.seen.lock().unwrap().push(watch.exists());
        }
        Ok(self.status)
    }

    fn describe(&self, optimize: bool) -> String {
        if optimize {
            "fake-backend --opt".to_string()
        } else {
            "fake-backend".to_string()
        }
    }
}

/// Fake build engine recording the description paths it was handed.
#[derive(Debug)]
pub struct RecordingEngine {
    status: ProcessStatus,
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingEngine {
    /// An engine exiting with `status`.
    pub fn new(status: ProcessStatus) -> Self {
        RecordingEngine {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An engine that succeeds.
    pub fn succeeding() -> Self {
        Self::new(ProcessStatus::success_status())
    }

    /// An engine exiting with `code`.
    pub fn failing(code: i32) -> Self {
        Self::new(ProcessStatus::from_code(code))
    }

    /// Description paths passed to `run`, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl BuildEngine for RecordingEngine {
    fn run(&self, description: &Path) -> Result<ProcessStatus> {
        self.calls.lock().unwrap().push(description.to_path_buf());
        Ok(self.status)
    }

    fn describe(&self, _description: &Path) -> String {
        "fake-engine".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_backend() {
        let backend = RecordingBackend::failing(3);
        let status = backend.build(true).unwrap();
        assert_eq!(status.code(), Some(3));
        assert_eq!(backend.calls(), vec![true]);
        assert!(backend.saw_description().is_empty());
    }

    #[test]
    fn test_recording_engine() {
        let engine = RecordingEngine::succeeding();
        engine.run(Path::new("build.ninja")).unwrap();
        assert_eq!(engine.calls(), vec![PathBuf::from("build.ninja")]);
    }
}
