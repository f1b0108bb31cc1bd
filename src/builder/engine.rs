//! Invocation of the external build engine.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::config::{EngineSettings, DEFAULT_DESCRIPTION_FILE};
use crate::util::process::ProcessBuilder;
use crate::util::ProcessStatus;

/// Executes a written build description.
///
/// The engine is opaque: only its exit status is observed.
pub trait BuildEngine {
    /// Run the engine once over `description`, blocking until it exits.
    fn run(&self, description: &Path) -> Result<ProcessStatus>;

    /// Human-readable command, for error messages.
    fn describe(&self, description: &Path) -> String;
}

/// Runs `ninja` in the project root.
#[derive(Debug, Clone)]
pub struct NinjaEngine {
    program: PathBuf,
    project_root: PathBuf,
}

impl NinjaEngine {
    /// Create an engine runner for the project at `project_root`.
    pub fn new(project_root: &Path, settings: &EngineSettings) -> Self {
        NinjaEngine {
            program: settings.program.clone(),
            project_root: project_root.to_path_buf(),
        }
    }

    /// Command line for `description`.
    ///
    /// No arguments when the file has the conventional name and sits in the
    /// project root, since ninja finds it on its own; `-f <file>` otherwise.
    pub fn command(&self, description: &Path) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.program).cwd(&self.project_root);

        let relative = description
            .strip_prefix(&self.project_root)
            .unwrap_or(description);
        if relative != Path::new(DEFAULT_DESCRIPTION_FILE) {
            cmd = cmd.arg("-f").arg(relative);
        }

        cmd
    }
}

impl BuildEngine for NinjaEngine {
    fn run(&self, description: &Path) -> Result<ProcessStatus> {
        tracing::info!("Running {}", self.program.display());
        self.command(description).status()
    }

    fn describe(&self, description: &Path) -> String {
        self.command(description).display_command()
    }
}
