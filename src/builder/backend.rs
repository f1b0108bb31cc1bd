//! Delegation to the backend's own build script.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::util::config::BackendSettings;
use crate::util::process::{find_python, ProcessBuilder};
use crate::util::ProcessStatus;

/// Builds the backend library the frontend links against.
///
/// Implementations block until the build finishes.
pub trait BackendBuilder {
    /// Run the backend build once.
    fn build(&self, optimize: bool) -> Result<ProcessStatus>;

    /// Human-readable command, for error messages.
    fn describe(&self, optimize: bool) -> String;
}

/// Runs the backend's build script inside the backend project root.
#[derive(Debug, Clone)]
pub struct ScriptBackend {
    backend_root: PathBuf,
    settings: BackendSettings,
}

impl ScriptBackend {
    /// Create a backend builder for the project at `project_root`.
    pub fn new(project_root: &Path, settings: BackendSettings) -> Self {
        ScriptBackend {
            backend_root: project_root.join(&settings.dir),
            settings,
        }
    }

    /// Command line for the script: `<interpreter> <script> <arch> [--opt]`.
    pub fn command(&self, optimize: bool) -> Result<ProcessBuilder> {
        let interpreter = match self.settings.interpreter {
            Some(ref interpreter) => interpreter.clone(),
            None => match find_python() {
                Some(python) => python,
                None => bail!(
                    "no Python interpreter found\n\
                     \n\
                     The backend is built by `{}`, which needs Python.\n\
                     Install Python or set `backend.interpreter` in the config file.",
                    self.settings.script.display()
                ),
            },
        };

        let mut cmd = ProcessBuilder::new(interpreter)
            .arg(&self.settings.script)
            .arg(&self.settings.arch)
            .cwd(&self.backend_root);

        if optimize {
            cmd = cmd.arg("--opt");
        }

        Ok(cmd)
    }
}

impl BackendBuilder for ScriptBackend {
    fn build(&self, optimize: bool) -> Result<ProcessStatus> {
        if !self.backend_root.is_dir() {
            bail!(
                "backend project not found at {}",
                self.backend_root.display()
            );
        }

        tracing::info!("Building backend in {}", self.backend_root.display());
        self.command(optimize)?.status()
    }

    fn describe(&self, optimize: bool) -> String {
        match self.command(optimize) {
            Ok(cmd) => cmd.display_command(),
            Err(_) => self.settings.script.display().to_string(),
        }
    }
}
