//! The generate-and-build pipeline.
//!
//! Stages run strictly in order and the first failure stops the run:
//!
//! 1. resolve the platform profile
//! 2. build the backend library
//! 3. discover frontend sources
//! 4. emit the build description
//! 5. write it to disk (atomically)
//! 6. run the build engine

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::graph::{emit, executable_name};
use crate::builder::{BackendBuilder, BuildEngine, BuildError};
use crate::core::source::find_object_collisions;
use crate::core::{discover_sources, BuildConfig, Platform};
use crate::util::fs::write_atomic;
use crate::util::{Config, ProcessStatus};

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Flag selection for this run
    pub config: BuildConfig,
    /// Platform to generate for
    pub platform: Platform,
    /// Invoke the engine after writing the description
    pub run_engine: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            config: BuildConfig::default(),
            platform: Platform::host(),
            run_engine: true,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Where the description was written
    pub description_path: PathBuf,
    /// Number of compile statements emitted
    pub compile_targets: usize,
    /// Link output name
    pub executable: String,
    /// Engine status, if the engine ran
    pub engine_status: Option<ProcessStatus>,
}

/// A project root with its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Create a project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Project {
            root: root.into(),
            config,
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute location of the build description file.
    pub fn description_path(&self) -> PathBuf {
        self.root.join(&self.config.engine.file)
    }
}

/// Run the pipeline.
///
/// A failing backend build returns [`BuildError::BackendFailed`] before the
/// description file is touched; a failing engine returns
/// [`BuildError::EngineFailed`].
pub fn generate(
    project: &Project,
    backend: &dyn BackendBuilder,
    engine: &dyn BuildEngine,
    opts: &GenerateOptions,
) -> Result<GenerateOutcome> {
    let settings = project.config();

    let profile = opts.platform.profile();
    tracing::debug!("platform {} -> {:?}", opts.platform, profile);

    tracing::info!("Building backend ({})", opts.config.profile_name());
    let status = backend.build(opts.config.optimize)?;
    if !status.success() {
        return Err(BuildError::BackendFailed {
            command: backend.describe(opts.config.optimize),
            status,
        }
        .into());
    }

    let sources = discover_sources(project.root(), &settings.layout)?;
    for (object, claimants) in find_object_collisions(&sources, &settings.layout.object_dir) {
        let names: Vec<String> = claimants
            .iter()
            .map(|s| s.path().display().to_string())
            .collect();
        tracing::warn!(
            "{} is produced by more than one source: {}",
            object.display(),
            names.join(", ")
        );
    }

    let description = emit(&opts.config, &profile, settings, &sources);
    let description_path = project.description_path();
    write_atomic(&description_path, &description.to_string())?;
    tracing::info!(
        "Wrote {} ({} compile target(s))",
        description_path.display(),
        sources.len()
    );

    let mut outcome = GenerateOutcome {
        description_path,
        compile_targets: sources.len(),
        executable: executable_name(&profile, settings),
        engine_status: None,
    };

    if !opts.run_engine {
        return Ok(outcome);
    }

    let status = engine.run(&outcome.description_path)?;
    if !status.success() {
        return Err(BuildError::EngineFailed {
            command: engine.describe(&outcome.description_path),
            status,
        }
        .into());
    }
    outcome.engine_status = Some(status);

    Ok(outcome)
}
