//! tutorial-build CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use tutorial_build::builder::{NinjaEngine, ScriptBackend};
use tutorial_build::util::config::project_config_path;
use tutorial_build::{generate, BuildConfig, BuildError, Config, GenerateOptions, Platform, Project};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        let code = e
            .downcast_ref::<BuildError>()
            .map(BuildError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("tutorial_build=debug")
    } else {
        EnvFilter::new("tutorial_build=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let root = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::load_or_default(&project_config_path(&root)),
    };

    let platform = cli
        .platform
        .as_deref()
        .map(Platform::from_os)
        .unwrap_or_else(Platform::host);

    let backend = ScriptBackend::new(&root, config.backend.clone());
    let engine = NinjaEngine::new(&root, &config.engine);
    let project = Project::new(root, config);

    let opts = GenerateOptions {
        config: BuildConfig { optimize: cli.opt },
        platform,
        run_engine: !cli.no_run,
    };

    let outcome = generate(&project, &backend, &engine, &opts)?;

    if outcome.engine_status.is_some() {
        eprintln!("    Finished `{}`", outcome.executable);
    } else {
        eprintln!(
            "    Generated {}",
            display_relative(&outcome.description_path, project.root()).display()
        );
    }

    Ok(())
}

fn display_relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
