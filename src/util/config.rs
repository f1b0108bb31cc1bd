//! Project configuration file support.
//!
//! The optional `tutorial-build.toml` in the project root overrides the
//! layout conventions. Every key has a default, so an absent file reproduces
//! the stock tutorial layout:
//!
//! ```toml
//! [toolchain]
//! cc = "clang"
//!
//! [layout]
//! source_dir = "src"
//! source_extension = "c"
//! object_dir = "bin"
//! executable = "tutorial"
//!
//! [backend]
//! dir = "tilde-backend"
//! script = "build.py"
//! arch = "x64"
//! include_dir = "tilde-backend/include"
//! artifact = "tilde-backend/tildebackend.lib"
//!
//! [engine]
//! program = "ninja"
//! file = "build.ninja"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "tutorial-build.toml";

/// Conventional ninja file name; the engine finds it without arguments.
pub const DEFAULT_DESCRIPTION_FILE: &str = "build.ninja";

/// Complete project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compiler settings
    pub toolchain: ToolchainSettings,

    /// Frontend source and output locations
    pub layout: LayoutSettings,

    /// Nested backend project
    pub backend: BackendSettings,

    /// External build engine
    pub engine: EngineSettings,
}

/// Compiler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// C compiler used for both the compile and link rules
    pub cc: String,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        ToolchainSettings {
            cc: "clang".to_string(),
        }
    }
}

/// Where frontend sources live and where their outputs go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Directory scanned (non-recursively) for sources
    pub source_dir: PathBuf,

    /// Extension of compilable sources, without the dot
    pub source_extension: String,

    /// Staging directory for objects
    pub object_dir: PathBuf,

    /// Executable name, without the platform suffix
    pub executable: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            source_dir: PathBuf::from("src"),
            source_extension: "c".to_string(),
            object_dir: PathBuf::from("bin"),
            executable: "tutorial".to_string(),
        }
    }
}

/// The nested backend project and its build script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Backend project root, relative to the project root
    pub dir: PathBuf,

    /// Build script, relative to the backend root
    pub script: PathBuf,

    /// Interpreter for the script (None = search PATH for Python)
    pub interpreter: Option<PathBuf>,

    /// Architecture argument passed to the script
    pub arch: String,

    /// Public header directory, relative to the project root
    pub include_dir: PathBuf,

    /// Library produced by the backend build, relative to the project root
    pub artifact: PathBuf,
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            dir: PathBuf::from("tilde-backend"),
            script: PathBuf::from("build.py"),
            interpreter: None,
            arch: "x64".to_string(),
            include_dir: PathBuf::from("tilde-backend/include"),
            artifact: PathBuf::from("tilde-backend/tildebackend.lib"),
        }
    }
}

/// The external build engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Engine executable
    pub program: PathBuf,

    /// Build description file, relative to the project root
    pub file: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            program: PathBuf::from("ninja"),
            file: PathBuf::from(DEFAULT_DESCRIPTION_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}

/// Get the project config path (`<root>/tutorial-build.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}
