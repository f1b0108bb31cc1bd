//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Build the tilde-backend tutorial: backend library, build.ninja, then ninja
#[derive(Parser)]
#[command(name = "tutorial-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build with optimizations (-O2 -DNDEBUG); debug build otherwise
    #[arg(long)]
    pub opt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Generate for this OS instead of the host (e.g. windows, linux)
    #[arg(long, value_name = "OS")]
    pub platform: Option<String>,

    /// Write build.ninja without running ninja
    #[arg(long)]
    pub no_run: bool,

    /// Configuration file (defaults to <DIR>/tutorial-build.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
