//! tutorial-build - ninja build generator for the tilde-backend tutorial
//!
//! Builds the nested backend library through its own build script, writes a
//! `build.ninja` compiling the frontend sources against it, and hands that
//! file to ninja.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test fakes and fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use builder::{BackendBuilder, BuildDescription, BuildEngine, BuildError};
pub use core::{BuildConfig, Platform, PlatformProfile, SourceFile};
pub use ops::{generate, GenerateOptions, GenerateOutcome, Project};
pub use util::Config;
