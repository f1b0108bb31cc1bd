//! Core data types: build settings, platforms, and sources.

pub mod build_config;
pub mod platform;
pub mod source;

pub use build_config::BuildConfig;
pub use platform::{Platform, PlatformProfile};
pub use source::{discover_sources, SourceFile};
