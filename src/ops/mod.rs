//! High-level operations.

pub mod generate;

pub use generate::{generate, GenerateOptions, GenerateOutcome, Project};
