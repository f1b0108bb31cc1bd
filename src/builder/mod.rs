//! Build graph synthesis and the delegated processes around it.

pub mod backend;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod ninja;

pub use backend::{BackendBuilder, ScriptBackend};
pub use engine::{BuildEngine, NinjaEngine};
pub use errors::BuildError;
pub use ninja::BuildDescription;
