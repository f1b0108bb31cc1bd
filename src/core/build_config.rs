//! Per-invocation build settings.

/// Settings that drive flag selection for one run.
///
/// Created once from the command line and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Build with optimizations and without debug assertions
    pub optimize: bool,
}

impl BuildConfig {
    /// Debug build settings.
    pub fn debug() -> Self {
        BuildConfig { optimize: false }
    }

    /// Optimized build settings.
    pub fn optimized() -> Self {
        BuildConfig { optimize: true }
    }

    /// Profile name for log output.
    pub fn profile_name(&self) -> &'static str {
        if self.optimize {
            "optimized"
        } else {
            "debug"
        }
    }
}
