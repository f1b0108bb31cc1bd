//! Host platform classification.
//!
//! Resolution is total: every OS identifier maps to a [`Platform`], and every
//! platform maps to a [`PlatformProfile`]. Windows is the only platform with
//! special handling. Its default CRT lacks C11 threads, so the link is redone
//! against msvcrt/vcruntime/ucrt and the CRT's insecure-function warnings are
//! silenced. Unknown platforms get the default profile instead of an error.

use std::fmt;
use std::str::FromStr;

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Anything not listed above.
    Other,
}

impl Platform {
    /// The platform this binary is running on.
    pub fn host() -> Self {
        Platform::from_os(std::env::consts::OS)
    }

    /// Classify an OS identifier as reported by `std::env::consts::OS`.
    ///
    /// Matching is case-insensitive and never fails.
    pub fn from_os(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "windows" | "win32" | "win64" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            _ => Platform::Other,
        }
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Other => "other",
        }
    }

    /// Build parameters for this platform.
    pub fn profile(&self) -> PlatformProfile {
        match self {
            Platform::Windows => PlatformProfile {
                executable_suffix: ".exe".to_string(),
                extra_compile_flags: "-D_CRT_SECURE_NO_WARNINGS -D_DLL".to_string(),
                extra_link_flags: "-nodefaultlibs -lmsvcrt -lvcruntime -lucrt".to_string(),
            },
            _ => PlatformProfile::default(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Platform::from_os(s))
    }
}

/// Platform-specific build parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Appended to the executable name (e.g. `.exe`)
    pub executable_suffix: String,
    /// Appended to the compile flags
    pub extra_compile_flags: String,
    /// Appended to the link flags
    pub extra_link_flags: String,
}
