//! Frontend source discovery and object path derivation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::config::LayoutSettings;
use crate::util::fs::glob_files;

/// Extension given to compiled objects.
pub const OBJECT_EXTENSION: &str = "o";

/// One compilable unit, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    /// Create a source file from a project-relative path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SourceFile { path: path.into() }
    }

    /// Project-relative path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derive the object this source compiles to: `<object_dir>/<stem>.o`.
    ///
    /// Only the file stem survives, so two sources sharing a stem in
    /// different directories map to the same object. See
    /// [`find_object_collisions`].
    pub fn object_path(&self, object_dir: &Path) -> PathBuf {
        let stem = self.path.file_stem().unwrap_or(self.path.as_os_str());
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(OBJECT_EXTENSION);
        object_dir.join(name)
    }
}

/// List the compilable sources of the frontend.
///
/// Scans `layout.source_dir` (non-recursively) for files with
/// `layout.source_extension`. An empty or missing directory yields an empty
/// list.
pub fn discover_sources(project_root: &Path, layout: &LayoutSettings) -> Result<Vec<SourceFile>> {
    let dir = project_root.join(&layout.source_dir);
    let found = glob_files(&dir, &layout.source_extension)?;

    let sources: Vec<SourceFile> = found
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(project_root)
                .map(Path::to_path_buf)
                .unwrap_or(path);
            SourceFile::new(relative)
        })
        .collect();

    if sources.is_empty() {
        tracing::warn!(
            "no `*.{}` sources found in {}",
            layout.source_extension,
            dir.display()
        );
    } else {
        tracing::debug!("discovered {} source(s) in {}", sources.len(), dir.display());
    }

    Ok(sources)
}

/// Object paths claimed by more than one source, with the sources claiming them.
pub fn find_object_collisions(
    sources: &[SourceFile],
    object_dir: &Path,
) -> Vec<(PathBuf, Vec<SourceFile>)> {
    let mut by_object: BTreeMap<PathBuf, Vec<SourceFile>> = BTreeMap::new();
    for source in sources {
        by_object
            .entry(source.object_path(object_dir))
            .or_default()
            .push(source.clone());
    }

    by_object
        .into_iter()
        .filter(|(_, claimants)| claimants.len() > 1)
        .collect()
}
