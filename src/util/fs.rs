//! Filesystem utilities.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};
use tempfile::NamedTempFile;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Replace a file's contents in one step.
///
/// The contents are written to a temporary file next to `path` and then
/// renamed over it, so readers see either the old file or the complete new one.
/// An existing file keeps its permissions; a new one gets the usual 0644 on
/// unix rather than the temporary file's 0600.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&parent)?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("failed to create temporary file in {}", parent.display()))?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("failed to set permissions for {}", path.display()))?;
    }
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush file: {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace file: {}", path.display()))?;

    Ok(())
}

fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Find files directly inside `dir` whose extension is `extension`.
///
/// Not recursive, and hidden files (leading `.`) are skipped. The result is
/// sorted so repeated calls over the same filesystem state agree. An entry
/// that cannot be read fails the whole listing.
pub fn glob_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(extension)
    );

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut results = Vec::new();
    for entry in glob_with(&pattern, options)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
    {
        let path = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if path.is_file() {
            results.push(path);
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_files_is_flat() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("main.c"), "int main() {}").unwrap();
        fs::write(src.join("util.c"), "void util() {}").unwrap();
        fs::write(src.join("lexer.h"), "").unwrap();
        fs::write(src.join("nested/deep.c"), "").unwrap();

        let files = glob_files(&src, "c").unwrap();
        assert_eq!(files, vec![src.join("main.c"), src.join("util.c")]);
    }

    #[test]
    fn test_glob_files_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let files = glob_files(&tmp.path().join("nope"), "c").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_glob_files_escapes_base() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("proj [1]").join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.c"), "").unwrap();

        let files = glob_files(&src, "c").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_glob_files_skips_hidden() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.c"), "").unwrap();
        fs::write(src.join(".a.c"), "").unwrap();
        fs::write(src.join("._main.c"), "").unwrap();

        let files = glob_files(&src, "c").unwrap();
        assert_eq!(files, vec![src.join("a.c")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_glob_files_unreadable_dir_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.c"), "").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores permission bits
        let readable = fs::read_dir(&src).is_ok();
        let result = glob_files(&src, "c");
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            assert!(result.is_err());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let fresh = tmp.path().join("build.ninja");
        write_atomic(&fresh, "one").unwrap();
        let mode = fs::metadata(&fresh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);

        fs::set_permissions(&fresh, fs::Permissions::from_mode(0o664)).unwrap();
        write_atomic(&fresh, "two").unwrap();
        let mode = fs::metadata(&fresh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("build.ninja");
        fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_atomic(&path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
        let leftovers: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }
}
