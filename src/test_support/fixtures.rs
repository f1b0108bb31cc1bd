//! Project fixtures on a real (temporary) filesystem.

use std::fs;
use std::path::Path;

use crate::ops::Project;
use crate::util::Config;

/// Minimal C source with a `main`.
pub const MAIN_C: &str = r#"#include <stdio.h>

int main(void) {
    printf("Hello, World!\n");
    return 0;
}
"#;

/// Lay out a tutorial project under `root` with the given `src/` files and
/// an empty backend directory, using the default configuration.
pub fn create_project(root: &Path, sources: &[&str]) -> Project {
    let config = Config::default();

    let src = root.join(&config.layout.source_dir);
    fs::create_dir_all(&src).unwrap();
    for name in sources {
        fs::write(src.join(name), MAIN_C).unwrap();
    }

    fs::create_dir_all(root.join(&config.backend.dir)).unwrap();
    fs::create_dir_all(root.join(&config.backend.include_dir)).unwrap();

    Project::new(root, config)
}
