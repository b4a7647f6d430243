use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory names never copied out of a project template.
pub const SKIPPED_TEMPLATE_ENTRIES: &[&str] = &["node_modules", "dist", ".cache"];

/// Resolve a user-supplied relative path against a project root.
///
/// Absolute paths and `..` sequences that climb above the root are rejected,
/// so generated files can never land outside the project.
pub fn resolve_within_root(root: &Path, relative: &str) -> Result<PathBuf, String> {
    let requested = Path::new(relative);
    if requested.is_absolute() || requested.has_root() {
        return Err(format!(
            "Path '{}' must be relative to the project root '{}'",
            relative,
            root.display()
        ));
    }

    let normalized = normalize_path(&root.join(requested));
    if !normalized.starts_with(normalize_path(root)) {
        return Err(format!(
            "Path '{}' escapes project root '{}'",
            relative,
            root.display()
        ));
    }
    Ok(normalized)
}

/// Normalize a path by resolving `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// True when `dir` is missing or has no entries.
pub fn is_directory_empty(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}

/// Recursively copy `src` into `dst`, skipping [`SKIPPED_TEMPLATE_ENTRIES`].
///
/// Returns the number of files copied.
pub fn copy_dir_filtered(src: &Path, dst: &Path) -> io::Result<usize> {
    fs::create_dir_all(dst)?;
    let mut copied = 0usize;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        if name
            .to_str()
            .is_some_and(|n| SKIPPED_TEMPLATE_ENTRIES.contains(&n))
        {
            tracing::debug!("Skipping template entry {:?}", entry.path());
            continue;
        }

        let target = dst.join(&name);
        if entry.file_type()?.is_dir() {
            copied += copy_dir_filtered(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
