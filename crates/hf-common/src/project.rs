use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Marker files that indicate a JavaScript project root.
const PROJECT_MARKERS: &[&str] = &["package.json"];

/// npm package name rules: optional `@scope/`, lowercase, no spaces.
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name regex")
});

/// Walk upward from `start` to find the nearest directory containing a `package.json`.
/// Returns `None` if no marker is found before reaching the filesystem root.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        if PROJECT_MARKERS.iter().any(|m| current.join(m).exists()) {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Check that `name` is usable as an npm package (and therefore project) name.
pub fn validate_project_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Unknown,
}

impl PackageManager {
    /// Executable name, `npm` standing in for `Unknown`.
    pub fn command(self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm | PackageManager::Unknown => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Detect the package manager from lockfiles in `project_root`.
pub fn detect_package_manager(project_root: &Path) -> PackageManager {
    if project_root.join("pnpm-lock.yaml").exists() {
        PackageManager::Pnpm
    } else if project_root.join("yarn.lock").exists() {
        PackageManager::Yarn
    } else if project_root.join("package-lock.json").exists() {
        PackageManager::Npm
    } else {
        PackageManager::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_project_root_with_package_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let sub = dir.path().join("app").join("components");
        fs::create_dir_all(&sub).unwrap();

        let root = find_project_root(&sub).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_find_project_root_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_project_root(dir.path()).is_none());
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my-hydrogen-store"));
        assert!(validate_project_name("@acme/storefront"));
        assert!(validate_project_name("store.v2"));
        assert!(!validate_project_name("My Store"));
        assert!(!validate_project_name("MyStore"));
        assert!(!validate_project_name(""));
        assert!(!validate_project_name("@acme/"));
    }

    #[test]
    fn test_detect_package_manager() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_package_manager(dir.path()), PackageManager::Unknown);

        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        assert_eq!(detect_package_manager(dir.path()), PackageManager::Npm);

        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(detect_package_manager(dir.path()), PackageManager::Yarn);

        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(detect_package_manager(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_package_manager_command() {
        assert_eq!(PackageManager::Unknown.command(), "npm");
        assert_eq!(PackageManager::Pnpm.command(), "pnpm");
        assert_eq!(PackageManager::Yarn.to_string(), "yarn");
    }
}
