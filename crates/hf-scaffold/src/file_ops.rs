use crate::error::ScaffoldError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using write-to-temp-then-rename.
/// The temp file lives in the target's directory so the rename never crosses
/// filesystems.
pub fn atomic_write(target: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
    let parent = target.parent().ok_or_else(|| ScaffoldError::WriteError {
        path: target.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent directory"),
    })?;

    ensure_dir(parent)?;

    let write_err = |e| ScaffoldError::WriteError {
        path: target.to_path_buf(),
        source: e,
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(content).map_err(write_err)?;
    temp_file.as_file().sync_all().map_err(write_err)?;
    temp_file
        .persist(target)
        .map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Create a new file atomically, failing if it already exists.
pub fn atomic_create(target: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
    if target.exists() {
        return Err(ScaffoldError::FileAlreadyExists(target.to_path_buf()));
    }
    atomic_write(target, content)
}

/// Create `dir` and its parents when missing.
pub fn ensure_dir(dir: &Path) -> Result<(), ScaffoldError> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::MkdirError {
        path: dir.to_path_buf(),
        source: e,
    })
}
