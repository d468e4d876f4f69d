//! Output directory management.
//!
//! Thin wrappers over `std::fs` with "create if absent" semantics. Errors
//! carry the path that failed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `dir` and its parents if they don't exist.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(());
    }
    tracing::debug!("Creating directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Remove `dir` recursively and recreate it empty.
///
/// A missing directory is not an error.
pub fn clean_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(dir, e)),
    }
    ensure_dir(dir)
}

/// Whether an output file exists.
pub fn output_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn is_empty_dir(dir: &Path) -> bool {
        dir.is_dir() && fs::read_dir(dir).expect("Failed to read dir").next().is_none()
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dir = temp.path().join("a/b/dist");

        ensure_dir(&dir).expect("Failed to create dir");
        assert!(dir.is_dir());

        // Second call is a no-op
        ensure_dir(&dir).expect("Failed to create dir twice");
        assert!(dir.is_dir());
    }

    #[test]
    fn test_clean_removes_contents() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dist = temp.path().join("dist");
        fs::create_dir_all(dist.join("nested")).expect("Failed to create dirs");
        fs::write(dist.join("creo.css"), "body{}").expect("Failed to write file");
        fs::write(dist.join("nested/old.css"), "a{}").expect("Failed to write file");

        clean_dir(&dist).expect("Failed to clean");
        assert!(is_empty_dir(&dist));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dist = temp.path().join("dist");

        clean_dir(&dist).expect("First clean failed");
        assert!(is_empty_dir(&dist));

        clean_dir(&dist).expect("Second clean failed");
        assert!(is_empty_dir(&dist));
    }

    #[test]
    fn test_output_exists() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let file = temp.path().join("creo.css");
        assert!(!output_exists(&file));

        fs::write(&file, "").expect("Failed to write file");
        assert!(output_exists(&file));
        assert!(!output_exists(temp.path()));
    }
}
