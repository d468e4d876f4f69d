//! Error types for creo-build-core.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for creo-build-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the framework.
#[derive(Debug, Error)]
pub enum Error {
    /// The Sass compiler could not be found.
    #[error("Sass compiler not found: {0}")]
    DependencyMissing(String),

    /// Installing the Sass compiler failed.
    #[error("failed to install sass: {0}")]
    Install(String),

    /// A variant failed to compile.
    #[error("failed to build {target}: {message}")]
    Compilation { target: &'static str, message: String },

    /// Filesystem operation failed.
    #[error("IO error at {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Package manifest could not be read.
    #[error("invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Watch mode could not run.
    #[error("watch mode failed: {0}")]
    Watch(String),
}

impl Error {
    /// Build an IO error for the given path.
    pub fn io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_message_names_variant() {
        let err = Error::Compilation {
            target: "compressed CSS",
            message: "sass exited with exit status: 65".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to build compressed CSS: sass exited with exit status: 65"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = Error::io(
            "dist/creo.css",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("dist/creo.css"));
        assert!(message.contains("denied"));
    }
}
