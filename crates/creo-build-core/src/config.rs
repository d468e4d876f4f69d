//! Build configuration.
//!
//! A [`BuildConfig`] is created once at startup and passed by reference to
//! every stage. All relative paths resolve against the project root:
//!
//! ```text
//! <root>/
//! ├── package.json        # declared framework version
//! ├── scss/
//! │   ├── creo.scss       # main entry
//! │   └── creo.lean.scss  # lean entry (synthesized if missing)
//! └── dist/               # build output
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default manifest filename.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// The fields of `package.json` the build reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    /// Package name, if declared.
    #[serde(default)]
    pub name: Option<String>,

    /// Declared framework version.
    pub version: String,
}

impl PackageManifest {
    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Immutable build configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; every other path is relative to it.
    pub root: PathBuf,

    /// Sass source directory.
    pub src_dir: PathBuf,

    /// Output directory.
    pub dist_dir: PathBuf,

    /// Main entry file inside `src_dir`.
    pub main_file: String,

    /// Lean entry file inside `src_dir`.
    pub lean_file: String,

    /// Declared framework version.
    pub version: String,

    /// Emit source maps alongside compiled CSS.
    pub source_map: bool,
}

impl BuildConfig {
    /// Create a configuration with the default layout.
    ///
    /// A relative `root` is made absolute against the current directory, so
    /// paths stay valid for child processes that run inside the root.
    pub fn new(root: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self {
            root,
            src_dir: PathBuf::from("scss"),
            dist_dir: PathBuf::from("dist"),
            main_file: "creo.scss".to_string(),
            lean_file: "creo.lean.scss".to_string(),
            version: version.into(),
            source_map: true,
        }
    }

    /// Create a configuration whose version comes from a manifest.
    ///
    /// `manifest` is resolved against `root` when relative.
    pub fn from_manifest(root: impl Into<PathBuf>, manifest: impl AsRef<Path>) -> Result<Self> {
        let root = root.into();
        let manifest = PackageManifest::load(root.join(manifest.as_ref()))?;
        tracing::debug!(
            "Loaded manifest for {} v{}",
            manifest.name.as_deref().unwrap_or("<unnamed>"),
            manifest.version
        );
        Ok(Self::new(root, manifest.version))
    }

    /// Use a different source directory.
    pub fn with_src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.src_dir = dir.into();
        self
    }

    /// Use a different output directory.
    pub fn with_dist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dir.into();
        self
    }

    /// Override the declared version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable source maps.
    pub fn with_source_map(mut self, enabled: bool) -> Self {
        self.source_map = enabled;
        self
    }

    /// Absolute (root-joined) source directory.
    pub fn src_path(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    /// Absolute (root-joined) output directory.
    pub fn dist_path(&self) -> PathBuf {
        self.root.join(&self.dist_dir)
    }

    /// Path to the main entry file.
    pub fn main_path(&self) -> PathBuf {
        self.src_path().join(&self.main_file)
    }

    /// Path to the lean entry file.
    pub fn lean_path(&self) -> PathBuf {
        self.src_path().join(&self.lean_file)
    }
}
