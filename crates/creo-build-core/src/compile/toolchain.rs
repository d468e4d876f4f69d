//! Sass toolchain detection.
//!
//! Locates the `sass` executable and, when it is missing, performs a single
//! `npm install sass --save-dev` as the recovery action.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::pipeline::BuildCallback;

/// A located Sass compiler.
#[derive(Debug, Clone)]
pub struct SassToolchain {
    /// Path to the executable.
    program: PathBuf,

    /// Output of `sass --version`, if it could be read.
    version: Option<String>,
}

impl SassToolchain {
    /// Locate `program`.
    ///
    /// A program containing a path separator must name an existing file,
    /// resolved against the project root when relative. A bare name is looked
    /// up on `PATH` and then in `<root>/node_modules/.bin`.
    pub fn detect(config: &BuildConfig, program: &str) -> Result<Self> {
        let program = Self::find_program(config, program)?;
        let version = Self::read_version(&program);
        tracing::info!(
            "Using sass at {} ({})",
            program.display(),
            version.as_deref().unwrap_or("unknown version")
        );
        Ok(Self { program, version })
    }

    /// Install sass into the project with npm.
    ///
    /// This is the only recovery step for a missing compiler. It runs once
    /// and reports the outcome; callers decide whether to detect again.
    pub fn install(config: &BuildConfig) -> Result<()> {
        let npm = which::which("npm").map_err(|_| Error::Install("npm not found in PATH".to_string()))?;

        tracing::info!("Installing sass with {}", npm.display());

        let status = Command::new(&npm)
            .args(["install", "sass", "--save-dev"])
            .current_dir(&config.root)
            .status()
            .map_err(|e| Error::Install(format!("failed to run npm: {}", e)))?;

        if !status.success() {
            return Err(Error::Install(format!("npm exited with {}", status)));
        }

        Ok(())
    }

    /// Locate `program`, installing it once if it is missing and
    /// `allow_install` is set.
    pub fn ensure(
        config: &BuildConfig,
        program: &str,
        allow_install: bool,
        callback: &dyn BuildCallback,
    ) -> Result<Self> {
        let err = match Self::detect(config, program) {
            Ok(toolchain) => return Ok(toolchain),
            Err(e @ Error::DependencyMissing(_)) => e,
            Err(e) => return Err(e),
        };

        callback.on_stage_failed("Sass compiler not found!");
        if !allow_install {
            return Err(err);
        }

        callback.on_stage_started("Installing sass...");
        if let Err(e) = Self::install(config) {
            callback.on_stage_failed("Failed to install sass");
            return Err(e);
        }
        callback.on_stage_succeeded("Sass installed successfully");

        Self::detect(config, program)
    }

    /// Path to the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Reported compiler version.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn find_program(config: &BuildConfig, program: &str) -> Result<PathBuf> {
        let as_path = Path::new(program);
        if as_path.components().count() > 1 {
            let candidate = config.root.join(as_path);
            if candidate.is_file() {
                return Ok(candidate);
            }
            return Err(Error::DependencyMissing(format!(
                "{} does not exist",
                candidate.display()
            )));
        }

        if let Ok(found) = which::which(program) {
            return Ok(found);
        }

        let local = config.root.join("node_modules").join(".bin").join(Self::local_bin_name(program));
        if local.is_file() {
            return Ok(local);
        }

        Err(Error::DependencyMissing(format!(
            "{} not found in PATH or node_modules/.bin",
            program
        )))
    }

    #[cfg(windows)]
    fn local_bin_name(program: &str) -> String {
        format!("{}.cmd", program)
    }

    #[cfg(not(windows))]
    fn local_bin_name(program: &str) -> String {
        program.to_string()
    }

    fn read_version(program: &Path) -> Option<String> {
        let output = Command::new(program).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() { None } else { Some(version) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentCallback;
    use tempfile::TempDir;

    #[test]
    fn test_missing_explicit_path() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");

        let err = SassToolchain::detect(&config, "./tools/sass").unwrap_err();
        assert!(matches!(err, Error::DependencyMissing(_)));
    }

    #[test]
    fn test_missing_bare_name() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");

        let err = SassToolchain::detect(&config, "creo-no-such-sass-binary").unwrap_err();
        assert!(matches!(err, Error::DependencyMissing(_)));
    }

    #[test]
    fn test_ensure_without_install_fails() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");

        let result =
            SassToolchain::ensure(&config, "creo-no-such-sass-binary", false, &SilentCallback);
        assert!(matches!(result, Err(Error::DependencyMissing(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_detect_local_script() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp dir");
        let script = temp.path().join("fake-sass");
        fs::write(&script, "#!/bin/sh\necho 1.77.0\n").expect("Failed to write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");

        let config = BuildConfig::new(temp.path(), "1.0.0");
        let toolchain = SassToolchain::detect(&config, "./fake-sass").expect("Should detect");

        assert_eq!(toolchain.program(), temp.path().join("./fake-sass"));
        assert_eq!(toolchain.version(), Some("1.77.0"));
    }
}
