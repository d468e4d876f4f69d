//! The `sass` command-line compiler.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::size::file_size;
use crate::variant::Variant;

use super::toolchain::SassToolchain;
use super::types::{CompileOptions, CompileResult, OutputStyle, StyleCompiler};

/// Invokes an external `sass` executable, one process per output.
#[derive(Debug, Clone)]
pub struct SassCompiler {
    program: PathBuf,
    version: Option<String>,
}

impl SassCompiler {
    /// Create a compiler from a detected toolchain.
    pub fn new(toolchain: &SassToolchain) -> Self {
        Self {
            program: toolchain.program().to_path_buf(),
            version: toolchain.version().map(str::to_string),
        }
    }

    /// Arguments for compiling `input` into `output`.
    ///
    /// Paths are relative to the project root, which is also the working
    /// directory of the process.
    pub fn compile_args(
        config: &BuildConfig,
        input: &str,
        output: &str,
        options: CompileOptions,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            config.src_dir.join(input).into_os_string(),
            config.dist_dir.join(output).into_os_string(),
            format!("--style={}", options.style).into(),
        ];
        if options.source_map {
            args.push("--source-map".into());
            args.push("--embed-sources".into());
        } else {
            args.push("--no-source-map".into());
        }
        args
    }

    /// Arguments for watch mode: main entry into the expanded bundle.
    pub fn watch_args(config: &BuildConfig) -> Vec<OsString> {
        let mut mapping = config.src_dir.join(&config.main_file).into_os_string();
        mapping.push(":");
        mapping.push(config.dist_dir.join(Variant::Expanded.file_name()));

        vec![
            "--watch".into(),
            mapping,
            format!("--style={}", OutputStyle::Expanded).into(),
            if config.source_map {
                "--source-map".into()
            } else {
                "--no-source-map".into()
            },
        ]
    }

    /// Run `sass --watch` in the foreground until it exits.
    ///
    /// Ctrl+C reaches the child too; a child stopped by SIGINT counts as a
    /// clean stop.
    pub fn watch(&self, config: &BuildConfig) -> Result<()> {
        let args = Self::watch_args(config);
        tracing::debug!("Running {} {:?}", self.program.display(), args);

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&config.root)
            .status()
            .map_err(|e| Error::Watch(format!("failed to run {}: {}", self.program.display(), e)))?;

        if !status.success() && !interrupted(&status) {
            return Err(Error::Watch(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )));
        }
        Ok(())
    }
}

#[cfg(unix)]
fn interrupted(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;

    const SIGINT: i32 = 2;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn interrupted(_status: &ExitStatus) -> bool {
    false
}

impl StyleCompiler for SassCompiler {
    fn compile(
        &self,
        config: &BuildConfig,
        input: &str,
        output: &str,
        options: CompileOptions,
    ) -> CompileResult {
        let args = Self::compile_args(config, input, output, options);
        tracing::debug!("Running {} {:?}", self.program.display(), args);

        let status = match Command::new(&self.program)
            .args(&args)
            .current_dir(&config.root)
            .status()
        {
            Ok(status) => status,
            Err(e) => {
                return CompileResult::Failed {
                    message: format!("failed to run {}: {}", self.program.display(), e),
                };
            }
        };

        if !status.success() {
            return CompileResult::Failed {
                message: format!(
                    "{} {} exited with {}",
                    self.program.display(),
                    input,
                    status
                ),
            };
        }

        CompileResult::Success {
            size: file_size(config.dist_path().join(output)),
        }
    }

    fn describe(&self) -> Option<String> {
        self.version.as_ref().map(|v| format!("Dart Sass {}", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_compile_args_with_source_map() {
        let config = BuildConfig::new("/project", "1.0.0");
        let args = SassCompiler::compile_args(
            &config,
            "creo.scss",
            "creo.css",
            CompileOptions::new(OutputStyle::Expanded),
        );

        assert_eq!(
            strings(args),
            [
                "scss/creo.scss",
                "dist/creo.css",
                "--style=expanded",
                "--source-map",
                "--embed-sources"
            ]
        );
    }

    #[test]
    fn test_compile_args_without_source_map() {
        let config = BuildConfig::new("/project", "1.0.0");
        let args = SassCompiler::compile_args(
            &config,
            "creo.lean.scss",
            "creo.lean.min.css",
            CompileOptions::new(OutputStyle::Compressed).with_source_map(false),
        );

        assert_eq!(
            strings(args),
            [
                "scss/creo.lean.scss",
                "dist/creo.lean.min.css",
                "--style=compressed",
                "--no-source-map"
            ]
        );
    }

    #[test]
    fn test_watch_args() {
        let config = BuildConfig::new("/project", "1.0.0");
        assert_eq!(
            strings(SassCompiler::watch_args(&config)),
            [
                "--watch",
                "scss/creo.scss:dist/creo.css",
                "--style=expanded",
                "--source-map"
            ]
        );
    }

    #[test]
    fn test_missing_program_fails() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");
        let compiler = SassCompiler {
            program: temp.path().join("no-such-sass"),
            version: None,
        };

        let result = compiler.compile(
            &config,
            "creo.scss",
            "creo.css",
            CompileOptions::new(OutputStyle::Expanded),
        );
        assert!(!result.is_success());
        assert!(result.error().unwrap().contains("no-such-sass"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_fails() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");
        let compiler = SassCompiler {
            program: PathBuf::from("false"),
            version: None,
        };

        let result = compiler.compile(
            &config,
            "creo.scss",
            "creo.css",
            CompileOptions::new(OutputStyle::Expanded),
        );
        assert!(result.error().unwrap().contains("exited with"));
    }

    #[cfg(unix)]
    fn script_compiler(dir: &std::path::Path, body: &str) -> SassCompiler {
        use std::os::unix::fs::PermissionsExt;

        let program = dir.join("watch-sass");
        std::fs::write(&program, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
        SassCompiler {
            program,
            version: None,
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_watch_stopped_by_sigint_is_clean() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");
        let compiler = script_compiler(temp.path(), "kill -INT $$");

        compiler.watch(&config).expect("SIGINT should end watch mode cleanly");
    }

    #[cfg(unix)]
    #[test]
    fn test_watch_failure_is_error() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");
        let compiler = script_compiler(temp.path(), "exit 64");

        let err = compiler.watch(&config).unwrap_err();
        assert!(matches!(err, Error::Watch(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_without_output_is_unknown_size() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config = BuildConfig::new(temp.path(), "1.0.0");
        let compiler = SassCompiler {
            program: PathBuf::from("true"),
            version: None,
        };

        let result = compiler.compile(
            &config,
            "creo.scss",
            "creo.css",
            CompileOptions::new(OutputStyle::Expanded),
        );
        assert_eq!(result.size(), Some("Unknown"));
    }
}
