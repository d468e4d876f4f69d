//! The build-variant pipeline.
//!
//! Stages run strictly in order, and the first failure aborts the run:
//!
//! ```text
//! ensure dist ─► clean ─► expanded ─► compressed ─► lean (expanded + compressed) ─► BUILD_INFO.txt
//! ```

use std::path::PathBuf;

use crate::compile::{CompileOptions, CompileResult, StyleCompiler};
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::lean::ensure_lean_source;
use crate::paths::{clean_dir, ensure_dir, output_exists};
use crate::report::BuildInfo;
use crate::variant::Variant;

/// Receives progress from the pipeline.
pub trait BuildCallback {
    /// A stage is starting.
    fn on_stage_started(&self, message: &str);

    /// A stage finished successfully.
    fn on_stage_succeeded(&self, message: &str);

    /// A stage failed; the error is returned to the caller as well.
    fn on_stage_failed(&self, message: &str);

    /// Something noteworthy that is not a failure.
    fn on_warning(&self, _message: &str) {}
}

/// Callback that ignores all progress.
pub struct SilentCallback;

impl BuildCallback for SilentCallback {
    fn on_stage_started(&self, _message: &str) {}
    fn on_stage_succeeded(&self, _message: &str) {}
    fn on_stage_failed(&self, _message: &str) {}
}

/// Remove and recreate the output directory, reporting progress.
///
/// Cleaning never touches the compiler, so it is available without a
/// [`BuildPipeline`].
pub fn clean_output(config: &BuildConfig, callback: &dyn BuildCallback) -> Result<()> {
    callback.on_stage_started("Cleaning dist directory...");
    if let Err(e) = clean_dir(config.dist_path()) {
        callback.on_stage_failed(&format!("Failed to clean dist directory: {}", e));
        return Err(e);
    }
    callback.on_stage_succeeded("Cleaned dist directory");
    Ok(())
}

/// Runs build stages against one configuration and compiler.
pub struct BuildPipeline<'a, C: StyleCompiler> {
    config: &'a BuildConfig,
    compiler: &'a C,
    callback: &'a dyn BuildCallback,
    /// Builder description written into the report.
    builder: String,
}

impl<'a, C: StyleCompiler> BuildPipeline<'a, C> {
    /// Create a pipeline.
    pub fn new(config: &'a BuildConfig, compiler: &'a C, callback: &'a dyn BuildCallback) -> Self {
        Self {
            config,
            compiler,
            callback,
            builder: format!("creo-build {}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the builder description used in the report.
    pub fn with_builder(mut self, builder: impl Into<String>) -> Self {
        self.builder = builder.into();
        self
    }

    /// Make sure the output directory exists.
    pub fn prepare(&self) -> Result<()> {
        ensure_dir(self.config.dist_path())
    }

    /// Remove and recreate the output directory.
    pub fn clean(&self) -> Result<()> {
        clean_output(self.config, self.callback)
    }

    /// Build `creo.css`.
    pub fn build_expanded(&self) -> Result<()> {
        self.build_single(Variant::Expanded, "expanded CSS")
    }

    /// Build `creo.min.css`.
    pub fn build_compressed(&self) -> Result<()> {
        self.build_single(Variant::Compressed, "compressed CSS")
    }

    /// Build both lean variants, synthesizing the lean entry first.
    ///
    /// Both compilations are attempted even if the first one fails; the
    /// error joins every failure message.
    pub fn build_lean(&self) -> Result<()> {
        ensure_lean_source(self.config, self.callback)?;

        self.callback.on_stage_started("Building lean CSS...");
        let expanded = self.compile_variant(Variant::LeanExpanded);
        let compressed = self.compile_variant(Variant::LeanCompressed);

        match (&expanded, &compressed) {
            (CompileResult::Success { size: a }, CompileResult::Success { size: b }) => {
                self.callback
                    .on_stage_succeeded(&format!("Built lean builds ({} / {})", a, b));
                Ok(())
            }
            _ => {
                let message = [expanded.error(), compressed.error()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ");
                self.callback
                    .on_stage_failed(&format!("Failed to build lean CSS: {}", message));
                Err(Error::Compilation {
                    target: "lean CSS",
                    message,
                })
            }
        }
    }

    /// Write `BUILD_INFO.txt`.
    pub fn generate_report(&self) -> Result<PathBuf> {
        self.callback.on_stage_started("Generating build information...");
        let dist = self.config.dist_path();
        for variant in Variant::ALL {
            if !output_exists(dist.join(variant.file_name())) {
                tracing::warn!("{} missing from {}", variant, dist.display());
            }
        }
        let info = BuildInfo::collect(self.config, self.builder.clone(), self.compiler.describe());
        let path = info.write(self.config)?;
        self.callback.on_stage_succeeded("Generated build information");
        Ok(path)
    }

    /// Run the full pipeline. Returns the report path.
    pub fn build_all(&self) -> Result<PathBuf> {
        self.prepare()?;
        self.clean()?;
        self.build_expanded()?;
        self.build_compressed()?;
        self.build_lean()?;
        self.generate_report()
    }

    fn build_single(&self, variant: Variant, target: &'static str) -> Result<()> {
        self.callback
            .on_stage_started(&format!("Building {}...", target));

        match self.compile_variant(variant) {
            CompileResult::Success { size } => {
                self.callback
                    .on_stage_succeeded(&format!("Built {} ({})", variant.file_name(), size));
                Ok(())
            }
            CompileResult::Failed { message } => {
                self.callback
                    .on_stage_failed(&format!("Failed to build {}: {}", target, message));
                Err(Error::Compilation { target, message })
            }
        }
    }

    fn compile_variant(&self, variant: Variant) -> CompileResult {
        let input = if variant.is_lean() {
            &self.config.lean_file
        } else {
            &self.config.main_file
        };
        let options = CompileOptions::new(variant.style()).with_source_map(self.config.source_map);

        tracing::debug!("Compiling {} -> {} ({})", input, variant, options.style);
        self.compiler
            .compile(self.config, input, variant.file_name(), options)
    }
}
