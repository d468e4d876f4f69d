//! Build pipeline for the Creo CSS framework.
//!
//! This crate provides:
//! - Build configuration loaded once from the package manifest
//! - Sass compiler invocation and toolchain detection
//! - Lean entry synthesis
//! - The variant pipeline (expanded, compressed, lean)
//! - `BUILD_INFO.txt` report generation and output summaries

pub mod compile;
pub mod config;
pub mod error;
pub mod lean;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod size;
pub mod summary;
pub mod variant;

pub use compile::{CompileOptions, CompileResult, OutputStyle, SassCompiler, SassToolchain, StyleCompiler};
pub use config::{BuildConfig, PackageManifest};
pub use error::{Error, Result};
pub use pipeline::{BuildCallback, BuildPipeline, SilentCallback};
pub use report::BuildInfo;
pub use size::{file_size, format_size};
pub use summary::{SummaryEntry, collect_summary};
pub use variant::Variant;
