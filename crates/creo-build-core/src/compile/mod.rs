//! Sass compilation for Creo builds.
//!
//! This module provides:
//! - Toolchain detection (locating `sass`, one-shot npm install)
//! - The compiler invoker (one synchronous `sass` process per output)
//! - Watch mode passthrough
//!
//! # Architecture
//!
//! ```text
//! SassToolchain::ensure ──► SassCompiler ──► StyleCompiler::compile ──► CompileResult
//!                                │
//!                                └──► watch (foreground `sass --watch`)
//! ```

mod sass;
mod toolchain;
mod types;

pub use sass::SassCompiler;
pub use toolchain::SassToolchain;
pub use types::{CompileOptions, CompileResult, OutputStyle, StyleCompiler};
