//! Lean entry synthesis.
//!
//! The lean bundle compiles a curated subset of the framework's modules. Its
//! entry file is generated from a fixed template the first time it is
//! needed and never touched again afterwards.

use std::fs;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::paths::ensure_dir;
use crate::pipeline::BuildCallback;

/// Modules included in the lean bundle, in `@use` order.
pub const LEAN_MODULES: &[&str] = &[
    "core/tokens",
    "core/reset",
    "core/typography",
    "layout/containers",
    "layout/sections",
    "themes/dark",
];

/// Render the lean entry for `version`.
pub fn lean_source(version: &str) -> String {
    let uses = |prefix: &str| -> String {
        LEAN_MODULES
            .iter()
            .filter(|m| m.starts_with(prefix))
            .map(|m| format!("@use '{}';\n", m))
            .collect()
    };

    format!(
        r#"// =============================================================================
// Creo CSS Framework - Lean Build
// =============================================================================
// Minimal build for maximum performance

// Core essentials only
{core}
// Essential layout
{layout}
// Dark theme (lightweight)
{themes}
// Framework metadata
:root {{
  --creo-version: "{version}-lean";
  --creo-framework: "Creo CSS Lean";
}}
"#,
        core = uses("core/"),
        layout = uses("layout/"),
        themes = uses("themes/"),
        version = version,
    )
}

/// Write the lean entry if it does not exist yet.
///
/// An existing file is left alone whatever it contains. Returns whether the
/// file was written.
pub fn ensure_lean_source(config: &BuildConfig, callback: &dyn BuildCallback) -> Result<bool> {
    let path = config.lean_path();
    if path.exists() {
        tracing::debug!("Lean entry {} already present", path.display());
        return Ok(false);
    }

    callback.on_warning("Creating lean build file...");
    ensure_dir(config.src_path())?;
    fs::write(&path, lean_source(&config.version)).map_err(|e| Error::io(&path, e))?;
    callback.on_stage_succeeded("Created lean build file");

    Ok(true)
}
