//! `BUILD_INFO.txt` generation.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::size::file_size;
use crate::variant::Variant;

/// Report filename inside the dist directory.
pub const BUILD_INFO_FILE: &str = "BUILD_INFO.txt";

/// Contents of the build report.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    /// Builder name and version.
    pub builder: String,
    /// Compiler name and version, if known.
    pub compiler: Option<String>,
    pub platform: String,
    /// `(filename, size label)` for every variant, in build order.
    pub sizes: Vec<(String, String)>,
}

impl BuildInfo {
    /// Gather report data from the dist directory.
    ///
    /// Sizes that cannot be read are reported as `"Unknown"`.
    pub fn collect(config: &BuildConfig, builder: impl Into<String>, compiler: Option<String>) -> Self {
        let dist = config.dist_path();
        let sizes = Variant::ALL
            .iter()
            .map(|v| (v.file_name().to_string(), file_size(dist.join(v.file_name()))))
            .collect();

        Self {
            generated_at: Utc::now(),
            version: config.version.clone(),
            builder: builder.into(),
            compiler,
            platform: std::env::consts::OS.to_string(),
            sizes,
        }
    }

    /// Render the report text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Creo CSS Framework Build Information\n");
        out.push_str("====================================\n\n");
        let _ = writeln!(
            out,
            "Build Date: {}",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        let _ = writeln!(out, "Version: {}", self.version);
        let _ = writeln!(out, "Builder Version: {}", self.builder);
        let _ = writeln!(out, "Compiler: {}", self.compiler.as_deref().unwrap_or("Unknown"));
        let _ = writeln!(out, "Platform: {}", self.platform);

        out.push_str("\nFiles Generated:\n================\n\n");
        for variant in Variant::ALL {
            let _ = writeln!(out, "{:<17} - {}", variant.file_name(), variant.description());
        }

        out.push_str("\nFile Sizes:\n===========\n\n");
        for (name, size) in &self.sizes {
            let _ = writeln!(out, "{:<20} - {}", name, size);
        }

        out.push_str(MODULE_INVENTORY);
        out
    }

    /// Write the report into the dist directory.
    pub fn write(&self, config: &BuildConfig) -> Result<PathBuf> {
        let path = config.dist_path().join(BUILD_INFO_FILE);
        fs::write(&path, self.render()).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }
}

const MODULE_INVENTORY: &str = "
Framework Modules Included:
===========================

Full Build:
- Core: Reset, Tokens, Typography
- Layout: Containers, Grid, Sections
- Utilities: Spacing, Text, Responsive
- Themes: Dark Mode
- Components: Available as separate imports

Lean Build:
- Core: Reset, Tokens, Typography
- Layout: Containers, Sections
- Themes: Dark Mode
- Total reduction: ~60% smaller than full build

Usage:
======

HTML:
<link rel=\"stylesheet\" href=\"creo.min.css\">

Sass:
@use '@creo-framework/creo';

NPM:
npm install @creo-framework/creo

For more information: https://creo-framework.dev
";
