//! The named CSS outputs produced by a build.

use std::fmt;

use crate::compile::OutputStyle;

/// One output flavor of the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Full framework, readable.
    Expanded,
    /// Full framework, minified.
    Compressed,
    /// Lean module subset, readable.
    LeanExpanded,
    /// Lean module subset, minified.
    LeanCompressed,
}

impl Variant {
    /// All variants in build order.
    pub const ALL: [Variant; 4] = [
        Variant::Expanded,
        Variant::Compressed,
        Variant::LeanExpanded,
        Variant::LeanCompressed,
    ];

    /// Output filename inside the dist directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Variant::Expanded => "creo.css",
            Variant::Compressed => "creo.min.css",
            Variant::LeanExpanded => "creo.lean.css",
            Variant::LeanCompressed => "creo.lean.min.css",
        }
    }

    /// Compiler output style.
    pub fn style(self) -> OutputStyle {
        match self {
            Variant::Expanded | Variant::LeanExpanded => OutputStyle::Expanded,
            Variant::Compressed | Variant::LeanCompressed => OutputStyle::Compressed,
        }
    }

    /// Whether the variant compiles the lean entry.
    pub fn is_lean(self) -> bool {
        matches!(self, Variant::LeanExpanded | Variant::LeanCompressed)
    }

    /// Description used in the build report.
    pub fn description(self) -> &'static str {
        match self {
            Variant::Expanded => "Full framework (expanded)",
            Variant::Compressed => "Full framework (compressed)",
            Variant::LeanExpanded => "Lean build (expanded)",
            Variant::LeanCompressed => "Lean build (compressed)",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
