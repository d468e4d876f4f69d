//! Types for the compiler invoker.

use std::fmt;

use crate::config::BuildConfig;

/// Output formatting mode of the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// Readable output.
    Expanded,
    /// Minified output.
    Compressed,
}

impl OutputStyle {
    /// The value passed to `--style=`.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Expanded => "expanded",
            OutputStyle::Compressed => "compressed",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub style: OutputStyle,
    pub source_map: bool,
}

impl CompileOptions {
    /// Options for `style` with source maps enabled.
    pub fn new(style: OutputStyle) -> Self {
        Self {
            style,
            source_map: true,
        }
    }

    /// Set whether source maps are emitted.
    pub fn with_source_map(mut self, enabled: bool) -> Self {
        self.source_map = enabled;
        self
    }
}

/// Outcome of one compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileResult {
    /// The compiler exited successfully.
    Success {
        /// Human-readable size of the output, or `"Unknown"`.
        size: String,
    },
    /// The compiler could not be run or exited with an error.
    Failed {
        /// Raw error text.
        message: String,
    },
}

impl CompileResult {
    /// Whether the compilation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, CompileResult::Success { .. })
    }

    /// Size label of a successful compilation.
    pub fn size(&self) -> Option<&str> {
        match self {
            CompileResult::Success { size } => Some(size),
            CompileResult::Failed { .. } => None,
        }
    }

    /// Error message of a failed compilation.
    pub fn error(&self) -> Option<&str> {
        match self {
            CompileResult::Success { .. } => None,
            CompileResult::Failed { message } => Some(message),
        }
    }
}

/// Something that can turn a Sass entry into a CSS file.
///
/// `input` is relative to the configured source directory and `output` is
/// relative to the configured output directory. Implementations block until
/// the output is written or the attempt has failed.
pub trait StyleCompiler {
    /// Compile `input` into `output`.
    fn compile(
        &self,
        config: &BuildConfig,
        input: &str,
        output: &str,
        options: CompileOptions,
    ) -> CompileResult;

    /// Compiler name and version, if known.
    fn describe(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_accessors() {
        let ok = CompileResult::Success {
            size: "12.5 KB".to_string(),
        };
        assert!(ok.is_success());
        assert_eq!(ok.size(), Some("12.5 KB"));
        assert_eq!(ok.error(), None);

        let failed = CompileResult::Failed {
            message: "Error: expected \";\"".to_string(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.size(), None);
        assert_eq!(failed.error(), Some("Error: expected \";\""));
    }

    #[test]
    fn test_options_default_to_source_maps() {
        let options = CompileOptions::new(OutputStyle::Compressed);
        assert!(options.source_map);
        assert!(!options.with_source_map(false).source_map);
    }
}
