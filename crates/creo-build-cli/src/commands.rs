//! Command dispatch for the Creo CLI.
//!
//! Each command runs synchronously on a blocking thread; `main` races it
//! against interrupt signals.

use std::path::PathBuf;
use std::str::FromStr;

use creo_build_core::paths::ensure_dir;
use creo_build_core::pipeline::clean_output;
use creo_build_core::{
    BuildCallback, BuildConfig, BuildPipeline, Result, SassCompiler, SassToolchain,
};

use crate::output::{self, ProgressCallback};

/// A parsed command line command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the command list.
    Help,
    /// Work on the project.
    Task(Task),
}

/// Work that needs a project configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Clean,
    Watch,
    Build(Target),
}

/// Which variants a build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Clean, every variant, then the report.
    All,
    Expanded,
    Compressed,
    Lean,
}

impl FromStr for Command {
    type Err = String;

    /// Parse a command name. An empty string means `all`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let task = match s {
            "help" => return Ok(Command::Help),
            "" | "all" => Task::Build(Target::All),
            "expanded" => Task::Build(Target::Expanded),
            "compressed" => Task::Build(Target::Compressed),
            "lean" => Task::Build(Target::Lean),
            "clean" => Task::Clean,
            "watch" => Task::Watch,
            other => return Err(other.to_string()),
        };
        Ok(Command::Task(task))
    }
}

/// How to find the compiler.
#[derive(Debug, Clone)]
pub struct CompilerSettings {
    /// Program name or path.
    pub program: String,
    /// Run `npm install sass` once if the program is missing.
    pub allow_install: bool,
}

impl CompilerSettings {
    fn locate(&self, config: &BuildConfig, callback: &dyn BuildCallback) -> Result<SassCompiler> {
        let toolchain = SassToolchain::ensure(config, &self.program, self.allow_install, callback)?;
        Ok(SassCompiler::new(&toolchain))
    }
}

/// What a finished task produced.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Report written by a full build.
    pub report: Option<PathBuf>,
}

/// Run `task` to completion.
pub fn execute(task: Task, config: &BuildConfig, settings: &CompilerSettings) -> Result<Outcome> {
    let callback = ProgressCallback;
    let mut outcome = Outcome::default();

    match task {
        Task::Clean => clean_output(config, &callback)?,
        Task::Watch => {
            let compiler = settings.locate(config, &callback)?;
            ensure_dir(config.dist_path())?;
            output::info("Starting watch mode...");
            output::warning("Press Ctrl+C to stop watching");
            compiler.watch(config)?;
            output::info("Watch mode stopped");
        }
        Task::Build(target) => {
            let compiler = settings.locate(config, &callback)?;
            let pipeline = BuildPipeline::new(config, &compiler, &callback);
            match target {
                Target::All => outcome.report = Some(pipeline.build_all()?),
                Target::Expanded => {
                    pipeline.prepare()?;
                    pipeline.build_expanded()?;
                }
                Target::Compressed => {
                    pipeline.prepare()?;
                    pipeline.build_compressed()?;
                }
                Target::Lean => {
                    pipeline.prepare()?;
                    pipeline.build_lean()?;
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("".parse::<Command>(), Ok(Command::Task(Task::Build(Target::All))));
        assert_eq!("all".parse::<Command>(), Ok(Command::Task(Task::Build(Target::All))));
        assert_eq!("lean".parse::<Command>(), Ok(Command::Task(Task::Build(Target::Lean))));
        assert_eq!("clean".parse::<Command>(), Ok(Command::Task(Task::Clean)));
        assert_eq!("watch".parse::<Command>(), Ok(Command::Task(Task::Watch)));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!("deploy".parse::<Command>(), Err("deploy".to_string()));
        assert_eq!("ALL".parse::<Command>(), Err("ALL".to_string()));
    }
}
