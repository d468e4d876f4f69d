//! Creo CLI - build tool for the Creo CSS framework.

mod colors;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use creo_build_core::{BuildConfig, collect_summary};

use commands::{Command, CompilerSettings, Task};

#[derive(Parser)]
#[command(name = "creo-build")]
#[command(about = "Build the Creo CSS framework with Sass")]
#[command(version)]
struct Cli {
    /// Command to run: all, expanded, compressed, lean, clean, watch, help
    command: Option<String>,

    /// Project root containing the manifest and sources
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Sass source directory, relative to the root
    #[arg(long, default_value = "scss")]
    src_dir: PathBuf,

    /// Output directory, relative to the root
    #[arg(long, default_value = "dist")]
    dist_dir: PathBuf,

    /// Package manifest to read the framework version from
    #[arg(long, default_value = creo_build_core::config::DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Use this framework version instead of the manifest's
    #[arg(long)]
    framework_version: Option<String>,

    /// Sass compiler program or path
    #[arg(long, default_value = "sass")]
    sass: String,

    /// Do not emit source maps
    #[arg(long)]
    no_source_map: bool,

    /// Do not try to install sass with npm when it is missing
    #[arg(long)]
    no_install: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the configuration shared by every stage.
    fn build_config(&self) -> anyhow::Result<BuildConfig> {
        let config = match &self.framework_version {
            Some(version) => BuildConfig::new(&self.root, version.clone()),
            None => BuildConfig::from_manifest(&self.root, &self.manifest)
                .context("Could not determine framework version")?,
        };

        Ok(config
            .with_src_dir(&self.src_dir)
            .with_dist_dir(&self.dist_dir)
            .with_source_map(!self.no_source_map))
    }
}

/// Signal that ended the run early.
enum Shutdown {
    Interrupt,
    Terminate,
}

/// Wait for Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() -> Shutdown {
    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => Shutdown::Interrupt,
        _ = terminate => Shutdown::Terminate,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("Build failed: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let command = match cli.command.as_deref().unwrap_or("").parse::<Command>() {
        Ok(command) => command,
        Err(unknown) => {
            output::error(&format!("Unknown command: {}", unknown));
            output::info("Use 'creo-build help' for available commands");
            return Ok(ExitCode::FAILURE);
        }
    };

    let task = match command {
        Command::Help => {
            output::print_help();
            return Ok(ExitCode::SUCCESS);
        }
        Command::Task(task) => task,
    };

    let config = cli.build_config()?;
    output::print_banner(&config.version);

    let settings = CompilerSettings {
        program: cli.sass.clone(),
        allow_install: !cli.no_install,
    };

    let watching = task == Task::Watch;
    let handle = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || commands::execute(task, &config, &settings))
    };

    let outcome = tokio::select! {
        joined = handle => joined.context("Build task panicked")??,
        signal = shutdown_signal() => {
            match signal {
                Shutdown::Interrupt if watching => {
                    println!();
                    output::info("Watch mode stopped");
                }
                Shutdown::Interrupt => {
                    println!();
                    output::info("Build interrupted by user");
                }
                Shutdown::Terminate => output::info("Build terminated"),
            }
            // The blocking task cannot be cancelled; leave partial output as is.
            std::process::exit(0);
        }
    };

    if let Some(report) = outcome.report {
        tracing::debug!("Report written to {}", report.display());
        let summary = collect_summary(config.dist_path()).await;
        if let Err(e) = &summary {
            tracing::warn!("Could not summarize output: {}", e);
        }
        output::print_summary(
            summary.as_deref().ok(),
            &config.dist_dir.display().to_string(),
        );
    }

    Ok(ExitCode::SUCCESS)
}
