//! Operator-facing output for the Creo CLI.
//!
//! Every status line is prefixed with a colored `[Creo]` tag. Errors go to
//! stderr, everything else to stdout.

use creo_build_core::{BuildCallback, SummaryEntry};

use crate::colors;

/// Print an informational line.
pub fn info(message: &str) {
    println!("{}[Creo]{} {}", colors::BLUE, colors::RESET, message);
    colors::flush_stdout();
}

/// Print a success line.
pub fn success(message: &str) {
    println!("{}[Creo]{} ✅ {}", colors::GREEN, colors::RESET, message);
    colors::flush_stdout();
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("{}[Creo]{} ⚠️  {}", colors::YELLOW, colors::RESET, message);
    colors::flush_stdout();
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("{}[Creo]{} ❌ {}", colors::RED, colors::RESET, message);
}

/// Pipeline progress rendered as `[Creo]` lines.
pub struct ProgressCallback;

impl BuildCallback for ProgressCallback {
    fn on_stage_started(&self, message: &str) {
        info(message);
    }

    fn on_stage_succeeded(&self, message: &str) {
        success(message);
    }

    fn on_stage_failed(&self, message: &str) {
        error(message);
    }

    fn on_warning(&self, message: &str) {
        warning(message);
    }
}

const BOX_WIDTH: usize = 64;

fn boxed_line(text: &str) -> String {
    format!("║{:^width$}║", text, width = BOX_WIDTH)
}

/// Print the startup banner.
pub fn print_banner(version: &str) {
    println!("{}", colors::BLUE);
    println!("╔{}╗", "═".repeat(BOX_WIDTH));
    println!("{}", boxed_line("Creo CSS Framework Builder"));
    println!("{}", boxed_line(&format!("v{}", version)));
    println!("╚{}╝", "═".repeat(BOX_WIDTH));
    println!("{}", colors::RESET);
}

/// Print the command list.
pub fn print_help() {
    println!("Creo CSS Framework Build Script");
    println!();
    println!("Usage: creo-build [OPTIONS] [COMMAND]");
    println!();
    println!("Commands:");
    println!("  all         Build all variants (default)");
    println!("  expanded    Build expanded CSS only");
    println!("  compressed  Build compressed CSS only");
    println!("  lean        Build lean variants only");
    println!("  clean       Clean dist directory");
    println!("  watch       Watch for changes and rebuild");
    println!("  help        Show this help message");
    println!();
    println!("Run 'creo-build --help' for the list of options.");
    println!();
}

/// Print the post-build summary.
pub fn print_summary(entries: Option<&[SummaryEntry]>, dist_dir: &str) {
    println!();
    println!("{}╔{}╗{}", colors::BLUE, "═".repeat(BOX_WIDTH), colors::RESET);
    println!("{}{}{}", colors::BLUE, boxed_line("Build Complete!"), colors::RESET);
    println!("{}╚{}╝{}", colors::BLUE, "═".repeat(BOX_WIDTH), colors::RESET);
    println!();

    println!("{}📦 Generated files:{}", colors::BOLD, colors::RESET);
    match entries {
        Some(entries) => {
            for entry in entries {
                println!("   {:<20} - {}", entry.name, entry.size);
            }
        }
        None => error("Failed to read dist directory"),
    }

    println!();
    println!("💡 Quick start:");
    println!("   <link rel=\"stylesheet\" href=\"{}/creo.min.css\">", dist_dir);
    println!();
    println!("🔍 Build details in: {}/BUILD_INFO.txt", dist_dir);
    println!();
}
