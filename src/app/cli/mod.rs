//! CLI Adapter.

mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, ModuleSummary, VendorOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cuevendor")]
#[command(version)]
#[command(
    about = "Vendor the bundled dagger CUE packages into cue.mod/pkg/",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the bundled modules into the project's cue.mod/pkg/
    #[clap(visible_alias = "v")]
    Vendor {
        /// Project root (defaults to the nearest ancestor containing cue.mod/)
        #[arg(env = "CUEVENDOR_PROJECT")]
        path: Option<PathBuf>,
    },
    /// List the bundled modules
    #[clap(visible_alias = "m")]
    Modules {
        /// Show a single module
        name: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the project root resolved from the current directory
    Root,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Vendor { path } => run_vendor(path),
        Commands::Modules { name, json } => run_modules(name, json),
        Commands::Root => api::project_root().map(|root| println!("{}", root.display())),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_vendor(path: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = api::vendor_with(VendorOptions { project_root: path })?;

    let names: Vec<String> = outcome.installed.iter().map(|m| m.to_string()).collect();
    println!(
        "✅ Vendored {} ({} files) into {}",
        names.join(", "),
        outcome.files_extracted,
        outcome.package_dir.display()
    );
    Ok(())
}

fn run_modules(name: Option<String>, json: bool) -> Result<(), AppError> {
    let summaries = match name {
        Some(name) => vec![api::module(&name)?],
        None => api::modules()?,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&summaries).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize module list: {}", e))
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    for summary in &summaries {
        print_summary(summary);
    }
    Ok(())
}

fn print_summary(summary: &ModuleSummary) {
    println!(
        "{:<20} {:>4} files {:>8} bytes  sha256:{}",
        summary.name,
        summary.files,
        summary.bytes,
        &summary.digest[..12]
    );
}
