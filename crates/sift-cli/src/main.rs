use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sift_core::AnalyzerRegistry;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Normalize source code into a language-agnostic IR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze source files and print each unit's IR as JSON
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List registered language extensions
    Languages,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { files, pretty } => analyze(&files, pretty),
        Commands::Languages => {
            let registry = AnalyzerRegistry::new();
            let mut extensions = registry.extensions();
            extensions.sort_unstable();
            for extension in extensions {
                println!(".{extension}");
            }
            Ok(())
        }
    }
}

/// Analyzes each file independently; a failing file is reported and skipped
/// so the rest of the batch still completes.
fn analyze(files: &[PathBuf], pretty: bool) -> Result<()> {
    let registry = AnalyzerRegistry::new();
    let mut failures = 0usize;

    for path in files {
        let Some(analyzer) = registry.resolve(path) else {
            warn!(path = %path.display(), "no analyzer registered for this extension");
            failures += 1;
            continue;
        };
        match analyzer.parse_file(path) {
            Ok(unit) => {
                let json = if pretty {
                    serde_json::to_string_pretty(&unit)
                } else {
                    serde_json::to_string(&unit)
                }
                .with_context(|| format!("serializing IR for {}", path.display()))?;
                println!("{json}");
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "analysis failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) failed to analyze", files.len());
    }
    Ok(())
}
