//! # StudyMind ingest CLI (`studymind`)
//!
//! ```bash
//! # Parse ../data/notion_export into ../data/processed/documents.json
//! studymind ingest
//!
//! # Explicit paths
//! studymind ingest --input ./export --output ./out/documents.json
//!
//! # Summarize an existing corpus
//! studymind stats --output ./out/documents.json
//! ```
//!
//! Set `RUST_LOG=studymind_ingest=debug` for per-document diagnostics.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use studymind_ingest::{config, ingest, progress::ProgressMode, stats};

/// Normalize a Notion markdown export into a JSON document corpus.
#[derive(Parser)]
#[command(name = "studymind", version, about)]
struct Cli {
    /// Path to configuration file (TOML). Defaults are used if it does not exist.
    #[arg(long, global = true, default_value = "./config/studymind.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every markdown file under the input root and write the corpus.
    ///
    /// The output file is fully rewritten on every run; document ids are
    /// regenerated even for unchanged files.
    Ingest {
        /// Export root to scan (overrides `ingest.input_dir`).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Corpus file to write (overrides `ingest.output_path`).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Progress output on stderr: `auto`, `human`, `json`, or `off`.
        #[arg(long, default_value = "auto")]
        progress: String,
    },

    /// Print statistics for an existing corpus file.
    Stats {
        /// Corpus file to read (overrides `ingest.output_path`).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studymind_ingest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config_or_default(&cli.config)?;

    match cli.command {
        Commands::Ingest {
            input,
            output,
            progress,
        } => {
            let cfg = cfg.with_overrides(input, output);
            cfg.validate()?;
            let reporter = ProgressMode::from_flag(&progress)?.reporter();

            let summary = ingest::run_ingest(&cfg, reporter.as_ref())?;
            summary.print();
        }
        Commands::Stats { output } => {
            let cfg = cfg.with_overrides(None, output);
            stats::run_stats(&cfg.ingest.output_path)?;
        }
    }

    Ok(())
}
