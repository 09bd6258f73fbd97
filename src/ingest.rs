//! Ingestion run orchestration.
//!
//! Coordinates the full run: discovery → per-file parsing → one corpus
//! write. Files are parsed sequentially in discovery order. A file that
//! cannot be read is skipped and recorded in the [`RunSummary`]; discovery
//! and persistence failures abort the run before anything is written.

use std::path::PathBuf;
use tracing::warn;

use crate::assemble;
use crate::config::Config;
use crate::discover;
use crate::error::Result;
use crate::models::Document;
use crate::persist;
use crate::progress::{ProgressEvent, ProgressReporter};
use crate::stats::{format_bytes, CorpusStats};

/// A file that was discovered but could not be turned into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one ingest run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub discovered: usize,
    pub failures: Vec<FileFailure>,
    pub bytes_written: u64,
    pub stats: CorpusStats,
}

impl RunSummary {
    pub fn produced(&self) -> usize {
        self.stats.documents
    }

    pub fn print(&self) {
        println!("ingest");
        println!("  discovered files: {}", self.discovered);
        println!("  parsed documents: {}", self.produced());
        println!("  failed files: {}", self.failures.len());
        for failure in &self.failures {
            println!("    {}: {}", failure.path.display(), failure.message);
        }
        self.stats.print();
        println!(
            "  written: {} ({})",
            self.output_path.display(),
            format_bytes(self.bytes_written)
        );
        println!("ok");
    }
}

/// Parse every discovered file in order, collecting documents and failures.
pub fn parse_all(
    files: &[discover::SourceFile],
    reporter: &dyn ProgressReporter,
) -> (Vec<Document>, Vec<FileFailure>) {
    let total = files.len() as u64;
    let mut documents = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for (i, file) in files.iter().enumerate() {
        reporter.report(ProgressEvent::Parsing {
            n: i as u64 + 1,
            total,
            file: file.relative_path.clone(),
        });

        match assemble::parse_markdown(&file.path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "skipping file");
                failures.push(FileFailure {
                    path: file.path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    (documents, failures)
}

pub fn run_ingest(config: &Config, reporter: &dyn ProgressReporter) -> Result<RunSummary> {
    let ingest = &config.ingest;

    reporter.report(ProgressEvent::Discovering {
        root: ingest.input_dir.display().to_string(),
    });
    let files = discover::discover_files(ingest)?;

    let (documents, failures) = parse_all(&files, reporter);

    let bytes_written = persist::save_corpus(&documents, &ingest.output_path)?;

    Ok(RunSummary {
        output_path: ingest.output_path.clone(),
        discovered: files.len(),
        failures,
        bytes_written,
        stats: CorpusStats::from_documents(&documents),
    })
}
