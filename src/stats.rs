//! Corpus statistics.
//!
//! Summarizes a corpus by content type and dominant language. Printed at
//! the end of `studymind ingest` and on demand by `studymind stats`.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{ContentType, Document};
use crate::persist;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub documents: usize,
    pub code_blocks: usize,
    pub words: usize,
    pub content_types: BTreeMap<ContentType, usize>,
    pub languages: BTreeMap<String, usize>,
}

impl CorpusStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut stats = CorpusStats {
            documents: documents.len(),
            ..Default::default()
        };
        for doc in documents {
            stats.code_blocks += doc.code_blocks.len();
            stats.words += doc.word_count;
            *stats.content_types.entry(doc.content_type).or_insert(0) += 1;
            if let Some(lang) = &doc.language {
                *stats.languages.entry(lang.clone()).or_insert(0) += 1;
            }
        }
        stats
    }

    pub fn print(&self) {
        println!("  documents:   {}", self.documents);
        println!("  code blocks: {}", self.code_blocks);
        println!("  words:       {}", self.words);
        if !self.content_types.is_empty() {
            println!("  content types:");
            for (ct, n) in &self.content_types {
                println!("    {:<10} {:>6}", ct.as_str(), n);
            }
        }
        if !self.languages.is_empty() {
            println!("  languages:");
            for (lang, n) in &self.languages {
                println!("    {:<10} {:>6}", lang, n);
            }
        }
    }
}

/// Run the stats command: load an existing corpus and print a summary.
pub fn run_stats(path: &Path) -> Result<()> {
    let documents = persist::load_corpus(path)?;
    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!("StudyMind — Corpus Stats");
    println!("========================");
    println!();
    println!("  Corpus:      {}", path.display());
    println!("  Size:        {}", format_bytes(size));
    println!();
    CorpusStats::from_documents(&documents).print();
    println!();

    Ok(())
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
