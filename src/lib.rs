//! # StudyMind Ingest
//!
//! Turns a Notion markdown export into a JSON corpus of normalized
//! [`models::Document`] records ready for indexing.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────┐   ┌────────────────────────────────────────┐   ┌──────────┐
//! │ discover  │──▶│ title → references → images → tables → │──▶│ persist  │
//! │ **/*.md   │   │ code blocks → classify (per file)       │   │  JSON    │
//! └───────────┘   └────────────────────────────────────────┘   └──────────┘
//! ```
//!
//! Every file is processed independently: the code-block counter lives in a
//! single [`transform::extract_code_blocks`] call, and the corpus is written
//! once, after all files have been parsed.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Document and code block types |
//! | [`discover`] | Recursive markdown file discovery |
//! | [`transform`] | Pure markdown rewriting stages |
//! | [`assemble`] | Per-file document assembly |
//! | [`ingest`] | Run orchestration and summary |
//! | [`persist`] | Corpus serialization |
//! | [`progress`] | Progress reporting |
//! | [`stats`] | Corpus statistics |
//! | [`error`] | Error types |

pub mod assemble;
pub mod config;
pub mod discover;
pub mod error;
pub mod ingest;
pub mod models;
pub mod persist;
pub mod progress;
pub mod stats;
pub mod transform;
