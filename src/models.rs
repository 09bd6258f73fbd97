//! Core data models produced by the ingestion pipeline.
//!
//! A [`Document`] is one parsed markdown file; its fenced code blocks are
//! lifted out into [`CodeBlock`]s and referenced from the body by
//! `[CODE_BLOCK_<n>]` placeholders.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Title used when a file declares no `# ` heading.
pub const UNTITLED: &str = "Untitled";

/// Language recorded for fences without a tag.
pub const PLAINTEXT: &str = "plaintext";

const PLACEHOLDER_PREFIX: &str = "CODE_BLOCK_";

/// Coarse classification of a document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Code,
    Mixed,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Code => "code",
            ContentType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status. Ingestion only ever creates active documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
}

/// Positional id of a code block within its document.
///
/// Serialized as the bare token (`CODE_BLOCK_3`); rendered in document
/// content as `[CODE_BLOCK_3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeBlockId(pub usize);

impl CodeBlockId {
    pub fn index(&self) -> usize {
        self.0
    }

    /// The marker left in the body where the block was removed.
    pub fn placeholder(&self) -> String {
        format!("[{}]", self)
    }
}

impl fmt::Display for CodeBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PLACEHOLDER_PREFIX, self.0)
    }
}

impl Serialize for CodeBlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CodeBlockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token
            .strip_prefix(PLACEHOLDER_PREFIX)
            .and_then(|n| n.parse().ok())
            .map(CodeBlockId)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid code block id: {}", token)))
    }
}

/// A fenced block extracted from a document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub id: CodeBlockId,
    pub language: String,
    pub code: String,
}

/// One parsed source file, ready for indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Option<String>,
    pub source_path: String,
    pub word_count: usize,
    pub status: DocumentStatus,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
    pub tags: Vec<String>,
    pub url: String,
    pub code_blocks: Vec<CodeBlock>,
}

/// `YYYY-MM-DD HH:MM:SS` wall-clock timestamps.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
