//! Fenced code block extraction.
//!
//! Each ```` ```lang ```` fenced block is moved into a [`CodeBlock`] and
//! replaced in the body by its `[CODE_BLOCK_<n>]` placeholder. Numbering
//! starts at 0 for every call, so documents never share a counter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{CodeBlock, CodeBlockId, PLAINTEXT};

// Opening fence with optional tag, body up to the next closing fence.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([^\s`]*)[ \t]*\n(.*?)```").unwrap());

/// Replaces fenced blocks with placeholders.
///
/// Returns the rewritten text and the extracted blocks in order of
/// appearance. Inline `code` spans are left alone.
pub fn extract_code_blocks(content: &str) -> (String, Vec<CodeBlock>) {
    let mut blocks: Vec<CodeBlock> = Vec::new();

    let rewritten = FENCED_BLOCK.replace_all(content, |caps: &Captures| {
        let language = match &caps[1] {
            "" => PLAINTEXT.to_string(),
            tag => tag.to_string(),
        };
        let id = CodeBlockId(blocks.len());
        blocks.push(CodeBlock {
            id,
            language,
            code: caps[2].trim().to_string(),
        });
        id.placeholder()
    });

    (rewritten.into_owned(), blocks)
}
