//! Content-type and dominant-language heuristics.

use std::collections::HashMap;

use crate::models::{CodeBlock, ContentType, PLAINTEXT};

/// Below this many words a document with code is treated as code-only.
pub const PROSE_WORD_THRESHOLD: usize = 20;

/// Whitespace-delimited token count. Placeholders count as words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

pub fn classify_content(content: &str, code_block_count: usize) -> ContentType {
    if code_block_count == 0 {
        ContentType::Text
    } else if word_count(content) < PROSE_WORD_THRESHOLD {
        ContentType::Code
    } else {
        ContentType::Mixed
    }
}

/// Most frequent non-`plaintext` language among `blocks`.
///
/// Counts are kept in block order and the current leader is only replaced
/// when another language strictly exceeds it, so on a tie the language
/// that reached the winning count first is returned.
pub fn dominant_language(blocks: &[CodeBlock]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut leader: Option<(&str, usize)> = None;

    for block in blocks {
        let lang = block.language.as_str();
        if lang == PLAINTEXT {
            continue;
        }
        let count = counts.entry(lang).or_insert(0);
        *count += 1;

        let overtakes = leader.map_or(true, |(_, best)| *count > best);
        if overtakes {
            leader = Some((lang, *count));
        }
    }

    leader.map(|(lang, _)| lang.to_string())
}
