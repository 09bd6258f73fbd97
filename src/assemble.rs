//! Per-file document assembly.
//!
//! Runs the [`crate::transform`] stages over one file in their fixed order
//! and stamps the result with a fresh id and creation time. Ids are random
//! v4 UUIDs, so ingesting the same file twice yields two distinct documents.

use chrono::{Local, Timelike};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

use crate::error::{IngestError, Result};
use crate::models::{Document, DocumentStatus};
use crate::transform;

/// Read and parse a single markdown file.
pub fn parse_markdown(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path).map_err(|source| IngestError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(build_document(&raw, &path.to_string_lossy()))
}

/// Build a [`Document`] from raw markdown text.
pub fn build_document(raw: &str, source_path: &str) -> Document {
    let title = transform::extract_title(raw);

    let content = transform::remove_title_line(raw);
    let content = transform::prune_references(&content);
    let content = transform::strip_images(&content);
    let content = transform::transform_tables(&content);
    let (content, code_blocks) = transform::extract_code_blocks(&content);

    let content_type = transform::classify_content(&content, code_blocks.len());
    let language = transform::dominant_language(&code_blocks);
    let word_count = transform::word_count(&content);

    debug!(
        source = source_path,
        %content_type,
        code_blocks = code_blocks.len(),
        word_count,
        "assembled document"
    );

    let now = Local::now().naive_local();
    // Drop sub-second precision so the stored value survives a round trip.
    let now = now.with_nanosecond(0).unwrap_or(now);

    Document {
        id: Uuid::new_v4().to_string(),
        title,
        content: content.trim().to_string(),
        content_type,
        language,
        source_path: source_path.to_string(),
        word_count,
        status: DocumentStatus::Active,
        created_at: now,
        updated_at: now,
        tags: Vec::new(),
        url: String::new(),
        code_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CodeBlockId, ContentType, UNTITLED};
    use indoc::indoc;

    const FULL_DOCUMENT: &str = indoc! {"
        # Title

        Caching is one of the most effective ways to speed up a web service,
        and Redis is a popular choice because it is simple, fast and well supported.

        ![architecture](images/arch.png)

        | 명령어 | 설명 |
        |--------|------|
        | SET | 값 저장 |
        | GET | 값 조회 |
        | DEL | 값 삭제 |

        ```python
        client = redis.Redis()
        client.setex('key', 3600, 'value')
        ```

        The snippet above stores a value with a one hour expiry.

        ## 참조

        - https://redis.io/docs
    "};

    #[test]
    fn end_to_end_document() {
        let doc = build_document(FULL_DOCUMENT, "notes/redis.md");

        assert_eq!(doc.title, "Title");
        assert!(!doc.content.contains("# Title"));
        assert!(!doc.content.contains("참조"));
        assert!(!doc.content.contains("redis.io"));
        assert!(!doc.content.contains("![architecture]"));
        assert!(!doc.content.contains("images/arch.png"));

        assert!(doc.content.contains("명령어: SET, 설명: 값 저장"));
        assert!(doc.content.contains("명령어: GET, 설명: 값 조회"));
        assert!(doc.content.contains("명령어: DEL, 설명: 값 삭제"));
        assert!(!doc.content.contains("|--------|"));

        assert_eq!(doc.content.matches("[CODE_BLOCK_0]").count(), 1);
        assert!(!doc.content.contains("[CODE_BLOCK_1]"));
        assert_eq!(doc.code_blocks.len(), 1);
        assert_eq!(doc.code_blocks[0].id, CodeBlockId(0));

        assert_eq!(doc.content_type, ContentType::Mixed);
        assert_eq!(doc.language.as_deref(), Some("python"));
        assert_eq!(doc.word_count, doc.content.split_whitespace().count());
        assert_eq!(doc.source_path, "notes/redis.md");
    }

    #[test]
    fn metadata_is_stamped() {
        let doc = build_document("plain text", "a.md");
        assert_eq!(doc.title, UNTITLED);
        assert_eq!(doc.status, DocumentStatus::Active);
        assert_eq!(doc.created_at, doc.updated_at);
        assert!(doc.tags.is_empty());
        assert!(doc.url.is_empty());
        assert!(Uuid::parse_str(&doc.id).is_ok());
        assert_eq!(doc.content_type, ContentType::Text);
        assert_eq!(doc.language, None);
    }

    #[test]
    fn code_only_document() {
        let doc = build_document("# Snippet\n\n```bash\nls -la\n```\n", "s.md");
        assert_eq!(doc.content, "[CODE_BLOCK_0]");
        assert_eq!(doc.content_type, ContentType::Code);
        assert_eq!(doc.language.as_deref(), Some("bash"));
        assert_eq!(doc.word_count, 1);
    }

    #[test]
    fn fresh_id_per_parse() {
        let a = build_document("# Same\n\nbody", "same.md");
        let b = build_document("# Same\n\nbody", "same.md");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn unreadable_file_is_a_source_read_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("binary.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = parse_markdown(&path).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, IngestError::SourceRead { .. }));
    }
}
