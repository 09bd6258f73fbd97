//! Trailing reference-section removal.
//!
//! Notion exports usually end with a link dump under `## 참조` or
//! `## Reference`. Everything from the first such heading to the end of the
//! document is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Headings that open a reference section.
pub const REFERENCE_HEADINGS: [&str; 4] = ["### 참조", "## 참조", "### Reference", "## Reference"];

// `###` is tried before `##` so `### 참조` never parses as `##` + `#`.
// Trailing text on the heading line (`## References`, `## 참조 링크`) is allowed.
static REFERENCE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:###|##)[ \t]*(?:참조|Reference)").unwrap());

/// Truncates `content` at the start of the earliest reference heading line.
///
/// Returns the content unchanged when no heading is present.
pub fn prune_references(content: &str) -> String {
    match REFERENCE_HEADING.find(content) {
        Some(m) => content[..m.start()].to_string(),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_korean_reference_section() {
        let content = indoc! {"
            Body text.

            ## 참조

            - https://example.com
        "};
        assert_eq!(prune_references(content), "Body text.\n\n");
    }

    #[test]
    fn every_heading_variant_is_recognized() {
        for heading in REFERENCE_HEADINGS {
            let content = format!("keep\n{}\ndrop\n", heading);
            assert_eq!(prune_references(&content), "keep\n", "variant {}", heading);
        }
    }

    #[test]
    fn trailing_heading_text_is_ignored() {
        assert_eq!(prune_references("keep\n## References and links\ndrop"), "keep\n");
    }

    #[test]
    fn earliest_heading_wins_regardless_of_variant() {
        let content = "intro\n## Reference\nlinks\n### 참조\nmore links\n";
        assert_eq!(prune_references(content), "intro\n");
    }

    #[test]
    fn heading_must_start_the_line() {
        let content = "see the ## 참조 section below\n";
        assert_eq!(prune_references(content), content);
    }

    #[test]
    fn deeper_headings_do_not_match() {
        let content = "intro\n#### 참조\nstill here\n";
        assert_eq!(prune_references(content), content);
    }

    #[test]
    fn no_reference_section_is_noop() {
        let content = "# Title\n\n## Overview\n\ntext\n";
        assert_eq!(prune_references(content), content);
    }
}
