//! Document title detection and removal.
//!
//! The title is the first line of the form `# <text>`. Deeper headings
//! (`##`, `###`, ...) never qualify.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::UNTITLED;

static TITLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# ([^\n]+)").unwrap());

// Title line plus the newlines that follow it, or end of input.
static TITLE_LINE_WITH_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# [^\n]+(?:\n+|\z)").unwrap());

/// Returns the trimmed text of the first `# ` heading, or `"Untitled"`.
pub fn extract_title(content: &str) -> String {
    TITLE_LINE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Removes the first `# ` heading line and any newlines directly after it.
pub fn remove_title_line(content: &str) -> String {
    TITLE_LINE_WITH_BREAKS.replacen(content, 1, "").into_owned()
}
