//! Pipe-table flattening.
//!
//! A markdown table
//!
//! ```text
//! | 명령어 | 설명 |
//! |--------|------|
//! | SET    | 저장 |
//! ```
//!
//! becomes one `header: value` line per data row (`명령어: SET, 설명: 저장`),
//! which embeds and searches far better than the raw grid.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// header row, separator row, then one or more data rows.
static TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^\|(.+)\|[ \t]*\n\|[-:| \t]+\|[ \t]*\n((?:\|.*\|[ \t]*(?:\n|\z))+)",
    )
    .unwrap()
});

/// Rewrites every pipe table into `field: value, ...` lines.
///
/// Data rows whose cell count differs from the header's are dropped.
/// Text outside tables is left as is.
pub fn transform_tables(content: &str) -> String {
    TABLE.replace_all(content, render_table).into_owned()
}

fn render_table(caps: &Captures) -> String {
    let headers = split_cells(&caps[1]);

    let rows: Vec<String> = caps[2]
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_cells)
        .filter(|values| values.len() == headers.len())
        .map(|values| {
            headers
                .iter()
                .zip(values)
                .map(|(h, v)| format!("{}: {}", h, v))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    let mut rendered = rows.join("\n");
    // Keep the line break that terminated the last row.
    if caps[0].ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

fn split_cells(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}
