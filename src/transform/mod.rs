//! Markdown rewriting stages.
//!
//! Every stage is a pure function over `&str`; [`crate::assemble`] runs them
//! in a fixed order. Patterns that do not match leave their input unchanged.
//!
//! | Stage | Function |
//! |-------|----------|
//! | title | [`extract_title`], [`remove_title_line`] |
//! | references | [`prune_references`] |
//! | images | [`strip_images`] |
//! | tables | [`transform_tables`] |
//! | code blocks | [`extract_code_blocks`] |
//! | classification | [`classify_content`], [`dominant_language`], [`word_count`] |

pub mod classify;
pub mod code_blocks;
pub mod images;
pub mod references;
pub mod tables;
pub mod title;

pub use classify::{classify_content, dominant_language, word_count};
pub use code_blocks::extract_code_blocks;
pub use images::strip_images;
pub use references::prune_references;
pub use tables::transform_tables;
pub use title::{extract_title, remove_title_line};
