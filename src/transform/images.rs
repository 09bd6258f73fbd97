use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());

/// Removes every `![alt](target)` image reference, alt text included.
pub fn strip_images(content: &str) -> String {
    IMAGE.replace_all(content, "").into_owned()
}
