//! Formatting helpers for presenting content.

use time::OffsetDateTime;

/// Year shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Uppercases the first character, leaving the rest untouched (`"gluten-free"` → `"Gluten-free"`).
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
