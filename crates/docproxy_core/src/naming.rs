//! Property-name → accessor-name transform.
//!
//! ## Notes
//! - Words are split on `_`, `-` and whitespace. The first letter of each word is uppercased; the rest is kept as
//!   written, so `publishedAt`, `published_at` and `published-at` all classify to `PublishedAt`.
//! - Only ASCII letters change case. The transform is pure, so identical property sets always produce identical
//!   accessor names.

use convert_case::{Case, Casing};

use crate::conventions::{GETTER_PREFIX, SETTER_PREFIX};

/// Convert a property name to PascalCase.
///
/// ## Examples
/// ```rust
/// use docproxy_core::naming::classify;
/// assert_eq!(classify("published_at"), "PublishedAt");
/// assert_eq!(classify("title"), "Title");
/// assert_eq!(classify("authorName"), "AuthorName");
/// ```
pub fn classify(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    for word in property.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Getter identifier for a property (`title` → `getTitle`).
pub fn getter_name(property: &str) -> String {
    format!("{}{}", GETTER_PREFIX, classify(property))
}

/// Setter identifier for a property (`title` → `setTitle`).
pub fn setter_name(property: &str) -> String {
    format!("{}{}", SETTER_PREFIX, classify(property))
}

/// snake_case spelling of an accessor identifier, for Rust method names (`getPublishedAt` → `get_published_at`).
pub fn snake_case(identifier: &str) -> String {
    identifier.to_case(Case::Snake)
}
