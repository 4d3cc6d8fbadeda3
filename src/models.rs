//! Wishlist Models
//!
//! Wish entries and the text normalization applied on submit.

use std::fmt;

use uuid::Uuid;

/// Opaque wish identifier, unique within the page session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WishId(Uuid);

impl WishId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One wishlist entry. Text is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Wish {
    pub id: WishId,
    pub text: String,
}

impl Wish {
    /// Build a wish from raw draft input.
    /// Returns None when the draft is blank.
    pub fn from_draft(draft: &str) -> Option<Self> {
        normalize_wish_text(draft).map(|text| Self {
            id: WishId::new(),
            text,
        })
    }
}

/// Whitespace and line terminators as the browser's `String.prototype.trim`
/// sees them: U+FEFF counts, U+0085 does not.
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn trim_draft(draft: &str) -> &str {
    draft.trim_matches(is_trimmable)
}

/// True when the draft has nothing but whitespace
pub fn is_blank(draft: &str) -> bool {
    trim_draft(draft).is_empty()
}

/// Trim the draft and upper-case its first character
pub fn normalize_wish_text(draft: &str) -> Option<String> {
    let trimmed = trim_draft(draft);
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_capitalizes_first_char() {
        assert_eq!(normalize_wish_text("hello").as_deref(), Some("Hello"));
        assert_eq!(normalize_wish_text("  world  ").as_deref(), Some("World"));
        // Rest of the text is left alone
        assert_eq!(normalize_wish_text("new BIKE").as_deref(), Some("New BIKE"));
        assert_eq!(normalize_wish_text("Already").as_deref(), Some("Already"));
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize_wish_text("велосипед").as_deref(), Some("Велосипед"));
        assert_eq!(normalize_wish_text("ßtraße").as_deref(), Some("SStraße"));
        assert_eq!(normalize_wish_text("1 car").as_deref(), Some("1 car"));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_wish_text(""), None);
        assert_eq!(normalize_wish_text("   "), None);
        assert_eq!(normalize_wish_text("\t\n "), None);
        assert!(is_blank(" \n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_trim_matches_browser_whitespace() {
        // Byte order mark is whitespace to the browser
        assert_eq!(normalize_wish_text("\u{FEFF}"), None);
        assert!(is_blank("\u{FEFF} \u{FEFF}"));
        assert_eq!(normalize_wish_text("\u{FEFF}toy\u{FEFF}").as_deref(), Some("Toy"));

        assert_eq!(normalize_wish_text("\u{00A0}a").as_deref(), Some("A"));
        assert_eq!(normalize_wish_text("\u{2028}a\u{3000}").as_deref(), Some("A"));

        // Next-line is not trimmed by the browser
        assert!(!is_blank("\u{0085}"));
        assert_eq!(normalize_wish_text("\u{0085}").as_deref(), Some("\u{0085}"));
    }

    #[test]
    fn test_from_draft_assigns_distinct_ids() {
        let a = Wish::from_draft("same").unwrap();
        let b = Wish::from_draft("same").unwrap();
        assert_eq!(a.text, b.text);
        assert_ne!(a.id, b.id);
        assert!(Wish::from_draft("  ").is_none());
    }
}
