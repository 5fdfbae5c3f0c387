//! Text helpers for table cells

/// Placeholder for a missing attribute value
pub const NOT_AVAILABLE: &str = "N/A";

/// Cells longer than this many characters are truncated
pub const TRUNCATE_AT: usize = 30;

/// Cell text as shown in the table.
///
/// `full` is set only when the text was cut, and carries the complete string
/// for the hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub shown: String,
    pub full: Option<String>,
}

impl CellText {
    pub fn is_truncated(&self) -> bool {
        self.full.is_some()
    }
}

/// Cuts `text` to `max` chars and appends `…` when it is longer.
/// Counts `char`s, so multi-byte letters (ñ, á) never split.
pub fn truncate(text: &str, max: usize) -> CellText {
    if text.chars().count() <= max {
        return CellText {
            shown: text.to_string(),
            full: None,
        };
    }
    let mut shown: String = text.chars().take(max).collect();
    shown.push('…');
    CellText {
        shown,
        full: Some(text.to_string()),
    }
}

/// Case-insensitive substring check used by local (client-side) filters
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        let cell = truncate("Disco de freno", TRUNCATE_AT);
        assert_eq!(cell.shown, "Disco de freno");
        assert!(!cell.is_truncated());
    }

    #[test]
    fn test_exactly_thirty_chars_is_not_truncated() {
        let text = "a".repeat(30);
        assert!(!truncate(&text, TRUNCATE_AT).is_truncated());
    }

    #[test]
    fn test_long_text_gets_ellipsis_and_full_tooltip() {
        let text = "Disco de freno ventilado delantero 280mm";
        let cell = truncate(text, TRUNCATE_AT);
        assert_eq!(cell.shown, "Disco de freno ventilado delan…");
        assert_eq!(cell.shown.chars().count(), 31);
        assert_eq!(cell.full.as_deref(), Some(text));
    }

    #[test]
    fn test_multibyte_chars_are_counted_not_bytes() {
        let text = "ñ".repeat(31);
        let cell = truncate(&text, TRUNCATE_AT);
        assert_eq!(cell.shown, format!("{}…", "ñ".repeat(30)));
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Brembo 09.A727.11", "a727"));
        assert!(contains_ci("anything", "   "));
        assert!(!contains_ci("Brembo", "ate"));
    }
}
