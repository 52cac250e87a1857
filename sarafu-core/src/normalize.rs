//! Whitespace normalization for extracted document text.

/// Collapse blank lines and horizontal whitespace runs.
///
/// PDF-to-text output varies wildly across report vendors: tabs, padded
/// columns, and stretches of blank lines. Downstream patterns assume single
/// spaces and no blank lines. Idempotent.
pub fn normalize_text(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_lines_and_spaces() {
        let raw = "REPORTED NAMES:\tJOHN   DOE\n\n\n   Metro-Score  \n\n750\n";
        assert_eq!(
            normalize_text(raw),
            "REPORTED NAMES: JOHN DOE\nMetro-Score\n750"
        );
    }

    #[test]
    fn test_idempotent() {
        let raw = "a  b\n\n c\t\td\n";
        let once = normalize_text(raw);
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("\n \n\t\n"), "");
    }
}
