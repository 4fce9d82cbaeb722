//! Name line heuristics.

/// Whether the lowercased `text` contains any of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// A plausible printed name: 2 to 4 whitespace-separated tokens with at
/// least one alphabetic character.
pub fn is_name_shaped(line: &str) -> bool {
    let tokens = line.split_whitespace().count();
    (2..=4).contains(&tokens) && line.chars().any(char::is_alphabetic)
}

/// The line right after the first line containing one of `labels`.
///
/// Layouts that print a label and its value on consecutive lines. A label on
/// the last line has no value.
pub fn line_after_label<'a>(lines: &'a [String], labels: &[&str]) -> Option<&'a str> {
    lines
        .windows(2)
        .find(|pair| contains_any(&pair[0], labels))
        .map(|pair| pair[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_name_shaped() {
        assert!(is_name_shaped("RAHUL SHARMA"));
        assert!(is_name_shaped("Anna Maria de Souza"));
        assert!(!is_name_shaped("RAHUL"));
        assert!(!is_name_shaped("A B C D E"));
        assert!(!is_name_shaped("1234 5678 9012"));
    }

    #[test]
    fn test_line_after_label() {
        let input = lines(&["Name", "JOHN DOE", "Holder"]);

        assert_eq!(line_after_label(&input, &["name"]), Some("JOHN DOE"));
        assert_eq!(line_after_label(&input, &["holder"]), None);
        assert_eq!(line_after_label(&[], &["name"]), None);
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("INCOME TAX DEPARTMENT", &["income"]));
        assert!(!contains_any("Permanent Account", &["income", "tax"]));
    }
}
