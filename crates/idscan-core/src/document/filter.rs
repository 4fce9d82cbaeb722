//! Confidence filtering of recognized fragments.

use crate::ocr::RecognizedFragment;

/// Confidence-filtered fragment texts in engine order, plus their
/// space-joined full text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSequence {
    lines: Vec<String>,
    full_text: String,
}

impl LineSequence {
    /// Build a sequence from already-filtered lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let full_text = lines.join(" ");
        Self { lines, full_text }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with single spaces, for patterns spanning fragments.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Up to `max_chars` characters of the full text, for logging.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.full_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.full_text[..idx],
            None => &self.full_text,
        }
    }
}

/// Keeps fragments whose confidence is strictly above a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceFilter {
    threshold: f32,
}

impl ConfidenceFilter {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Filter `fragments`, preserving their order.
    pub fn apply(&self, fragments: &[RecognizedFragment]) -> LineSequence {
        LineSequence::from_lines(
            fragments
                .iter()
                .filter(|f| f.confidence > self.threshold)
                .map(|f| f.text.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_threshold_is_exclusive() {
        let filter = ConfidenceFilter::new(0.3);
        let fragments = vec![
            RecognizedFragment::new("at threshold", 0.3),
            RecognizedFragment::new("just above", 0.3 + f32::EPSILON),
            RecognizedFragment::new("below", 0.1),
        ];

        let lines = filter.apply(&fragments);

        assert_eq!(lines.lines(), ["just above".to_string()]);
        assert_eq!(lines.full_text(), "just above");
    }

    #[test]
    fn test_order_preserved_and_joined_with_spaces() {
        let filter = ConfidenceFilter::new(0.4);
        let fragments = vec![
            RecognizedFragment::new("C", 0.9),
            RecognizedFragment::new("A", 0.5),
            RecognizedFragment::new("dropped", 0.2),
            RecognizedFragment::new("B", 1.0),
        ];

        let lines = filter.apply(&fragments);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.full_text(), "C A B");
    }

    #[test]
    fn test_empty_input() {
        let lines = ConfidenceFilter::new(0.3).apply(&[]);

        assert!(lines.is_empty());
        assert_eq!(lines.full_text(), "");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let lines = LineSequence::from_lines(["आधार कार्ड"]);

        assert_eq!(lines.preview(4), "आधार");
        assert_eq!(lines.preview(200), "आधार कार्ड");
    }
}
