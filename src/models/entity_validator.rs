use crate::models::EntityRecognizer;
use std::collections::HashSet;

/// Checks that a text contains entities of the expected labels.
pub struct EntityValidator<R: EntityRecognizer> {
    recognizer: R,
}

impl<R: EntityRecognizer> EntityValidator<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// `true` when every label in `expected_labels` is attached to at least one recognized span.
    /// An empty expectation is always satisfied.
    pub fn validate(&self, text: &str, expected_labels: &[&str]) -> bool {
        let spans = self.recognizer.recognize(text);
        let found_labels: HashSet<&str> = spans.iter().map(|span| span.label.as_str()).collect();

        expected_labels
            .iter()
            .all(|label| found_labels.contains(label))
    }
}
