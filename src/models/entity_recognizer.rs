use crate::types::EntityLabel;
use crate::Error;
use regex::Regex;

/// A labelled entity mention, as a byte range of the recognized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// The capability of producing labelled entity spans for a text.
///
/// Implementations are typically backed by an NLP toolkit. They are constructed once by the
/// caller and handed to the components that need them.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}

impl<T: EntityRecognizer + ?Sized> EntityRecognizer for &T {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        (**self).recognize(text)
    }
}

impl<T: EntityRecognizer + ?Sized> EntityRecognizer for Box<T> {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        (**self).recognize(text)
    }
}

/// Recognizes entities with one regex per label.
///
/// Overlapping candidates are resolved in favor of the earliest start, then the longest span,
/// then the label registered first; the returned spans never overlap.
#[derive(Debug, Clone, Default)]
pub struct PatternEntityRecognizer {
    patterns: Vec<(EntityLabel, Regex)>,
}

impl PatternEntityRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a recognizer from `(label, pattern)` pairs.
    pub fn from_patterns(patterns: &[(&str, &str)]) -> Result<Self, Error> {
        let mut recognizer = Self::new();
        for (label, pattern) in patterns {
            recognizer.add_pattern(*label, pattern)?;
        }

        Ok(recognizer)
    }

    pub fn add_pattern(&mut self, label: impl Into<EntityLabel>, pattern: &str) -> Result<(), Error> {
        let label = label.into();
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::PatternError(format!("Entity label {:?}: {}", label, e)))?;
        self.patterns.push((label, pattern));

        Ok(())
    }
}

impl EntityRecognizer for PatternEntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut candidates: Vec<(usize, &EntityLabel, regex::Match)> = self
            .patterns
            .iter()
            .enumerate()
            .flat_map(|(priority, (label, pattern))| {
                pattern
                    .find_iter(text)
                    .filter(|found| !found.is_empty())
                    .map(move |found| (priority, label, found))
            })
            .collect();

        candidates.sort_by(|(priority_a, _, a), (priority_b, _, b)| {
            a.start()
                .cmp(&b.start())
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| priority_a.cmp(priority_b))
        });

        let mut spans: Vec<EntitySpan> = Vec::new();
        for (_, label, found) in candidates {
            if spans.last().map_or(false, |last| found.start() < last.end) {
                continue;
            }

            spans.push(EntitySpan {
                text: found.as_str().to_string(),
                label: label.clone(),
                start: found.start(),
                end: found.end(),
            });
        }

        spans
    }
}
