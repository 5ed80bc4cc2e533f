use crate::models::ThresholdPair;
use crate::types::{ComponentScores, Score};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    NoMatch,
    WeakMatch,
    StrongMatch,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::NoMatch => "NO_MATCH",
            Classification::WeakMatch => "WEAK_MATCH",
            Classification::StrongMatch => "STRONG_MATCH",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of a single comparison. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub raw_score: Score,
    pub classification: Classification,
    pub contributing_components: ComponentScores,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        self.classification != Classification::NoMatch
    }

    /// Score contributed by the component with the given key; `0.0` when it did not fire or the
    /// key is unknown.
    pub fn component_score(&self, key: &str) -> Score {
        self.contributing_components
            .iter()
            .find(|(component, _)| component.as_str() == key)
            .map_or(0.0, |(_, score)| *score)
    }
}

/// Sums component scores into a single clamped score and classifies it.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator {
    thresholds: ThresholdPair,
}

impl ScoreAggregator {
    pub fn new(thresholds: ThresholdPair) -> Self {
        Self { thresholds }
    }

    /// Sum of the component scores, clamped to `[0, 1]`.
    pub fn raw_score(component_scores: &ComponentScores) -> Score {
        component_scores.values().sum::<Score>().clamp(0.0, 1.0)
    }

    pub fn aggregate(&self, component_scores: ComponentScores) -> MatchResult {
        let raw_score = Self::raw_score(&component_scores);

        MatchResult {
            raw_score,
            classification: self.thresholds.classify(raw_score),
            contributing_components: component_scores,
        }
    }
}
