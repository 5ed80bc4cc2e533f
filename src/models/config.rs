use crate::constants::DEFAULT_MATCHER_CONFIG;
use crate::models::{Classification, Component};
use crate::types::Score;
use crate::{EntityType, Error};
use std::fmt;

fn check_unit_interval(name: &str, value: Score) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ConfigurationError(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonWeights {
    pub full_name: Score,
    pub first_last: Score,
    pub middle_combinations: Score,
    pub first_only: Score,
    pub last_only: Score,
}

impl PersonWeights {
    pub fn weight(&self, component: Component) -> Score {
        match component {
            Component::FullName => self.full_name,
            Component::FirstLast => self.first_last,
            Component::MiddleCombinations => self.middle_combinations,
            Component::FirstOnly => self.first_only,
            Component::LastOnly => self.last_only,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyWeights {
    pub full_name: Score,
    pub core_name: Score,
    pub acronym: Score,
    pub strong_tokens: Score,
}

impl CompanyWeights {
    pub fn weight(&self, component: Component) -> Score {
        match component {
            Component::FullName => self.full_name,
            Component::CoreName => self.core_name,
            Component::Acronym => self.acronym,
            Component::StrongTokens => self.strong_tokens,
            _ => 0.0,
        }
    }
}

/// Per-entity-type component weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    pub person: PersonWeights,
    pub company: CompanyWeights,
}

impl WeightTable {
    /// Weight of `component` for `entity_type`. Components that do not belong to the entity
    /// type weigh `0.0`.
    pub fn weight(&self, entity_type: EntityType, component: Component) -> Score {
        match entity_type {
            EntityType::Person => self.person.weight(component),
            EntityType::Company => self.company.weight(component),
        }
    }

    /// String-keyed lookup. Unknown keys resolve to `0.0` rather than an error.
    pub fn weight_for_key(&self, entity_type: EntityType, key: &str) -> Score {
        Component::from_key(key).map_or(0.0, |component| self.weight(entity_type, component))
    }

    pub fn validate(&self) -> Result<(), Error> {
        for entity_type in [EntityType::Person, EntityType::Company] {
            for component in Component::for_entity_type(entity_type) {
                check_unit_interval(
                    &format!("{} weight `{}`", entity_type, component),
                    self.weight(entity_type, *component),
                )?;
            }
        }

        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        DEFAULT_MATCHER_CONFIG.weights
    }
}

/// Score bands: `[0, weak)` no match, `[weak, strong]` weak match, `(strong, 1]` strong match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPair {
    pub weak_threshold: Score,
    pub strong_threshold: Score,
}

impl ThresholdPair {
    pub fn new(weak_threshold: Score, strong_threshold: Score) -> Result<Self, Error> {
        let thresholds = Self {
            weak_threshold,
            strong_threshold,
        };
        thresholds.validate()?;

        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), Error> {
        check_unit_interval("weak_threshold", self.weak_threshold)?;
        check_unit_interval("strong_threshold", self.strong_threshold)?;

        if self.weak_threshold > self.strong_threshold {
            return Err(Error::ConfigurationError(format!(
                "weak_threshold ({}) must not exceed strong_threshold ({})",
                self.weak_threshold, self.strong_threshold
            )));
        }

        Ok(())
    }

    /// Inclusive on both ends.
    pub fn is_in_weak_strong_range(&self, score: Score) -> bool {
        self.weak_threshold <= score && score <= self.strong_threshold
    }

    pub fn classify(&self, raw_score: Score) -> Classification {
        if raw_score > self.strong_threshold {
            Classification::StrongMatch
        } else if self.is_in_weak_strong_range(raw_score) {
            Classification::WeakMatch
        } else {
            Classification::NoMatch
        }
    }
}

impl Default for ThresholdPair {
    fn default() -> Self {
        DEFAULT_MATCHER_CONFIG.thresholds
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    pub weights: WeightTable,
    pub thresholds: ThresholdPair,
    /// Entries per normalization cache. `0` disables caching.
    pub cache_size: usize,
    pub min_text_length: usize,
    pub max_text_length: usize,
    pub parallel_workers: usize,
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), Error> {
        self.weights.validate()?;
        self.thresholds.validate()?;

        if self.min_text_length > self.max_text_length {
            return Err(Error::ConfigurationError(format!(
                "min_text_length ({}) must not exceed max_text_length ({})",
                self.min_text_length, self.max_text_length
            )));
        }

        if self.parallel_workers == 0 {
            return Err(Error::ConfigurationError(
                "parallel_workers must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `text` falls within the configured length bounds, counted in characters.
    /// Enforcing the bounds is left to callers.
    pub fn accepts_text_length(&self, text: &str) -> bool {
        let length = text.chars().count();
        length >= self.min_text_length && length <= self.max_text_length
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        DEFAULT_MATCHER_CONFIG
    }
}

impl fmt::Display for MatcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MatcherConfig (\n\tweak_threshold: {},\n\tstrong_threshold: {},\n\tcache_size: {},\n\ttext_length: {}..={},\n\tparallel_workers: {}\n)",
            self.thresholds.weak_threshold,
            self.thresholds.strong_threshold,
            self.cache_size,
            self.min_text_length,
            self.max_text_length,
            self.parallel_workers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatcherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        assert!(matches!(
            ThresholdPair::new(0.9, 0.6),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_threshold_outside_unit_interval_is_rejected() {
        assert!(ThresholdPair::new(-0.1, 0.5).is_err());
        assert!(ThresholdPair::new(0.5, 1.5).is_err());
        assert!(ThresholdPair::new(0.7, 0.7).is_ok());
    }

    #[test]
    fn test_weight_outside_unit_interval_is_rejected() {
        let mut config = MatcherConfig::default();
        config.weights.company.acronym = 1.2;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigurationError(_))
        ));

        let mut config = MatcherConfig::default();
        config.weights.person.first_only = Score::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let mut config = MatcherConfig::default();
        config.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_classification_boundaries() {
        let thresholds = ThresholdPair::new(0.6, 0.9).unwrap();

        assert_eq!(thresholds.classify(0.59), Classification::NoMatch);
        assert_eq!(thresholds.classify(0.6), Classification::WeakMatch);
        assert_eq!(thresholds.classify(0.9), Classification::WeakMatch);
        assert_eq!(thresholds.classify(0.95), Classification::StrongMatch);
        assert_eq!(thresholds.classify(0.0), Classification::NoMatch);
        assert_eq!(thresholds.classify(1.0), Classification::StrongMatch);
    }

    #[test]
    fn test_unknown_component_key_weighs_zero() {
        let weights = WeightTable::default();

        assert_eq!(weights.weight_for_key(EntityType::Person, "nickname"), 0.0);
        assert_eq!(weights.weight_for_key(EntityType::Person, "acronym"), 0.0);
        assert_eq!(weights.weight_for_key(EntityType::Company, "acronym"), 0.85);
        assert_eq!(weights.weight_for_key(EntityType::Person, "last_only"), 0.6);
    }

    #[test]
    fn test_text_length_bounds() {
        let config = MatcherConfig::default();

        assert!(!config.accepts_text_length("a"));
        assert!(config.accepts_text_length("ab"));
        assert!(!config.accepts_text_length(&"x".repeat(501)));
    }
}
