mod constants;
pub mod models;
pub use constants::{
    COMPANY_SUFFIXES, DEFAULT_CACHE_SIZE, DEFAULT_COMPANY_WEIGHTS, DEFAULT_MATCHER_CONFIG,
    DEFAULT_PERSON_WEIGHTS, DEFAULT_THRESHOLDS, PERSON_TITLES, STRONG_TOKEN_RATIO,
};
pub use models::{
    Classification, Component, ComponentScorer, EntityMatcher, EntityRecognizer, EntitySpan,
    EntityType, EntityValidator, Error, HybridMatch, HybridMatcher, MatchResult, MatcherConfig,
    NormalizedText, Normalizer, PatternEntityRecognizer, Rule, RuleMatch, RuleSet,
    ScoreAggregator, ThresholdPair, WeightTable,
};
pub mod types;
mod utils;
pub use types::{ComponentScores, EntityLabel, EntityPair, RuleId, Score, Token, TokenRef};
pub use utils::{extract_first_last, read_entity_pairs, tokenize};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Normalizes `text` as the given entity type without caching.
pub fn normalize(text: &str, entity_type: EntityType) -> NormalizedText {
    Normalizer::without_cache().normalize(text, entity_type)
}

/// Component scores for a pair of mentions under the given weights.
///
/// Scores are keyed by [`Component`]; [`Component::as_str`] gives the string key
/// (`"full_name"`, `"first_last"`, ...). Only fired components with a non-zero weight appear.
/// Fails with [`Error::ConfigurationError`] when a weight lies outside `[0, 1]`.
pub fn score(
    entity_a: &str,
    entity_b: &str,
    entity_type: EntityType,
    weights: &WeightTable,
) -> Result<ComponentScores, Error> {
    weights.validate()?;

    let normalizer = Normalizer::without_cache();
    Ok(ComponentScorer::new(&normalizer, weights).score_components(entity_a, entity_b, entity_type))
}

/// Fails with [`Error::ConfigurationError`] when the thresholds are out of range or inverted.
pub fn classify(raw_score: Score, thresholds: &ThresholdPair) -> Result<Classification, Error> {
    thresholds.validate()?;

    Ok(thresholds.classify(raw_score))
}

pub fn rule_match(text: &str, rules: &RuleSet) -> Score {
    rules.score(text)
}

pub fn match_entities(
    entity_a: &str,
    entity_b: &str,
    entity_type: EntityType,
) -> Result<MatchResult, Error> {
    let match_result = match_entities_with_custom_config(
        entity_a,
        entity_b,
        entity_type,
        &DEFAULT_MATCHER_CONFIG,
    )?;

    Ok(match_result)
}

pub fn match_entities_with_custom_config(
    entity_a: &str,
    entity_b: &str,
    entity_type: EntityType,
    matcher_config: &MatcherConfig,
) -> Result<MatchResult, Error> {
    matcher_config.validate()?;

    // Single comparison; no caches, no worker pool
    let normalizer = Normalizer::without_cache();
    let component_scores = ComponentScorer::new(&normalizer, &matcher_config.weights)
        .score_components(entity_a, entity_b, entity_type);

    Ok(ScoreAggregator::new(matcher_config.thresholds).aggregate(component_scores))
}
