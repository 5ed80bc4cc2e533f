use crate::models::{
    ComponentScorer, MatchResult, MatcherConfig, NormalizedText, Normalizer, ScoreAggregator,
};
use crate::types::{ComponentScores, EntityPair};
use crate::{EntityType, Error};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Compares entity mentions under a fixed, validated configuration.
///
/// Owns its [`Normalizer`], so the normalization caches live as long as the matcher, and a
/// worker pool of `parallel_workers` threads for batch comparisons. The matcher is `Sync`; one
/// instance can serve many threads.
pub struct EntityMatcher {
    config: MatcherConfig,
    normalizer: Normalizer,
    pool: ThreadPool,
}

impl EntityMatcher {
    pub fn new(config: MatcherConfig) -> Result<Self, Error> {
        config.validate()?;
        debug!("{}", config);

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.parallel_workers)
            .thread_name(|index| format!("entity-matcher-{}", index))
            .build()?;

        Ok(Self {
            normalizer: Normalizer::new(config.cache_size),
            config,
            pool,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn normalize(&self, text: &str, entity_type: EntityType) -> NormalizedText {
        self.normalizer.normalize(text, entity_type)
    }

    pub fn score_components(
        &self,
        entity_a: &str,
        entity_b: &str,
        entity_type: EntityType,
    ) -> ComponentScores {
        ComponentScorer::new(&self.normalizer, &self.config.weights)
            .score_components(entity_a, entity_b, entity_type)
    }

    pub fn compare(&self, entity_a: &str, entity_b: &str, entity_type: EntityType) -> MatchResult {
        let component_scores = self.score_components(entity_a, entity_b, entity_type);
        ScoreAggregator::new(self.config.thresholds).aggregate(component_scores)
    }

    /// Compares every pair on the matcher's worker pool. Results are in input order.
    pub fn compare_batch(&self, entity_pairs: &[EntityPair]) -> Vec<MatchResult> {
        debug!(
            "Comparing {} pairs across {} workers",
            entity_pairs.len(),
            self.pool.current_num_threads()
        );

        self.pool.install(|| {
            entity_pairs
                .par_iter()
                .map(|(entity_type, entity_a, entity_b)| {
                    self.compare(entity_a, entity_b, *entity_type)
                })
                .collect()
        })
    }
}
