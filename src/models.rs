pub mod component;
pub use component::Component;

pub mod component_scorer;
pub use component_scorer::ComponentScorer;

pub mod config;
pub use config::{CompanyWeights, MatcherConfig, PersonWeights, ThresholdPair, WeightTable};

pub mod entity_matcher;
pub use entity_matcher::EntityMatcher;

pub mod entity_recognizer;
pub use entity_recognizer::{EntityRecognizer, EntitySpan, PatternEntityRecognizer};

pub mod entity_type;
pub use entity_type::EntityType;

pub mod entity_validator;
pub use entity_validator::EntityValidator;

pub mod error;
pub use error::Error;

pub mod hybrid_matcher;
pub use hybrid_matcher::{HybridMatch, HybridMatcher};

pub mod normalizer;
pub use normalizer::{NormalizedText, Normalizer, NormalizerCacheStats};

pub mod rule_matcher;
pub use rule_matcher::{Rule, RuleMatch, RuleSet};

pub mod score_aggregator;
pub use score_aggregator::{Classification, MatchResult, ScoreAggregator};

pub mod transform_cache;
pub use transform_cache::{CacheStats, TransformCache};
