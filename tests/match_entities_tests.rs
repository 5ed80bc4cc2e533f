use entity_matcher::{
    classify, match_entities, match_entities_with_custom_config, score, Classification,
    EntityMatcher, EntityPair, EntityType, Error, MatcherConfig, ThresholdPair, WeightTable,
};
use test_utils::constants::TEST_ENTITY_PAIRS_CSV_PATH;
use test_utils::load_entity_pairs_from_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_classifications() {
        let fixtures = load_entity_pairs_from_file(TEST_ENTITY_PAIRS_CSV_PATH)
            .expect("Failed to load entity pairs from CSV");
        assert!(!fixtures.is_empty());

        for fixture in &fixtures {
            let match_result =
                match_entities(&fixture.entity_a, &fixture.entity_b, fixture.entity_type)
                    .expect("Default configuration is valid");

            assert_eq!(
                match_result.classification, fixture.expected_classification,
                "{} {:?} vs {:?} scored {} with {:?}",
                fixture.entity_type,
                fixture.entity_a,
                fixture.entity_b,
                match_result.raw_score,
                match_result.contributing_components
            );

            // Comparison is symmetric
            let reversed =
                match_entities(&fixture.entity_b, &fixture.entity_a, fixture.entity_type)
                    .expect("Default configuration is valid");
            assert_eq!(reversed, match_result);
        }
    }

    #[test]
    fn test_fixture_batch_matches_fixture_order() {
        let fixtures = load_entity_pairs_from_file(TEST_ENTITY_PAIRS_CSV_PATH)
            .expect("Failed to load entity pairs from CSV");

        let entity_pairs: Vec<EntityPair> = fixtures
            .iter()
            .map(|fixture| {
                (
                    fixture.entity_type,
                    fixture.entity_a.clone(),
                    fixture.entity_b.clone(),
                )
            })
            .collect();

        let entity_matcher =
            EntityMatcher::new(MatcherConfig::default()).expect("Default configuration is valid");
        let classifications: Vec<Classification> = entity_matcher
            .compare_batch(&entity_pairs)
            .into_iter()
            .map(|match_result| match_result.classification)
            .collect();

        let expected: Vec<Classification> = fixtures
            .iter()
            .map(|fixture| fixture.expected_classification)
            .collect();

        assert_eq!(classifications, expected);
    }

    #[test]
    fn test_person_component_weighting() {
        let weights = WeightTable::default();

        let scores = score("John Smith", "John Smith", EntityType::Person, &weights)
            .expect("Default weights are valid");
        assert_eq!(scores.values().next(), Some(&1.0));
        assert_eq!(
            scores.keys().next().map(|component| component.as_str()),
            Some("full_name")
        );

        let scores = score("John Smith", "John Doe", EntityType::Person, &weights)
            .expect("Default weights are valid");
        assert_eq!(scores.len(), 1);
        assert_eq!(
            scores.iter().next().map(|(c, s)| (c.as_str(), *s)),
            Some(("first_only", 0.4))
        );

        let thresholds = ThresholdPair::default();
        assert_eq!(classify(0.4, &thresholds).unwrap(), Classification::NoMatch);
    }

    #[test]
    fn test_threshold_boundaries() {
        let thresholds = ThresholdPair::new(0.6, 0.9).expect("Valid thresholds");

        assert_eq!(classify(0.6, &thresholds).unwrap(), Classification::WeakMatch);
        assert_eq!(classify(0.9, &thresholds).unwrap(), Classification::WeakMatch);
        assert_eq!(classify(0.95, &thresholds).unwrap(), Classification::StrongMatch);
        assert_eq!(classify(0.59, &thresholds).unwrap(), Classification::NoMatch);
    }

    #[test]
    fn test_invalid_thresholds_fail_classification() {
        let inverted = ThresholdPair {
            weak_threshold: 0.9,
            strong_threshold: 0.6,
        };
        assert!(matches!(
            classify(0.7, &inverted),
            Err(Error::ConfigurationError(_))
        ));

        let out_of_range = ThresholdPair {
            weak_threshold: 0.6,
            strong_threshold: 1.2,
        };
        assert!(classify(0.7, &out_of_range).is_err());
    }

    #[test]
    fn test_invalid_weights_fail_scoring() {
        let mut weights = WeightTable::default();
        weights.person.full_name = 5.0;
        weights.person.first_last = -3.0;

        let result = score("John Smith", "John Smith", EntityType::Person, &weights);
        assert!(matches!(result, Err(Error::ConfigurationError(_))));

        // Validation covers both entity types regardless of the one being scored
        let mut weights = WeightTable::default();
        weights.company.acronym = 1.01;
        assert!(score("John Smith", "John Smith", EntityType::Person, &weights).is_err());
    }

    #[test]
    fn test_custom_config_is_validated() {
        let mut config = MatcherConfig::default();
        config.weights.person.full_name = 2.0;

        let result =
            match_entities_with_custom_config("John Smith", "John Smith", EntityType::Person, &config);
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_custom_weights_change_outcome() {
        let mut config = MatcherConfig::default();
        config.weights.person.first_only = 0.7;

        let match_result =
            match_entities_with_custom_config("John Smith", "John Doe", EntityType::Person, &config)
                .expect("Valid configuration");

        assert_eq!(match_result.classification, Classification::WeakMatch);
        assert_eq!(match_result.component_score("first_only"), 0.7);
    }
}
