use crate::constants::STRONG_TOKEN_RATIO;
use crate::models::{Component, NormalizedText, Normalizer, WeightTable};
use crate::types::{ComponentScores, TokenRef};
use crate::utils::jaccard_similarity_tokens;
use crate::EntityType;
use log::debug;
use std::collections::HashSet;

fn is_subset(a: &[&TokenRef], b: &[&TokenRef]) -> bool {
    let b: HashSet<&TokenRef> = b.iter().copied().collect();
    a.iter().all(|token| b.contains(token))
}

/// Computes the weighted, binary sub-scores of a pairwise entity comparison.
pub struct ComponentScorer<'a> {
    normalizer: &'a Normalizer,
    weights: &'a WeightTable,
}

impl<'a> ComponentScorer<'a> {
    pub fn new(normalizer: &'a Normalizer, weights: &'a WeightTable) -> Self {
        Self {
            normalizer,
            weights,
        }
    }

    /// Normalizes both mentions and returns the weight of every component that fired. Components
    /// that did not fire, or whose configured weight is zero, are omitted.
    ///
    /// For persons, `middle_combinations` fires only when at least one mention has middle
    /// tokens and one side's middle tokens are a subset of the other's.
    pub fn score_components(
        &self,
        entity_a: &str,
        entity_b: &str,
        entity_type: EntityType,
    ) -> ComponentScores {
        let fired = match entity_type {
            EntityType::Person => self.person_components(entity_a, entity_b),
            EntityType::Company => self.company_components(entity_a, entity_b),
        };

        let component_scores: ComponentScores = fired
            .into_iter()
            .map(|component| (component, self.weights.weight(entity_type, component)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        debug!(
            "{} {:?} vs {:?}: {:?}",
            entity_type, entity_a, entity_b, component_scores
        );

        component_scores
    }

    /// `middle_combinations` requires middle tokens on at least one side: `John Smith` vs
    /// `John Smith` fires `full_name` and `first_last` only, although the empty middle sets are
    /// trivially subsets of each other.
    fn person_components(&self, entity_a: &str, entity_b: &str) -> Vec<Component> {
        let a = self.normalizer.normalize(entity_a, EntityType::Person);
        let b = self.normalizer.normalize(entity_b, EntityType::Person);

        let mut fired = Vec::new();

        if a.is_empty() || b.is_empty() {
            return fired;
        }

        if a == b {
            fired.push(Component::FullName);
        }

        let (first_a, last_a) = a.first_last();
        let (first_b, last_b) = b.first_last();

        let first_equal = first_a.is_some() && first_a == first_b;
        let last_equal = last_a.is_some() && last_a == last_b;

        if first_equal && last_equal {
            fired.push(Component::FirstLast);

            let middle_a = a.middle_tokens();
            let middle_b = b.middle_tokens();

            let has_middle = !middle_a.is_empty() || !middle_b.is_empty();
            if has_middle && (is_subset(&middle_a, &middle_b) || is_subset(&middle_b, &middle_a)) {
                fired.push(Component::MiddleCombinations);
            }
        }

        if first_equal && !last_equal {
            fired.push(Component::FirstOnly);
        }

        if last_equal && !first_equal {
            fired.push(Component::LastOnly);
        }

        fired
    }

    fn company_components(&self, entity_a: &str, entity_b: &str) -> Vec<Component> {
        let mut fired = Vec::new();

        let canonical_a = self.normalizer.canonicalize(entity_a);
        let canonical_b = self.normalizer.canonicalize(entity_b);

        if !canonical_a.is_empty() && canonical_a == canonical_b {
            fired.push(Component::FullName);
        }

        let a = self.normalizer.normalize(entity_a, EntityType::Company);
        let b = self.normalizer.normalize(entity_b, EntityType::Company);

        if a.is_empty() || b.is_empty() {
            return fired;
        }

        if a.core_name() == b.core_name() {
            fired.push(Component::CoreName);
        }

        let acronym_of = |long: &NormalizedText, short: &NormalizedText| {
            long.tokens().len() >= 2 && long.initials() == short.core_name()
        };
        if acronym_of(&a, &b) || acronym_of(&b, &a) {
            fired.push(Component::Acronym);
        }

        if jaccard_similarity_tokens(a.core_name(), b.core_name()) >= STRONG_TOKEN_RATIO {
            fired.push(Component::StrongTokens);
        }

        fired
    }
}
