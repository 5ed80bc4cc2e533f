use crate::models::{EntityRecognizer, EntitySpan, RuleMatch, RuleSet};
use crate::types::{RuleId, Score};
use crate::Error;

/// Rule hits and recognized entities for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridMatch {
    pub rule_matches: Vec<RuleMatch>,
    pub rule_score: Score,
    pub entities: Vec<EntitySpan>,
}

/// Runs a rule set and an entity recognizer over the same text.
pub struct HybridMatcher<R: EntityRecognizer> {
    rules: RuleSet,
    recognizer: R,
}

impl<R: EntityRecognizer> HybridMatcher<R> {
    pub fn new(rules: RuleSet, recognizer: R) -> Self {
        Self { rules, recognizer }
    }

    pub fn add_rule(
        &mut self,
        id: impl Into<RuleId>,
        pattern: &str,
        weight: Score,
    ) -> Result<(), Error> {
        self.rules.add_rule(id, pattern, weight)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rule_based_matching(&self, text: &str) -> Vec<RuleMatch> {
        self.rules.matches(text)
    }

    pub fn recognize_entities(&self, text: &str) -> Vec<EntitySpan> {
        self.recognizer.recognize(text)
    }

    pub fn match_text(&self, text: &str) -> HybridMatch {
        HybridMatch {
            rule_matches: self.rule_based_matching(text),
            rule_score: self.rules.score(text),
            entities: self.recognize_entities(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatternEntityRecognizer;

    #[test]
    fn test_rules_and_entities_together() {
        let recognizer = PatternEntityRecognizer::from_patterns(&[("ORG", "OpenAI")]).unwrap();
        let mut matcher = HybridMatcher::new(RuleSet::new(), recognizer);
        matcher
            .add_rule("COMPANY_NAME", r"(?i)\bopenai\b", 1.0)
            .unwrap();

        let result = matcher.match_text("I work at OpenAI.");

        assert_eq!(result.rule_score, 1.0);
        assert_eq!(result.rule_matches.len(), 1);
        assert_eq!(result.rule_matches[0].rule_id, "COMPANY_NAME");
        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].label, "ORG");
    }

    #[test]
    fn test_no_hits() {
        let matcher = HybridMatcher::new(
            RuleSet::from_patterns(&[("error", 5.0)]).unwrap(),
            PatternEntityRecognizer::new(),
        );

        let result = matcher.match_text("all systems nominal");
        assert_eq!(result.rule_score, 0.0);
        assert!(result.rule_matches.is_empty());
        assert!(result.entities.is_empty());
    }
}
