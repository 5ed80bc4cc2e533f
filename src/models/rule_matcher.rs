use crate::types::{RuleId, Score};
use crate::Error;
use regex::Regex;

/// A weighted regex rule. The pattern is compiled when the rule is created.
#[derive(Debug, Clone)]
pub struct Rule {
    id: RuleId,
    pattern: Regex,
    weight: Score,
}

impl Rule {
    pub fn new(id: impl Into<RuleId>, pattern: &str, weight: Score) -> Result<Self, Error> {
        let id = id.into();
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::PatternError(format!("Rule {:?}: {}", id, e)))?;

        Ok(Self {
            id,
            pattern,
            weight,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn weight(&self) -> Score {
        self.weight
    }

    /// Unanchored search.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// A single rule hit as a byte range of the searched text.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub rule_id: RuleId,
    pub start: usize,
    pub end: usize,
    pub weight: Score,
}

/// An ordered list of independent rules whose weights add up.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule set from `(pattern, weight)` pairs. Each rule's id is its pattern.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn from_patterns(patterns: &[(&str, Score)]) -> Result<Self, Error> {
        let mut rule_set = Self::new();
        for (pattern, weight) in patterns {
            rule_set.add_rule(*pattern, pattern, *weight)?;
        }

        Ok(rule_set)
    }

    pub fn add_rule(
        &mut self,
        id: impl Into<RuleId>,
        pattern: &str,
        weight: Score,
    ) -> Result<(), Error> {
        self.rules.push(Rule::new(id, pattern, weight)?);
        Ok(())
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Adds the weight of every rule whose pattern occurs anywhere in `text`. Each rule counts at
    /// most once; the total is not capped.
    pub fn score(&self, text: &str) -> Score {
        self.rules
            .iter()
            .filter(|rule| rule.is_match(text))
            .map(|rule| rule.weight)
            .sum()
    }

    /// Every occurrence of every rule, grouped in rule order.
    pub fn matches(&self, text: &str) -> Vec<RuleMatch> {
        self.rules
            .iter()
            .flat_map(|rule| {
                rule.pattern.find_iter(text).map(move |found| RuleMatch {
                    rule_id: rule.id.clone(),
                    start: found.start(),
                    end: found.end(),
                    weight: rule.weight,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_add_without_cap() {
        let rules = RuleSet::from_patterns(&[("error", 5.0), ("warning", 3.0)]).unwrap();

        assert_eq!(rules.score("This is an error and a warning"), 8.0);
        assert_eq!(rules.score("just a warning"), 3.0);
        assert_eq!(rules.score("all clear"), 0.0);
    }

    #[test]
    fn test_rule_counts_once_per_text() {
        let rules = RuleSet::from_patterns(&[(r"\berror\b", 5.0)]).unwrap();

        assert_eq!(rules.score("error error error"), 5.0);
        assert_eq!(rules.matches("error error error").len(), 3);
    }

    #[test]
    fn test_overlapping_rules_fire_independently() {
        let rules =
            RuleSet::from_patterns(&[(r"\berror\b", 5.0), ("err", 1.0), (r"^fatal", 10.0)])
                .unwrap();

        assert_eq!(rules.score("an error occurred"), 6.0);
        assert_eq!(rules.score("fatal error"), 16.0);
        assert_eq!(rules.score("not fatal"), 0.0);
    }

    #[test]
    fn test_invalid_pattern_fails_at_registration() {
        let mut rules = RuleSet::new();
        let result = rules.add_rule("broken", "(unclosed", 1.0);

        assert!(matches!(result, Err(Error::PatternError(_))));
        assert!(rules.is_empty());

        assert!(RuleSet::from_patterns(&[("ok", 1.0), ("[", 1.0)]).is_err());
    }

    #[test]
    fn test_matches_report_spans_and_ids() {
        let mut rules = RuleSet::new();
        rules.add_rule("COMPANY_NAME", "(?i)openai", 2.0).unwrap();

        let matches = rules.matches("I work at OpenAI.");
        assert_eq!(
            matches,
            vec![RuleMatch {
                rule_id: "COMPANY_NAME".to_string(),
                start: 10,
                end: 16,
                weight: 2.0,
            }]
        );
        assert_eq!(rules.iter().next().map(|rule| rule.pattern()), Some("(?i)openai"));
    }
}
