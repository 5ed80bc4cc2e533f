use entity_matcher::{
    EntityMatcher, EntityType, EntityValidator, HybridMatcher, MatcherConfig,
    PatternEntityRecognizer, RuleSet,
};
use log::{error, info};

fn run() -> Result<(), entity_matcher::Error> {
    let entity_matcher = EntityMatcher::new(MatcherConfig::default())?;

    let comparisons = [
        (EntityType::Person, "Dr. John Smith", "john smith"),
        (EntityType::Person, "John Smith", "John Doe"),
        (EntityType::Person, "J. Smith", "John Smith"),
        (EntityType::Company, "Acme Corp.", "ACME LLC"),
        (EntityType::Company, "International Business Machines Corp.", "IBM"),
    ];

    for (entity_type, entity_a, entity_b) in comparisons {
        let match_result = entity_matcher.compare(entity_a, entity_b, entity_type);
        info!(
            "{} {:?} vs {:?}: {:.2} {} {:?}",
            entity_type,
            entity_a,
            entity_b,
            match_result.raw_score,
            match_result.classification,
            match_result.contributing_components
        );
    }

    info!("{:?}", entity_matcher.normalizer().cache_stats());

    // Log-severity scoring over free text
    let severity_rules = RuleSet::from_patterns(&[
        (r"\berror\b", 5.0),
        (r"\bwarning\b", 3.0),
        (r"\binfo\b", 1.0),
    ])?;

    let recognizer = PatternEntityRecognizer::from_patterns(&[
        ("ORG", r"\b(?:Apple|OpenAI|Acme)\b"),
        ("GPE", r"\bU\.K\."),
    ])?;

    let hybrid_matcher = HybridMatcher::new(severity_rules, &recognizer);
    let text = "This is an error message from Acme. Check warning.";
    let hybrid_match = hybrid_matcher.match_text(text);
    info!(
        "Rule score {} for {:?}; entities: {:?}",
        hybrid_match.rule_score, text, hybrid_match.entities
    );

    let validator = EntityValidator::new(&recognizer);
    let text = "Apple is looking at buying U.K. startup for $1 billion";
    info!(
        "{:?} contains ORG and GPE: {}",
        text,
        validator.validate(text, &["ORG", "GPE"])
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
