use entity_matcher::{read_entity_pairs, EntityMatcher, Error, DEFAULT_MATCHER_CONFIG};
use log::{error, warn};
use std::io::{self, Write};

fn run() -> Result<(), Error> {
    // Read `entity_type,entity_a,entity_b` rows from stdin
    let entity_pairs = read_entity_pairs(io::stdin().lock())?;

    let entity_matcher = EntityMatcher::new(DEFAULT_MATCHER_CONFIG)?;

    let config = entity_matcher.config();
    let (accepted_pairs, skipped_pairs): (Vec<_>, Vec<_>) =
        entity_pairs.into_iter().partition(|(_, entity_a, entity_b)| {
            config.accepts_text_length(entity_a) && config.accepts_text_length(entity_b)
        });

    for (entity_type, entity_a, entity_b) in &skipped_pairs {
        warn!(
            "Skipping {} pair {:?} / {:?}: text length outside {}..={}",
            entity_type, entity_a, entity_b, config.min_text_length, config.max_text_length
        );
    }

    let results = entity_matcher.compare_batch(&accepted_pairs);

    let mut stdout = io::stdout().lock();
    for ((entity_type, entity_a, entity_b), match_result) in accepted_pairs.iter().zip(results) {
        writeln!(
            stdout,
            "{}\t{}\t{}\t{:.2}\t{}",
            entity_type, entity_a, entity_b, match_result.raw_score, match_result.classification
        )?;
    }
    stdout.flush()?;

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
