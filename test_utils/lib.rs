pub mod constants;

use csv::Reader;
use entity_matcher::{Classification, EntityType};
use std::error::Error;

/// A comparison fixture: two mentions plus the classification they are expected to receive.
#[derive(Debug, Clone)]
pub struct EntityPairFixture {
    pub entity_type: EntityType,
    pub entity_a: String,
    pub entity_b: String,
    pub expected_classification: Classification,
}

fn parse_classification(value: &str) -> Result<Classification, Box<dyn Error>> {
    match value.trim() {
        "NO_MATCH" => Ok(Classification::NoMatch),
        "WEAK_MATCH" => Ok(Classification::WeakMatch),
        "STRONG_MATCH" => Ok(Classification::StrongMatch),
        other => Err(format!("Unknown classification: {:?}", other).into()),
    }
}

/// Utility to load comparison fixtures from a CSV file for testing and benchmarking.
pub fn load_entity_pairs_from_file(
    file_path: &str,
) -> Result<Vec<EntityPairFixture>, Box<dyn Error>> {
    let mut fixtures = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        fixtures.push(EntityPairFixture {
            entity_type: record[0].parse()?,
            entity_a: record[1].to_string(),
            entity_b: record[2].to_string(),
            expected_classification: parse_classification(&record[3])?,
        });
    }

    Ok(fixtures)
}
