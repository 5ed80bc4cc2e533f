use crate::types::EntityPair;
use crate::{EntityType, Error};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
}

/// Reads comparison rows from CSV with the header `entity_type,entity_a,entity_b`. Additional
/// columns are ignored.
pub fn read_entity_pairs<R: Read>(reader: R) -> Result<Vec<EntityPair>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let entity_type_index = column_index(&headers, "entity_type")?;
    let entity_a_index = column_index(&headers, "entity_a")?;
    let entity_b_index = column_index(&headers, "entity_b")?;

    let mut entity_pairs = Vec::new();

    for (row_index, record) in reader.records().enumerate() {
        let record = record?;

        let field = |index: usize, name: &str| {
            record.get(index).ok_or_else(|| {
                Error::ParserError(format!("Row {}: missing '{}' field", row_index + 1, name))
            })
        };

        let entity_type: EntityType = field(entity_type_index, "entity_type")?.parse()?;
        let entity_a = field(entity_a_index, "entity_a")?.to_string();
        let entity_b = field(entity_b_index, "entity_b")?.to_string();

        entity_pairs.push((entity_type, entity_a, entity_b));
    }

    Ok(entity_pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_rows_in_order() {
        let csv = "entity_type,entity_a,entity_b\nperson,Dr. John Smith,John Smith\ncompany,\"Acme, Inc.\",Acme\n";
        let pairs = read_entity_pairs(Cursor::new(csv)).unwrap();

        assert_eq!(
            pairs,
            vec![
                (
                    EntityType::Person,
                    "Dr. John Smith".to_string(),
                    "John Smith".to_string()
                ),
                (
                    EntityType::Company,
                    "Acme, Inc.".to_string(),
                    "Acme".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_missing_column_is_a_parser_error() {
        let csv = "entity_type,entity_a\nperson,John\n";
        assert!(matches!(
            read_entity_pairs(Cursor::new(csv)),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_ragged_row_is_a_parser_error() {
        let csv = "entity_type,entity_a,entity_b\nperson,John Smith\n";
        assert!(matches!(
            read_entity_pairs(Cursor::new(csv)),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_unknown_entity_type_is_a_parser_error() {
        let csv = "entity_type,entity_a,entity_b\nplace,Paris,Paris\n";
        assert!(matches!(
            read_entity_pairs(Cursor::new(csv)),
            Err(Error::ParserError(_))
        ));
    }
}
