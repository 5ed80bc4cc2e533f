pub const TEST_ENTITY_PAIRS_CSV_PATH: &str = "tests/test_data_files/entity_pairs.csv";
