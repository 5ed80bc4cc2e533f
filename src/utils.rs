pub mod jaccard_similarity_tokens;
pub mod read_entity_pairs;
pub mod tokenize;

pub use jaccard_similarity_tokens::jaccard_similarity_tokens;
pub use read_entity_pairs::read_entity_pairs;
pub use tokenize::{extract_first_last, initials, middle_tokens, tokenize};
