use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The kind of entity a mention names. Selects the normalization rules and the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Person,
    Company,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Company => "COMPANY",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PERSON" => Ok(EntityType::Person),
            "COMPANY" => Ok(EntityType::Company),
            other => Err(Error::ParserError(format!(
                "Unknown entity type: {:?}",
                other
            ))),
        }
    }
}
