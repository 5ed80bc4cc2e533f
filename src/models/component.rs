use crate::EntityType;
use std::fmt;

/// A named sub-signal of an entity comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    FullName,
    FirstLast,
    MiddleCombinations,
    FirstOnly,
    LastOnly,
    CoreName,
    Acronym,
    StrongTokens,
}

impl Component {
    pub const PERSON_COMPONENTS: [Component; 5] = [
        Component::FullName,
        Component::FirstLast,
        Component::MiddleCombinations,
        Component::FirstOnly,
        Component::LastOnly,
    ];

    pub const COMPANY_COMPONENTS: [Component; 4] = [
        Component::FullName,
        Component::CoreName,
        Component::Acronym,
        Component::StrongTokens,
    ];

    /// Components evaluated for the given entity type.
    pub fn for_entity_type(entity_type: EntityType) -> &'static [Component] {
        match entity_type {
            EntityType::Person => &Self::PERSON_COMPONENTS,
            EntityType::Company => &Self::COMPANY_COMPONENTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::FullName => "full_name",
            Component::FirstLast => "first_last",
            Component::MiddleCombinations => "middle_combinations",
            Component::FirstOnly => "first_only",
            Component::LastOnly => "last_only",
            Component::CoreName => "core_name",
            Component::Acronym => "acronym",
            Component::StrongTokens => "strong_tokens",
        }
    }

    /// Looks up a component by its configuration key. Returns `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Component> {
        match key {
            "full_name" => Some(Component::FullName),
            "first_last" => Some(Component::FirstLast),
            "middle_combinations" => Some(Component::MiddleCombinations),
            "first_only" => Some(Component::FirstOnly),
            "last_only" => Some(Component::LastOnly),
            "core_name" => Some(Component::CoreName),
            "acronym" => Some(Component::Acronym),
            "strong_tokens" => Some(Component::StrongTokens),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
