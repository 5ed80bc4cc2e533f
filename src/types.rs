use std::collections::BTreeMap;

use crate::models::Component;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the whitespace-delimited units of a
/// normalized entity name.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A weight or score contribution. Component weights and thresholds live in `[0, 1]`; rule
/// weights are unbounded.
pub type Score = f32;

/// The components that fired for a single comparison, keyed by component. Components that did
/// not fire are absent and count as `0.0` during aggregation.
pub type ComponentScores = BTreeMap<Component, Score>;

/// Identifies a registered rule within a `RuleSet`.
pub type RuleId = String;

/// A label attached to a recognized entity span (e.g. `ORG`, `PERSON`).
pub type EntityLabel = String;

/// A single comparison unit: two raw mentions and the entity type they are compared as.
pub type EntityPair = (crate::EntityType, String, String);
