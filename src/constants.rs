use crate::models::{CompanyWeights, MatcherConfig, PersonWeights, ThresholdPair, WeightTable};

/// Honorific and professional titles stripped from person names.
pub const PERSON_TITLES: &[&str] = &[
    "mr",
    "mrs",
    "ms",
    "dr",
    "prof",
    "sir",
    "lady",
    "lord",
    "king",
    "queen",
    "prince",
    "princess",
    "judge",
    "senator",
    "governor",
    "mayor",
    "commissioner",
    "general",
    "colonel",
    "captain",
    "lieutenant",
    "sergeant",
    "officer",
    "reverend",
    "bishop",
    "rabbi",
    "imam",
    "fr",
    "esq",
];

/// Legal-form suffixes stripped from company names. Entries containing a period are matched
/// literally (e.g. `s.r.l`).
pub const COMPANY_SUFFIXES: &[&str] = &[
    "pvt",
    "ltd",
    "llc",
    "inc",
    "corp",
    "corporation",
    "company",
    "co",
    "lp",
    "llp",
    "pa",
    "pllc",
    "a.g",
    "gmbh",
    "sa",
    "sarl",
    "limited",
    "plc",
    "nv",
    "bv",
    "ag",
    "kft",
    "spd",
    "sp.a",
    "s.r.l",
    "pte",
    "pty",
];

/// Maximum number of distinct inputs remembered per normalization transformation.
pub const DEFAULT_CACHE_SIZE: usize = 10_000;

/// Minimum token-set Jaccard ratio for the company `strong_tokens` component to fire.
pub const STRONG_TOKEN_RATIO: f32 = 0.5;

/// Upper bound on pipeline re-application while normalizing toward a fixed point.
pub const MAX_NORMALIZATION_PASSES: usize = 8;

pub const DEFAULT_PERSON_WEIGHTS: PersonWeights = PersonWeights {
    full_name: 1.0,
    first_last: 0.9,
    middle_combinations: 0.75,
    first_only: 0.4,
    last_only: 0.6,
};

pub const DEFAULT_COMPANY_WEIGHTS: CompanyWeights = CompanyWeights {
    full_name: 1.0,
    core_name: 0.9,
    acronym: 0.85,
    strong_tokens: 0.5,
};

pub const DEFAULT_THRESHOLDS: ThresholdPair = ThresholdPair {
    weak_threshold: 0.6,
    strong_threshold: 0.9,
};

pub const DEFAULT_MATCHER_CONFIG: MatcherConfig = MatcherConfig {
    weights: WeightTable {
        person: DEFAULT_PERSON_WEIGHTS,
        company: DEFAULT_COMPANY_WEIGHTS,
    },
    thresholds: DEFAULT_THRESHOLDS,
    cache_size: DEFAULT_CACHE_SIZE,
    min_text_length: 2,
    max_text_length: 500,
    parallel_workers: 4,
};
