//! namesake-core: person-name normalization and similarity matching
//!
//! Decides whether two (or a whole group of) personal name strings
//! plausibly denote the same individual, tolerating the variation real
//! names show in the wild:
//! - Reordered "Last, First" input
//! - Nicknames (Robert / Bob, William / Bill)
//! - Initials and dropped middle names
//! - Honorific prefixes and generational/credential suffixes
//! - Compound and hyphenated surnames
//!
//! The pipeline parses each name into structured components, scores the
//! pair with four structure-aware heuristics (best signal wins), averages
//! that with a generic string-distance score, and compares the result
//! against a configurable threshold. Everything is pure, synchronous
//! computation over the inputs plus fixed reference tables; degenerate
//! input never raises an error.
//!
//! ```
//! use namesake_core::{is_match, Matcher, MatcherConfig};
//!
//! assert!(is_match("John Smith", "Smith, John"));
//! assert!(is_match("Robert Johnson", "Bob Johnson"));
//! assert!(!is_match("John Smith", "James Smith"));
//!
//! let strict = Matcher::with_config(MatcherConfig { threshold: 0.9 }).unwrap();
//! assert!(strict.is_match("John Smith", "Smith, John"));
//! ```

pub mod error;
pub mod matcher;
pub mod normalize;
pub mod structure;
mod tables;

pub use error::NameMatchError;
pub use matcher::{GroupMatchResult, Matcher, MatcherConfig, DEFAULT_THRESHOLD};
pub use normalize::{
    clean_name, name_variations, normalize_name_order, parse_name, standardize_name, NameInitials,
    ParsedName,
};
pub use structure::{
    match_name_group, structural_similarity, GroupSimilarity, NameStructure, PairSimilarity,
};

/// Combined similarity of two names using a default-configured matcher.
pub fn similarity(name1: &str, name2: &str) -> f64 {
    Matcher::new().similarity(name1, name2)
}

/// Match decision for two names using a default-configured matcher.
pub fn is_match(name1: &str, name2: &str) -> bool {
    Matcher::new().is_match(name1, name2)
}

/// Group-consistency result for a cluster of names using a
/// default-configured matcher.
pub fn match_group<S: AsRef<str>>(names: &[S]) -> GroupMatchResult {
    Matcher::new().match_group(names)
}
