//! Combined name matching.
//!
//! Averages two independent signals per pair of names:
//! - A generic string-distance score: the best of Jaro-Winkler,
//!   Sørensen-Dice, and normalized Levenshtein over the raw inputs
//! - The structure-aware score from [`crate::structure`]
//!
//! The result is rounded to two decimals and compared against the
//! matcher's threshold. Group matching extends the pairwise score to an
//! arbitrary-size cluster of names via the mean over all pairs.

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein, sorensen_dice};
use tracing::{debug, trace};

use crate::error::NameMatchError;
use crate::structure::{structural_similarity, PairSimilarity};

/// Default match threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum combined score for two names to count as a match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Result of matching a group of names believed to refer to one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMatchResult {
    /// Mean of all pairwise combined scores, rounded to two decimals.
    pub score: f64,
    /// Every unordered pair in enumeration order.
    pub matches: Vec<PairSimilarity>,
    /// Whether `score` meets the matcher's threshold.
    pub is_match: bool,
}

/// Scores name pairs and groups against a fixed threshold.
///
/// Stateless apart from its configuration; construction is the only
/// fallible operation.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// A matcher with the default threshold of 0.75.
    pub fn new() -> Self {
        Self::default()
    }

    /// A matcher with the given configuration.
    pub fn with_config(config: MatcherConfig) -> Result<Self, NameMatchError> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(NameMatchError::InvalidThreshold(config.threshold));
        }
        Ok(Self { config })
    }

    /// The configured match threshold.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Combined similarity of two names, in [0, 1], rounded to two
    /// decimals. Either input empty scores 0; byte-identical inputs score
    /// 1 before any normalization.
    pub fn similarity(&self, name1: &str, name2: &str) -> f64 {
        if name1.is_empty() || name2.is_empty() {
            return 0.0;
        }
        if name1 == name2 {
            return 1.0;
        }
        let generic = generic_similarity(name1, name2);
        let structural = structural_similarity(name1, name2);
        let score = round_to_2((generic + structural) / 2.0);
        trace!(name1, name2, generic, structural, score, "scored name pair");
        score
    }

    /// Whether two names plausibly denote the same person.
    pub fn is_match(&self, name1: &str, name2: &str) -> bool {
        self.similarity(name1, name2) >= self.config.threshold
    }

    /// Score every unordered pair in `names` and aggregate into one mean
    /// score and match decision. Groups of size zero or one trivially
    /// match with score 1 and no pairs.
    pub fn match_group<S: AsRef<str>>(&self, names: &[S]) -> GroupMatchResult {
        if names.len() <= 1 {
            return GroupMatchResult {
                score: 1.0,
                matches: Vec::new(),
                is_match: true,
            };
        }

        let mut matches = Vec::new();
        let mut total = 0.0;
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let similarity = self.similarity(names[i].as_ref(), names[j].as_ref());
                total += similarity;
                matches.push(PairSimilarity {
                    name1: names[i].as_ref().to_string(),
                    name2: names[j].as_ref().to_string(),
                    similarity,
                });
            }
        }

        let score = round_to_2(total / matches.len() as f64);
        debug!(
            group_size = names.len(),
            pairs = matches.len(),
            score,
            "scored name group"
        );
        GroupMatchResult {
            score,
            matches,
            is_match: score >= self.config.threshold,
        }
    }
}

/// Best of the three generic string-distance metrics over the raw inputs.
fn generic_similarity(name1: &str, name2: &str) -> f64 {
    [
        jaro_winkler(name1, name2),
        sorensen_dice(name1, name2),
        normalized_levenshtein(name1, name2),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Round only at the scorer boundary so strategy scores never compound
/// rounding error.
fn round_to_2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_short_circuit() {
        let matcher = Matcher::new();
        assert_eq!(matcher.similarity("John Smith", "John Smith"), 1.0);
        // Identity applies to the raw bytes, before cleaning.
        assert_eq!(matcher.similarity("  J@hn  ", "  J@hn  "), 1.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let matcher = Matcher::new();
        assert_eq!(matcher.similarity("", "John Smith"), 0.0);
        assert_eq!(matcher.similarity("John Smith", ""), 0.0);
        assert_eq!(matcher.similarity("", ""), 0.0);
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let matcher = Matcher::new();
        let score = matcher.similarity("Robert Johnson", "Bob Johnson");
        assert_eq!(score, (score * 100.0).round() / 100.0);
    }

    #[test]
    fn test_with_config_rejects_bad_thresholds() {
        let err = Matcher::with_config(MatcherConfig { threshold: 1.5 }).unwrap_err();
        assert_eq!(err, NameMatchError::InvalidThreshold(1.5));
        assert!(Matcher::with_config(MatcherConfig { threshold: -0.1 }).is_err());
        assert!(Matcher::with_config(MatcherConfig { threshold: f64::NAN }).is_err());
        assert!(Matcher::with_config(MatcherConfig { threshold: 0.9 }).is_ok());
    }

    #[test]
    fn test_threshold_controls_is_match() {
        let strict = Matcher::with_config(MatcherConfig { threshold: 0.99 }).unwrap();
        let lenient = Matcher::with_config(MatcherConfig { threshold: 0.3 }).unwrap();
        assert!(!strict.is_match("Robert Johnson", "Bob Johnson"));
        assert!(lenient.is_match("Robert Johnson", "Bob Johnson"));
    }

    #[test]
    fn test_match_group_trivial_sizes() {
        let matcher = Matcher::new();
        let empty: [&str; 0] = [];
        let result = matcher.match_group(&empty);
        assert_eq!(result.score, 1.0);
        assert!(result.is_match);
        assert!(result.matches.is_empty());

        let single = ["John Smith"];
        let result = matcher.match_group(&single);
        assert_eq!(result.score, 1.0);
        assert!(result.is_match);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_match_group_pair_count() {
        let matcher = Matcher::new();
        let names = ["A", "B", "C", "D"];
        let result = matcher.match_group(&names);
        assert_eq!(result.matches.len(), 6);
    }

    #[test]
    fn test_generic_similarity_takes_the_max() {
        // Identical strings max out every metric.
        assert_eq!(generic_similarity("smith", "smith"), 1.0);
        // Disjoint strings bottom out.
        assert!(generic_similarity("abc", "xyz") < 0.1);
    }

    #[test]
    fn test_config_deserializes_with_default_threshold() {
        let config: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        let config: MatcherConfig = serde_json::from_str(r#"{"threshold": 0.9}"#).unwrap();
        assert_eq!(config.threshold, 0.9);
    }
}
