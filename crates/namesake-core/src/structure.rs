//! Structure-aware name similarity.
//!
//! Scores a pair of names with four independent heuristics and keeps the
//! best single signal:
//! - Exact match on the normalized string, or on last name plus a shared
//!   first-name variation (nicknames count)
//! - Jaccard overlap of the comparison token sets
//! - First/last initial agreement
//! - Normalized edit distance between the normalized strings

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strsim::normalized_levenshtein;

use crate::normalize::{parse_name, ParsedName};
use crate::tables::{first_name_candidates, PREFIXES, STOPWORDS, SUFFIXES};

// Heuristic constants, kept from the original scoring model. Tunable,
// not load-bearing.
const FIRST_LAST_EXACT_SCORE: f64 = 0.9;
const BOTH_INITIALS_SCORE: f64 = 0.7;
const FIRST_INITIAL_ONLY_SCORE: f64 = 0.4;

/// A parsed name prepared for structural comparison.
#[derive(Debug, Clone)]
pub struct NameStructure {
    /// The underlying parsed name.
    pub parsed: ParsedName,
    /// Normalized tokens minus stopwords, prefixes, and suffixes.
    pub tokens: HashSet<String>,
    /// Nickname-expanded forms of the first name, the first name included.
    pub first_name_variations: Vec<String>,
}

impl NameStructure {
    pub fn new(name: &str) -> Self {
        let parsed = parse_name(name);
        let tokens = parsed
            .normalized
            .split_whitespace()
            .filter(|t| !STOPWORDS.contains(*t) && !PREFIXES.contains(*t) && !SUFFIXES.contains(*t))
            .map(str::to_string)
            .collect();
        let first_name_variations = first_name_candidates(&parsed.first_name);
        Self {
            parsed,
            tokens,
            first_name_variations,
        }
    }

    /// Best score across the four heuristics.
    pub fn similarity(&self, other: &NameStructure) -> f64 {
        [
            exact_match_score(self, other),
            token_set_score(self, other),
            initials_score(self, other),
            edit_distance_score(self, other),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

/// Structural similarity between two raw name strings, in [0, 1].
pub fn structural_similarity(name1: &str, name2: &str) -> f64 {
    NameStructure::new(name1).similarity(&NameStructure::new(name2))
}

/// Similarity of one enumerated name pair within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSimilarity {
    pub name1: String,
    pub name2: String,
    pub similarity: f64,
}

/// Structural group score: unrounded mean over all pairwise comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSimilarity {
    pub score: f64,
    pub matches: Vec<PairSimilarity>,
}

/// Pairwise structural scores for a group of names believed to refer to
/// one person. Groups of size zero or one trivially score 1 with no pairs.
pub fn match_name_group<S: AsRef<str>>(names: &[S]) -> GroupSimilarity {
    if names.len() <= 1 {
        return GroupSimilarity {
            score: 1.0,
            matches: Vec::new(),
        };
    }

    let structures: Vec<NameStructure> = names
        .iter()
        .map(|name| NameStructure::new(name.as_ref()))
        .collect();

    let mut matches = Vec::new();
    let mut total = 0.0;
    for i in 0..structures.len() {
        for j in (i + 1)..structures.len() {
            let similarity = structures[i].similarity(&structures[j]);
            total += similarity;
            matches.push(PairSimilarity {
                name1: names[i].as_ref().to_string(),
                name2: names[j].as_ref().to_string(),
                similarity,
            });
        }
    }

    GroupSimilarity {
        score: total / matches.len() as f64,
        matches,
    }
}

/// 1.0 on identical normalized strings; 0.9 on equal last names with a
/// shared first-name variation when both names carry a first and last name.
fn exact_match_score(a: &NameStructure, b: &NameStructure) -> f64 {
    if a.parsed.normalized == b.parsed.normalized {
        return 1.0;
    }
    let complete = !a.parsed.first_name.is_empty()
        && !a.parsed.last_name.is_empty()
        && !b.parsed.first_name.is_empty()
        && !b.parsed.last_name.is_empty();
    if complete
        && a.parsed.last_name == b.parsed.last_name
        && a.first_name_variations
            .iter()
            .any(|v| b.first_name_variations.contains(v))
    {
        return FIRST_LAST_EXACT_SCORE;
    }
    0.0
}

/// Jaccard similarity of the token sets; 0 when the union is empty.
fn token_set_score(a: &NameStructure, b: &NameStructure) -> f64 {
    let union = a.tokens.union(&b.tokens).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.tokens.intersection(&b.tokens).count();
    intersection as f64 / union as f64
}

/// 0.7 when first and last initials both agree, 0.4 when only the first
/// initials do. A structure with no comparison tokens never scores; an
/// empty initial only matches another empty initial.
fn initials_score(a: &NameStructure, b: &NameStructure) -> f64 {
    if a.tokens.is_empty() || b.tokens.is_empty() {
        return 0.0;
    }
    if a.parsed.initials.first != b.parsed.initials.first {
        return 0.0;
    }
    if a.parsed.initials.last == b.parsed.initials.last {
        BOTH_INITIALS_SCORE
    } else {
        FIRST_INITIAL_ONLY_SCORE
    }
}

/// 1 - levenshtein / max-length over the normalized strings, with the
/// empty cases pinned: two empty strings score 1, one empty string scores 0.
fn edit_distance_score(a: &NameStructure, b: &NameStructure) -> f64 {
    let s1 = &a.parsed.normalized;
    let s2 = &b.parsed.normalized;
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(s1, s2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_drop_stopwords_prefixes_suffixes() {
        let structure = NameStructure::new("Dr. Ludwig van Beethoven Jr.");
        let tokens: HashSet<&str> = structure.tokens.iter().map(String::as_str).collect();
        assert_eq!(tokens, HashSet::from(["ludwig", "beethoven"]));
    }

    #[test]
    fn test_exact_match_full() {
        assert_eq!(structural_similarity("John Smith", "Smith, John"), 1.0);
    }

    #[test]
    fn test_honorifics_leave_first_and_last_intact() {
        // Normalized strings differ ("dr john smith" vs "john smith md"),
        // so this lands on the first/last branch, not the full match.
        let score = structural_similarity("Dr. John Smith", "John Smith MD");
        assert_eq!(score, FIRST_LAST_EXACT_SCORE);
    }

    #[test]
    fn test_first_last_match_with_middle_difference() {
        let score = structural_similarity("John William Smith", "John Smith");
        assert_eq!(score, FIRST_LAST_EXACT_SCORE);
    }

    #[test]
    fn test_first_last_match_through_nickname() {
        let a = NameStructure::new("Robert Johnson");
        let b = NameStructure::new("Bob Johnson");
        assert_eq!(exact_match_score(&a, &b), FIRST_LAST_EXACT_SCORE);
    }

    #[test]
    fn test_token_set_score() {
        let a = NameStructure::new("aaron charles donovan");
        let b = NameStructure::new("donovan aaron charles");
        assert_eq!(token_set_score(&a, &b), 1.0);

        let c = NameStructure::new("aaron donovan");
        let score = token_set_score(&a, &c);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_score_empty_union() {
        let a = NameStructure::new("");
        let b = NameStructure::new("");
        assert_eq!(token_set_score(&a, &b), 0.0);
    }

    #[test]
    fn test_initials_score_full_and_partial() {
        let a = NameStructure::new("John Smith");
        let b = NameStructure::new("James Smith");
        assert_eq!(initials_score(&a, &b), BOTH_INITIALS_SCORE);

        let c = NameStructure::new("James Stone");
        assert_eq!(initials_score(&a, &c), BOTH_INITIALS_SCORE);

        let d = NameStructure::new("James Doe");
        assert_eq!(initials_score(&a, &d), FIRST_INITIAL_ONLY_SCORE);

        let e = NameStructure::new("Robert Smith");
        assert_eq!(initials_score(&a, &e), 0.0);
    }

    #[test]
    fn test_initials_score_requires_tokens() {
        let a = NameStructure::new("Dr.");
        let b = NameStructure::new("John Smith");
        assert_eq!(initials_score(&a, &b), 0.0);
    }

    #[test]
    fn test_edit_distance_score_guards() {
        let empty = NameStructure::new("");
        let named = NameStructure::new("John Smith");
        assert_eq!(edit_distance_score(&empty, &empty), 1.0);
        assert_eq!(edit_distance_score(&empty, &named), 0.0);
        assert_eq!(edit_distance_score(&named, &named), 1.0);
    }

    #[test]
    fn test_similarity_takes_the_best_strategy() {
        // Exact match scores 0 (different first names, reordered string)
        // but full token overlap wins.
        assert_eq!(
            structural_similarity("Aaron Charles Donovan", "Donovan Aaron Charles"),
            1.0
        );
    }

    #[test]
    fn test_match_name_group_trivial() {
        let empty: [&str; 0] = [];
        assert_eq!(match_name_group(&empty).score, 1.0);
        let single = ["John Smith"];
        let result = match_name_group(&single);
        assert_eq!(result.score, 1.0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_match_name_group_enumeration_order() {
        let names = ["A B", "C D", "E F"];
        let result = match_name_group(&names);
        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.matches[0].name1, "A B");
        assert_eq!(result.matches[0].name2, "C D");
        assert_eq!(result.matches[1].name1, "A B");
        assert_eq!(result.matches[1].name2, "E F");
        assert_eq!(result.matches[2].name1, "C D");
        assert_eq!(result.matches[2].name2, "E F");
    }
}
