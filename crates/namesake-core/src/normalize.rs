//! Name normalization and parsing.
//!
//! Turns a free-text person name into a structured [`ParsedName`]:
//! - Cleans punctuation, case, and diacritics
//! - Rewrites "Last, First" input into "First Last" order
//! - Classifies honorific prefixes and generational/credential suffixes
//! - Assigns first/middle/last names and derives initials
//! - Expands recognized nicknames into comparison variations

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::tables::{first_name_candidates, PREFIXES, SUFFIXES};

/// First-character initials derived from the assigned name parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameInitials {
    /// First character of the first name, or empty.
    pub first: String,
    /// First characters of each middle name, concatenated in order.
    pub middle: String,
    /// First character of the last name, or empty.
    pub last: String,
}

/// A person name parsed into structured components.
///
/// `first_name`, `middle_names`, and `last_name` partition exactly the
/// tokens of `normalized` that are not classified as a prefix or suffix,
/// preserving input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedName {
    /// The input string, unmodified.
    pub original: String,
    /// Lowercased, punctuation stripped, whitespace collapsed and trimmed.
    pub cleaned: String,
    /// `cleaned` with "Last, First" input rewritten to "First Last".
    pub normalized: String,
    /// Recognized honorific tokens, in order of appearance.
    pub prefixes: Vec<String>,
    /// Recognized generational/credential tokens, in order of appearance.
    pub suffixes: Vec<String>,
    /// First remaining token, or empty.
    pub first_name: String,
    /// Remaining tokens strictly between first and last.
    pub middle_names: Vec<String>,
    /// Last remaining token when more than one remains, else empty.
    pub last_name: String,
    /// Derived initials.
    pub initials: NameInitials,
}

/// Clean a raw name for comparison.
///
/// Folds diacritics to their ASCII base letter, lowercases, keeps
/// alphanumerics, underscores, apostrophes, and hyphens, replaces every
/// other character with a space, then collapses and trims whitespace.
/// Empty input yields an empty string.
pub fn clean_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.nfkd().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '\'' || ch == '-' {
            out.push(ch);
        } else if !is_combining_mark(ch) {
            // Punctuation and whitespace alike become a single space;
            // combining marks left over from NFKD are dropped so folding
            // never splits a word.
            out.push(' ');
        }
    }
    collapse_whitespace(&out).trim().to_string()
}

/// Parse a raw name into its structured components.
///
/// Input containing a comma is treated as "Last, First": the first two
/// comma segments are swapped before cleaning. Segments after a second
/// comma do not participate. Empty input yields a `ParsedName` with every
/// field empty.
pub fn parse_name(input: &str) -> ParsedName {
    if input.is_empty() {
        return ParsedName::default();
    }

    let cleaned = clean_name(input);
    let normalized = clean_name(&reorder_comma_form(input));

    let mut prefixes = Vec::new();
    let mut suffixes = Vec::new();
    let mut main_parts: Vec<String> = Vec::new();
    for token in normalized.split_whitespace() {
        let key = token.trim_end_matches('.');
        if PREFIXES.contains(key) {
            prefixes.push(key.to_string());
        } else if SUFFIXES.contains(key) {
            suffixes.push(key.to_string());
        } else {
            main_parts.push(token.to_string());
        }
    }

    let first_name = main_parts.first().cloned().unwrap_or_default();
    let last_name = if main_parts.len() > 1 {
        main_parts.last().cloned().unwrap_or_default()
    } else {
        String::new()
    };
    let middle_names: Vec<String> = if main_parts.len() > 2 {
        main_parts[1..main_parts.len() - 1].to_vec()
    } else {
        Vec::new()
    };

    let initials = NameInitials {
        first: first_char(&first_name),
        middle: middle_names.iter().map(|m| first_char(m)).collect(),
        last: first_char(&last_name),
    };

    ParsedName {
        original: input.to_string(),
        cleaned,
        normalized,
        prefixes,
        suffixes,
        first_name,
        middle_names,
        last_name,
        initials,
    }
}

/// Reconstruct "first [middle...] last" from the parsed structure,
/// discarding prefixes and suffixes and restoring canonical order.
pub fn standardize_name(input: &str) -> String {
    let parsed = parse_name(input);
    joined_form(&parsed.first_name, &parsed.middle_names, &parsed.last_name)
}

/// Ordered, deduplicated comparison variants of a name.
///
/// Starts from the standardized form, then for every first-name candidate
/// (the parsed first name, its nicknames, and the formal names it
/// abbreviates) emits the full form, a middle-initials form when middle
/// names exist, and a first-last form with middle names dropped.
pub fn name_variations(input: &str) -> Vec<String> {
    let parsed = parse_name(input);
    let standardized = joined_form(&parsed.first_name, &parsed.middle_names, &parsed.last_name);
    if standardized.is_empty() {
        return Vec::new();
    }

    let mut variations = vec![standardized];
    let mut push = |variant: String| {
        if !variations.contains(&variant) {
            variations.push(variant);
        }
    };

    for candidate in first_name_candidates(&parsed.first_name) {
        push(joined_form(&candidate, &parsed.middle_names, &parsed.last_name));
        if !parsed.middle_names.is_empty() {
            push(joined_form(
                &candidate,
                std::slice::from_ref(&parsed.initials.middle),
                &parsed.last_name,
            ));
        }
        push(joined_form(&candidate, &[], &parsed.last_name));
    }
    variations
}

/// The reordering and cleaning step alone: `parse_name(input).normalized`.
pub fn normalize_name_order(input: &str) -> String {
    parse_name(input).normalized
}

/// Rewrite "Last, First" raw input to "First Last" using the first two
/// comma segments. Input without a comma is returned unchanged.
fn reorder_comma_form(input: &str) -> String {
    if !input.contains(',') {
        return input.to_string();
    }
    let segments: Vec<&str> = input.split(',').collect();
    format!("{} {}", segments[1].trim(), segments[0].trim())
}

fn joined_form(first: &str, middles: &[String], last: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(middles.len() + 2);
    if !first.is_empty() {
        parts.push(first);
    }
    for middle in middles {
        if !middle.is_empty() {
            parts.push(middle);
        }
    }
    if !last.is_empty() {
        parts.push(last);
    }
    parts.join(" ")
}

fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

/// Collapse runs of whitespace into a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }
    result
}
