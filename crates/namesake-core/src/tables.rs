//! Fixed reference tables for name classification.
//!
//! All tables are process-wide constants built once on first use and never
//! mutated, so they are safe to share across threads without locking.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Honorific tokens stripped before first/middle/last assignment.
const PREFIX_WORDS: [&str; 22] = [
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "professor", "rev", "reverend", "hon", "sir",
    "dame", "lord", "lady", "capt", "col", "gen", "lt", "sgt", "maj", "fr",
];

/// Generational and credential tokens stripped before first/middle/last
/// assignment. Classification is by exact match, so a literal name token
/// equal to one of these (e.g. "jr") is always treated as a suffix.
const SUFFIX_WORDS: [&str; 16] = [
    "jr", "sr", "ii", "iii", "iv", "v", "esq", "esquire", "phd", "md", "jd", "dds", "dvm", "rn",
    "cpa", "mba",
];

/// Surname particles and glue words excluded from token-set comparison.
/// These are not prefixes or suffixes and still take part in
/// first/middle/last assignment.
const STOPWORD_LIST: [&str; 17] = [
    "van", "von", "der", "den", "de", "del", "della", "di", "da", "dos", "das", "la", "le", "el",
    "the", "of", "and",
];

/// Formal first name -> common nicknames.
const NICKNAME_ENTRIES: [(&str, &[&str]); 36] = [
    ("william", &["will", "bill", "billy", "willy"]),
    ("robert", &["rob", "bob", "bobby", "robbie"]),
    ("richard", &["rick", "rich", "dick", "richie"]),
    ("james", &["jim", "jimmy", "jamie"]),
    ("john", &["jack", "johnny", "jon"]),
    ("joseph", &["joe", "joey"]),
    ("thomas", &["tom", "tommy"]),
    ("charles", &["charlie", "chuck", "chas"]),
    ("christopher", &["chris", "topher"]),
    ("daniel", &["dan", "danny"]),
    ("matthew", &["matt", "matty"]),
    ("michael", &["mike", "mikey", "mick"]),
    ("nicholas", &["nick", "nicky"]),
    ("anthony", &["tony"]),
    ("andrew", &["andy", "drew"]),
    ("edward", &["ed", "eddie", "ted", "teddy"]),
    ("david", &["dave", "davey"]),
    ("donald", &["don", "donny"]),
    ("kenneth", &["ken", "kenny"]),
    ("ronald", &["ron", "ronnie"]),
    ("steven", &["steve"]),
    ("stephen", &["steve"]),
    ("lawrence", &["larry"]),
    ("gerald", &["jerry", "gerry"]),
    ("timothy", &["tim", "timmy"]),
    ("gregory", &["greg"]),
    ("jeffrey", &["jeff"]),
    ("benjamin", &["ben", "benny"]),
    ("samuel", &["sam", "sammy"]),
    ("alexander", &["alex", "xander"]),
    ("patricia", &["pat", "patty", "trish"]),
    ("elizabeth", &["liz", "beth", "betty", "eliza", "lizzie"]),
    ("margaret", &["maggie", "meg", "peggy"]),
    ("katherine", &["kate", "katie", "kathy", "kat"]),
    ("jennifer", &["jen", "jenny"]),
    ("susan", &["sue", "susie"]),
];

lazy_static! {
    /// Recognized honorific prefixes.
    pub static ref PREFIXES: HashSet<&'static str> = PREFIX_WORDS.iter().copied().collect();

    /// Recognized generational/credential suffixes.
    pub static ref SUFFIXES: HashSet<&'static str> = SUFFIX_WORDS.iter().copied().collect();

    /// Stopwords excluded from token-set comparison.
    pub static ref STOPWORDS: HashSet<&'static str> = STOPWORD_LIST.iter().copied().collect();

    /// Formal name -> nicknames.
    pub static ref NICKNAMES: HashMap<&'static str, &'static [&'static str]> =
        NICKNAME_ENTRIES.iter().copied().collect();

    /// Nickname -> formal names. One nickname can resolve to several
    /// formals (steve -> steven, stephen).
    pub static ref NICKNAME_TO_FORMALS: HashMap<&'static str, Vec<&'static str>> = {
        let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for (formal, nicknames) in NICKNAME_ENTRIES {
            for &nickname in nicknames {
                map.entry(nickname).or_default().push(formal);
            }
        }
        map
    };
}

/// Expand a first name into its comparison candidates: the name itself,
/// its nicknames if it is a recognized formal name, and the formal names
/// it abbreviates if it is a recognized nickname. Ordered, deduplicated,
/// first-seen wins.
pub fn first_name_candidates(first_name: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !name.is_empty() && !candidates.iter().any(|c| c.as_str() == name) {
            candidates.push(name.to_string());
        }
    };

    push(first_name);
    if let Some(nicknames) = NICKNAMES.get(first_name) {
        for &nickname in *nicknames {
            push(nickname);
        }
    }
    if let Some(formals) = NICKNAME_TO_FORMALS.get(first_name) {
        for &formal in formals {
            push(formal);
        }
    }
    candidates
}
