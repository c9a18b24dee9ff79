//! Keyword vocabularies and job-description keyword extraction.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Industry terms every technical resume is expected to mention.
pub const COMMON_TECH_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "sql",
    "api",
    "database",
    "cloud",
    "agile",
    "git",
];

/// Verbs that signal ownership and impact in a summary.
pub const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "implemented",
    "managed",
    "created",
    "designed",
    "improved",
    "achieved",
];

/// Filler words dropped from job-description keywords.
///
/// Every entry is shorter than the minimum token length, so the tokenizer already excludes them;
/// job descriptions keep longer function words such as "with" or "your" as keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
    "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old", "see",
    "two", "way", "who", "boy", "did", "let", "put", "say", "she", "too", "use",
];

/// Upper bound on keywords taken from one job description.
pub const MAX_JOB_KEYWORDS: usize = 30;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    // ASCII word boundaries: a letter run glued to digits or '_' is not a word.
    WORD.get_or_init(|| {
        Regex::new(r"(?-u:\b)[a-z]{4,}(?-u:\b)").expect("word pattern is valid")
    })
}

fn stop_words() -> &'static HashSet<&'static str> {
    static STOP: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Extracts candidate keywords from free text.
///
/// Lower-cases, keeps runs of at least four ASCII letters, drops stop words and duplicates
/// (first occurrence wins), then orders longest-first and keeps the top `MAX_JOB_KEYWORDS`.
/// Ties keep their order of appearance.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stop = stop_words();

    let mut seen = HashSet::new();
    let mut keywords: Vec<&str> = word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !stop.contains(*w))
        .filter(|w| seen.insert(*w))
        .collect();

    keywords.sort_by(|a, b| b.len().cmp(&a.len()));
    keywords.truncate(MAX_JOB_KEYWORDS);
    keywords.into_iter().map(str::to_string).collect()
}

/// Vocabulary entries that occur as substrings of `haystack` (already lower-cased).
pub fn present_in<'a>(vocabulary: &[&'a str], haystack: &str) -> Vec<&'a str> {
    vocabulary
        .iter()
        .copied()
        .filter(|kw| haystack.contains(kw))
        .collect()
}
