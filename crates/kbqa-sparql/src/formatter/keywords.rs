//! Keyword casing

use super::config::KeywordCasing;
use regex::Regex;
use std::sync::LazyLock;

/// Keywords normalized to uppercase, in application order.
///
/// OFFSET is listed twice; under [`KeywordCasing::FirstOccurrence`] that
/// upper-cases its first two occurrences.
pub const KEYWORDS: &[&str] = &[
    "SELECT",
    "DISTINCT",
    "WHERE",
    "ASK",
    "UNION",
    "FILTER",
    "CONSTRUCT",
    "LIMIT",
    "OFFSET",
    "COUNT",
    "GROUP",
    "BY",
    "OFFSET",
];

static WORD_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(r"\b{}\b", keyword.to_lowercase());
            (Regex::new(&pattern).expect("valid regex"), *keyword)
        })
        .collect()
});

/// Upper-cases lowercase keyword occurrences according to `casing`.
///
/// # Example
///
/// ```
/// use kbqa_sparql::formatter::{uppercase_keywords, KeywordCasing};
///
/// let text = uppercase_keywords("select ?x limit 1 limit 2", KeywordCasing::FirstOccurrence);
/// assert_eq!(text, "SELECT ?x LIMIT 1 limit 2");
/// ```
pub fn uppercase_keywords(text: &str, casing: KeywordCasing) -> String {
    match casing {
        KeywordCasing::FirstOccurrence => KEYWORDS.iter().fold(text.to_string(), |acc, keyword| {
            acc.replacen(&keyword.to_lowercase(), keyword, 1)
        }),
        KeywordCasing::EveryWord => WORD_REGEXES
            .iter()
            .fold(text.to_string(), |acc, (regex, keyword)| {
                regex.replace_all(&acc, *keyword).into_owned()
            }),
    }
}
