//! Lookup map construction
//!
//! The forward map sends a lowercase natural-language word to its argot
//! candidates. It is seeded from the table's explicit rows and then extended
//! with every content word harvested from the argot glosses, so that
//! "prig: A thief" also makes `thief` translate to `prig`.
//!
//! The reverse map sends a lowercase argot term (possibly several words) to
//! its natural-language meanings.
//!
//! Both maps iterate in insertion order, which fixes the outcome of the
//! partial-match fallback in the matcher.

use cant::{Language, TermTable, is_stop_word};
use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

/// Natural-language word → argot candidates, first preferred
pub type ForwardMap = IndexMap<String, Vec<String>>;

/// Argot term or phrase → natural-language meanings, first preferred
pub type ReverseMap = IndexMap<String, Vec<String>>;

/// Gloss words shorter than this never become keys
pub const MIN_GLOSS_WORD_LEN: usize = 3;

/// Turns gloss text into candidate lookup keys for one language
struct GlossNormalizer {
    separators: Regex,
    strip: Regex,
}

impl GlossNormalizer {
    fn new(language: Language) -> Self {
        GlossNormalizer {
            separators: Regex::new(language.gloss_split_pattern())
                .expect("gloss separator pattern is valid"),
            strip: Regex::new(language.gloss_strip_pattern())
                .expect("gloss strip pattern is valid"),
        }
    }

    /// Lowercased gloss words with every out-of-alphabet character removed
    fn words(&self, gloss: &str) -> Vec<String> {
        let lower = gloss.to_lowercase();
        self.separators
            .split(&lower)
            .map(|word| self.strip.replace_all(word, "").into_owned())
            .filter(|word| !word.is_empty())
            .collect()
    }
}

/// Build the natural-language → argot map for a table
///
/// Explicit rows go in first, so their candidates always lead the list for
/// their key. Gloss words of at least three characters are then merged in,
/// appending the headword to an existing key or creating a new one. Stop
/// words are never keys.
pub fn build_forward_map(table: &TermTable) -> ForwardMap {
    let language = table.language;
    let mut map = ForwardMap::new();

    for explicit in &table.explicit {
        let key = explicit.word.trim().to_lowercase();
        if key.is_empty() || explicit.terms.is_empty() || is_stop_word(&key, language) {
            continue;
        }
        // A repeated explicit word replaces the earlier row in place
        map.insert(key, explicit.terms.clone());
    }
    let explicit_keys = map.len();

    let normalizer = GlossNormalizer::new(language);
    for entry in &table.entries {
        if entry.term.trim().is_empty() {
            continue;
        }
        for meaning in &entry.meanings {
            for word in normalizer.words(meaning) {
                if !is_gloss_key(&word, language) {
                    continue;
                }
                let candidates = map.entry(word).or_default();
                if !candidates.contains(&entry.term) {
                    candidates.push(entry.term.clone());
                }
            }
        }
    }

    debug!(
        "Built {} forward map: {} keys ({} explicit)",
        table.language,
        map.len(),
        explicit_keys
    );
    map
}

fn is_gloss_key(word: &str, language: Language) -> bool {
    word.chars().count() >= MIN_GLOSS_WORD_LEN && !is_stop_word(word, language)
}

/// Build the argot → natural-language map for a table
///
/// Keys are the lowercased headwords as written, internal spaces included.
/// A headword listed more than once merges its meanings without duplicates.
pub fn build_reverse_map(table: &TermTable) -> ReverseMap {
    let mut map = ReverseMap::new();

    for entry in &table.entries {
        let key = entry.term.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let meanings = map.entry(key).or_default();
        for meaning in &entry.meanings {
            if !meanings.contains(meaning) {
                meanings.push(meaning.clone());
            }
        }
    }

    debug!("Built {} reverse map: {} keys", table.language, map.len());
    map
}
