//! Function words that are never translated
//!
//! Articles, pronouns, auxiliaries and the like carry no argot equivalent,
//! and keeping them out of the lookup maps stops them from matching gloss
//! text such as "a thief" or "the house".

use crate::language::Language;
use std::collections::HashSet;
use std::sync::OnceLock;

pub type StopWords = HashSet<&'static str>;

const ENGLISH: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "must", "shall", "can", "need", "dare", "ought", "used",
    "it", "its", "he", "she", "they", "them", "their", "his", "her", "him",
    "we", "us", "our", "you", "your", "i", "me", "my", "mine",
    "this", "that", "these", "those", "what", "which", "who", "whom", "whose",
    "where", "when", "why", "how", "all", "each", "every", "both", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "also", "now",
    "and", "but", "or", "if", "then", "else", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "once", "here", "there", "any", "let", "get", "got",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "au", "aux",
    "ce", "cet", "cette", "ces", "mon", "ma", "mes", "ton", "ta", "tes",
    "son", "sa", "ses", "notre", "nos", "votre", "vos", "leur", "leurs",
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles",
    "me", "te", "se", "lui", "eux", "moi", "toi", "soi",
    "qui", "que", "quoi", "dont", "où", "lequel", "laquelle", "lesquels",
    "est", "sont", "était", "été", "être", "avoir", "avait", "ont", "eu",
    "fait", "faire", "dit", "dire", "peut", "pouvoir", "doit", "devoir",
    "et", "ou", "mais", "donc", "car", "ni", "or", "puis", "ensuite",
    "si", "quand", "comme", "pour", "par", "sur", "sous", "dans", "en",
    "avec", "sans", "chez", "vers", "entre", "avant", "après", "pendant",
    "plus", "moins", "très", "bien", "mal", "peu", "trop", "assez",
    "ne", "pas", "point", "jamais", "rien", "personne", "aucun",
    "tout", "tous", "toute", "toutes", "même", "autre", "autres",
    "ici", "là", "ceci", "cela", "oui", "non",
];

/// The stop-word set of a language
pub fn stop_words(language: Language) -> &'static StopWords {
    static ENGLISH_SET: OnceLock<StopWords> = OnceLock::new();
    static FRENCH_SET: OnceLock<StopWords> = OnceLock::new();

    match language {
        Language::English => ENGLISH_SET.get_or_init(|| ENGLISH.iter().copied().collect()),
        Language::French => FRENCH_SET.get_or_init(|| FRENCH.iter().copied().collect()),
    }
}

/// Check whether an already-lowercased word is a stop word
pub fn is_stop_word(word: &str, language: Language) -> bool {
    stop_words(language).contains(word)
}
