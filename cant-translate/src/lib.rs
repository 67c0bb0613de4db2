//! Phrase translation for Thieves' Cant and French argot
//!
//! Translation is deterministic table lookup, not machine translation: the
//! input is tokenized, each word (or, towards natural language, each run of
//! up to four words) is looked up in maps derived from a term table, and the
//! tokens are joined back together with whitespace, punctuation and
//! capitalization preserved.
//!
//! # Workflow Example
//!
//! ```ignore
//! use cant::{Language, builtin_table};
//! use cant_translate::{Dictionary, Direction};
//!
//! let dictionary = Dictionary::new(builtin_table(Language::English)?);
//!
//! let translation = dictionary.translate("The thief stole money at night", Direction::ToArgot);
//! assert_eq!(translation.output, "The prig stole blunt at darkmans");
//!
//! let translation = dictionary.translate("Bene darkmans, cove", Direction::ToNatural);
//! assert_eq!(translation.output, "Good night, friend");
//! ```

pub mod builder;
pub mod data;
pub mod dictionary;
pub mod matcher;
pub mod render;
pub mod tokenizer;

#[cfg(test)]
mod integration_tests;

pub use builder::{ForwardMap, MIN_GLOSS_WORD_LEN, ReverseMap, build_forward_map, build_reverse_map};
pub use data::{Direction, Token, Translation};
pub use dictionary::{Dictionaries, Dictionary};
pub use matcher::{MAX_SPAN_WORDS, PARTIAL_MATCH_MIN_LEN, match_case, translate};
pub use render::render;
pub use tokenizer::{RawToken, WordParts, split_word, tokenize};

use cant::StopWords;
use tracing::trace;

/// Tokenize, translate and render `text` in one pass
pub fn translate_text(
    text: &str,
    direction: Direction,
    forward: &ForwardMap,
    reverse: &ReverseMap,
    stop_words: &StopWords,
) -> Translation {
    let raw = tokenize(text);
    let tokens = translate(&raw, direction, forward, reverse, stop_words);
    let output = render(&tokens);
    trace!(
        "Translated {} raw tokens into {} tokens ({})",
        raw.len(),
        tokens.len(),
        direction
    );
    Translation { tokens, output }
}
