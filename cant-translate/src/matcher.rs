//! Phrase matcher
//!
//! Translates a tokenized input in either direction.
//!
//! Towards argot every word is looked up on its own: stop words pass
//! through, then an exact key match is tried, then the first key (in map
//! order) longer than three characters that occurs inside the word.
//!
//! Towards natural language the matcher scans greedily for the longest
//! run of up to four words that names an argot phrase, so idioms such as
//! "bene darkmans" are read as one unit before their parts are considered.
//! There is no backtracking: a span taken early is never given back to let
//! a later span match.

use crate::builder::{ForwardMap, ReverseMap};
use crate::data::{Direction, Token};
use crate::tokenizer::{RawToken, WordParts, split_word};
use cant::StopWords;

/// Longest argot phrase, in words, the reverse scan will try
pub const MAX_SPAN_WORDS: usize = 4;

/// Keys must be longer than this to match inside a longer word
pub const PARTIAL_MATCH_MIN_LEN: usize = 3;

/// Translate raw tokens into display tokens
///
/// Never fails: anything without a translation comes back verbatim with
/// `is_translated` unset. Stop words only apply towards argot, since the
/// reverse map is keyed by argot vocabulary.
pub fn translate(
    tokens: &[RawToken<'_>],
    direction: Direction,
    forward: &ForwardMap,
    reverse: &ReverseMap,
    stop_words: &StopWords,
) -> Vec<Token> {
    match direction {
        Direction::ToArgot => tokens
            .iter()
            .map(|token| match token {
                RawToken::Whitespace(space) => Token::untranslated(space),
                RawToken::Text(text) => translate_word(text, forward, stop_words),
            })
            .collect(),
        Direction::ToNatural => translate_phrases(tokens, reverse),
    }
}

fn translate_word(text: &str, forward: &ForwardMap, stop_words: &StopWords) -> Token {
    let Some(word) = split_word(text) else {
        return Token::untranslated(text);
    };

    let lower = word.core.to_lowercase();
    if stop_words.contains(lower.as_str()) {
        return Token::untranslated(text);
    }

    let candidates = forward
        .get(&lower)
        .or_else(|| partial_match(&lower, forward));

    match candidates.and_then(|c| c.split_first()) {
        Some((first, rest)) => Token::translated(
            text,
            format!(
                "{}{}{}",
                word.leading,
                match_case(word.core, first),
                word.trailing
            ),
            rest,
        ),
        None => Token::untranslated(text),
    }
}

/// First key in map order that is long enough and occurs inside `word`
fn partial_match<'m>(word: &str, forward: &'m ForwardMap) -> Option<&'m Vec<String>> {
    forward
        .iter()
        .find(|(key, _)| key.chars().count() > PARTIAL_MATCH_MIN_LEN && word.contains(key.as_str()))
        .map(|(_, candidates)| candidates)
}

fn translate_phrases(tokens: &[RawToken<'_>], reverse: &ReverseMap) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        if token.is_whitespace() {
            output.push(Token::untranslated(token.as_str()));
            index += 1;
            continue;
        }

        match longest_span(tokens, index, reverse) {
            Some((translated, consumed)) => {
                output.push(translated);
                index += consumed;
            }
            None => {
                output.push(Token::untranslated(token.as_str()));
                index += 1;
            }
        }
    }

    output
}

/// Try spans of `MAX_SPAN_WORDS` down to one word starting at `start`
///
/// Returns the collapsed token and the number of raw tokens it consumed.
fn longest_span(
    tokens: &[RawToken<'_>],
    start: usize,
    reverse: &ReverseMap,
) -> Option<(Token, usize)> {
    for words in (1..=MAX_SPAN_WORDS).rev() {
        let Some(span) = collect_span(tokens, start, words) else {
            continue;
        };

        let key = span
            .iter()
            .map(|word| word.core.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        let Some((first, rest)) = reverse.get(&key).and_then(|m| m.split_first()) else {
            continue;
        };

        let consumed = 2 * words - 1;
        let original: String = tokens[start..start + consumed]
            .iter()
            .map(|t| t.as_str())
            .collect();
        let head = span[0];
        let tail = span[span.len() - 1];
        let translated = format!(
            "{}{}{}",
            head.leading,
            match_case(head.core, first),
            tail.trailing
        );

        return Some((Token::translated(&original, translated, rest), consumed));
    }

    None
}

/// The words of a `words`-long span starting at raw index `start`
///
/// A span is only viable when every slot holds a word and each word is
/// separated from the next by a single whitespace character. Punctuation
/// inside the span is not part of the key and is dropped on collapse.
fn collect_span<'a>(
    tokens: &[RawToken<'a>],
    start: usize,
    words: usize,
) -> Option<Vec<WordParts<'a>>> {
    let mut span = Vec::with_capacity(words);

    for n in 0..words {
        let index = start + 2 * n;
        if n > 0 {
            let RawToken::Whitespace(gap) = *tokens.get(index - 1)? else {
                return None;
            };
            if gap.chars().count() != 1 {
                return None;
            }
        }

        let RawToken::Text(text) = *tokens.get(index)? else {
            return None;
        };
        span.push(split_word(text)?);
    }

    Some(span)
}

/// Carry a capitalized source word over to its replacement
///
/// Only the first character is touched; the rest keeps the candidate's case.
pub fn match_case(source: &str, candidate: &str) -> String {
    let source_capitalized = source.chars().next().is_some_and(char::is_uppercase);
    let mut chars = candidate.chars();

    match chars.next() {
        Some(first) if source_capitalized => first.to_uppercase().chain(chars).collect(),
        _ => candidate.to_string(),
    }
}
