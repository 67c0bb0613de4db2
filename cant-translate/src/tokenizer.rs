//! Whitespace-preserving tokenizer
//!
//! Input text is cut into an alternating sequence of whitespace runs and
//! non-whitespace runs, so that concatenating the tokens gives back the
//! input exactly. Each non-whitespace run can then be split into leading
//! punctuation, a core word and trailing punctuation.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|\S+").expect("token pattern is valid"));

// Apostrophes and hyphens between word characters stay inside the core word.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\W*)(\w+(?:['’\-]\w+)*)(\W*)$").expect("word pattern is valid")
});

/// A raw slice of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    Whitespace(&'a str),
    Text(&'a str),
}

impl<'a> RawToken<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            RawToken::Whitespace(s) | RawToken::Text(s) => s,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, RawToken::Whitespace(_))
    }
}

/// A non-whitespace token split around its core word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParts<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

/// Split text into alternating whitespace and non-whitespace tokens
///
/// Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| {
            let s = m.as_str();
            if s.starts_with(char::is_whitespace) {
                RawToken::Whitespace(s)
            } else {
                RawToken::Text(s)
            }
        })
        .collect()
}

/// Split a token into `(leading punctuation, core word, trailing punctuation)`
///
/// Returns `None` when the token has no recognizable core word, such as
/// pure punctuation or words joined by other symbols (`a.b`).
pub fn split_word(token: &str) -> Option<WordParts<'_>> {
    let captures = WORD_PATTERN.captures(token)?;
    Some(WordParts {
        leading: captures.get(1).map_or("", |m| m.as_str()),
        core: captures.get(2)?.as_str(),
        trailing: captures.get(3).map_or("", |m| m.as_str()),
    })
}
