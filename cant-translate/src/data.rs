//! Translation output types
//!
//! A translation pass turns every raw token of the input into exactly one
//! [`Token`], except in the argot → natural direction where a matched
//! multi-word span collapses into a single token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way a translation runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Natural language → argot, word by word
    #[default]
    #[serde(rename = "toArgot")]
    ToArgot,
    /// Argot → natural language, with multi-word phrase matching
    #[serde(rename = "toNatural")]
    ToNatural,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToArgot => f.write_str("toArgot"),
            Direction::ToNatural => f.write_str("toNatural"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toArgot" => Ok(Direction::ToArgot),
            "toNatural" => Ok(Direction::ToNatural),
            other => Err(format!("Unknown direction '{}'", other)),
        }
    }
}

/// One output token of a translation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Raw input text this token covers, including punctuation
    pub original: String,
    /// Text rendered in its place
    pub translated: String,
    pub is_translated: bool,
    /// Other candidates, when the lookup had more than one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl Token {
    /// A token rendered exactly as it was written
    pub fn untranslated(original: &str) -> Self {
        Token {
            original: original.to_string(),
            translated: original.to_string(),
            is_translated: false,
            alternatives: None,
        }
    }

    /// A substituted token; an empty `alternatives` list is stored as `None`
    pub fn translated(original: &str, translated: String, alternatives: &[String]) -> Self {
        Token {
            original: original.to_string(),
            translated,
            is_translated: true,
            alternatives: if alternatives.is_empty() {
                None
            } else {
                Some(alternatives.to_vec())
            },
        }
    }
}

/// Result of translating one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Display tokens in input order
    pub tokens: Vec<Token>,
    /// Every token's `translated` text joined together
    pub output: String,
}

impl Translation {
    /// Number of tokens that were substituted
    pub fn translated_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_translated).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untranslated_token() {
        let token = Token::untranslated("the");
        assert_eq!(token.translated, "the");
        assert!(!token.is_translated);
        assert_eq!(token.alternatives, None);
    }

    #[test]
    fn test_translated_token_alternatives() {
        let token = Token::translated("Thief", "Prig".to_string(), &[]);
        assert!(token.is_translated);
        assert_eq!(token.alternatives, None);

        let alternatives = vec!["foist".to_string()];
        let token = Token::translated("thief", "prig".to_string(), &alternatives);
        assert_eq!(token.alternatives, Some(alternatives));
    }

    #[test]
    fn test_token_serializes_camel_case() {
        let json = serde_json::to_value(Token::untranslated("a")).unwrap();
        assert_eq!(json["isTranslated"], false);
        assert!(json.get("alternatives").is_none());
    }

    #[test]
    fn test_direction_round_trips_names() {
        assert_eq!("toNatural".parse::<Direction>().unwrap(), Direction::ToNatural);
        assert_eq!(Direction::ToArgot.to_string(), "toArgot");
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(
            serde_json::to_string(&Direction::ToNatural).unwrap(),
            "\"toNatural\""
        );
    }

    #[test]
    fn test_translated_count() {
        let translation = Translation {
            tokens: vec![
                Token::untranslated("The"),
                Token::untranslated(" "),
                Token::translated("thief", "prig".to_string(), &[]),
            ],
            output: "The prig".to_string(),
        };
        assert_eq!(translation.translated_count(), 1);
        assert!(!translation.is_empty());
    }
}
