//! Term table records
//!
//! A term table pairs argot headwords with their natural-language glosses,
//! plus a list of explicit natural-language → argot rows that always take
//! precedence over anything harvested from the glosses.
//!
//! The JSON layout follows the hand-authored data files:
//!
//! ```json
//! {
//!     "language": "en",
//!     "entries": [
//!         { "term": "prig", "definition": "A thief; a pickpocket", "category": "People" }
//!     ],
//!     "explicit": [
//!         { "word": "thief", "terms": ["prig", "foist"] }
//!     ]
//! }
//! ```

use crate::error::{CantError, CantResult};
use crate::language::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// One argot headword and its gloss(es)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    /// The argot word or phrase, as written
    pub term: String,
    /// Natural-language meanings in preference order
    #[serde(alias = "definition", default, deserialize_with = "deserialize_meanings")]
    pub meanings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TermEntry {
    pub fn new(term: &str, meanings: &[&str], category: Option<&str>) -> Self {
        TermEntry {
            term: term.to_string(),
            meanings: meanings.iter().map(|m| m.to_string()).collect(),
            category: category.map(str::to_string),
        }
    }

    /// The meanings joined back into a single definition line
    pub fn definition(&self) -> String {
        self.meanings.join("; ")
    }
}

/// An explicit natural-language → argot row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitEntry {
    pub word: String,
    /// Argot candidates, first one preferred
    #[serde(default, deserialize_with = "deserialize_terms")]
    pub terms: Vec<String>,
}

impl ExplicitEntry {
    pub fn new(word: &str, terms: &[&str]) -> Self {
        ExplicitEntry {
            word: word.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Every term of one language pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTable {
    pub language: Language,
    #[serde(default)]
    pub entries: Vec<TermEntry>,
    #[serde(default)]
    pub explicit: Vec<ExplicitEntry>,
}

impl TermTable {
    pub fn new(language: Language) -> Self {
        TermTable {
            language,
            entries: Vec::new(),
            explicit: Vec::new(),
        }
    }

    pub fn with_entry(&mut self, entry: TermEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn with_explicit(&mut self, entry: ExplicitEntry) -> &mut Self {
        self.explicit.push(entry);
        self
    }

    /// Decode a table from its JSON form
    pub fn from_json_str(json: &str) -> CantResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CantError::Parse(format!("Invalid term table JSON: {}", e)))
    }

    /// Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self.entries.iter().filter_map(|e| e.category.as_deref()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Number of headword entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a definition on semicolons into trimmed, non-empty meanings
pub fn split_meanings(definition: &str) -> Vec<String> {
    definition
        .split([';', '；'])
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a `", "`-joined candidate list into trimmed, non-empty terms
pub fn split_terms(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_meanings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(definition) => split_meanings(&definition),
        OneOrMany::Many(meanings) => meanings
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn deserialize_terms<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(joined) => split_terms(&joined),
        OneOrMany::Many(terms) => terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
