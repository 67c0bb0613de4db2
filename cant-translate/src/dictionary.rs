//! Per-language lookup state
//!
//! A [`Dictionary`] owns one term table together with the maps derived from
//! it. It is built once when a language is selected and then shared
//! read-only by every translation of that session; nothing mutates it after
//! construction.

use crate::builder::{ForwardMap, ReverseMap, build_forward_map, build_reverse_map};
use crate::data::{Direction, Translation};
use cant::{Language, StopWords, TermTable, stop_words};
use std::collections::BTreeMap;
use tracing::info;

/// Lookup maps for one language pair
#[derive(Debug, Clone)]
pub struct Dictionary {
    table: TermTable,
    forward: ForwardMap,
    reverse: ReverseMap,
}

impl Dictionary {
    /// Build both lookup maps for `table`
    pub fn new(table: TermTable) -> Self {
        let forward = build_forward_map(&table);
        let reverse = build_reverse_map(&table);
        Dictionary {
            table,
            forward,
            reverse,
        }
    }

    pub fn language(&self) -> Language {
        self.table.language
    }

    pub fn table(&self) -> &TermTable {
        &self.table
    }

    pub fn forward(&self) -> &ForwardMap {
        &self.forward
    }

    pub fn reverse(&self) -> &ReverseMap {
        &self.reverse
    }

    pub fn stop_words(&self) -> &'static StopWords {
        stop_words(self.table.language)
    }

    /// Translate `text` using this dictionary's maps
    pub fn translate(&self, text: &str, direction: Direction) -> Translation {
        crate::translate_text(
            text,
            direction,
            &self.forward,
            &self.reverse,
            self.stop_words(),
        )
    }
}

/// One [`Dictionary`] per loaded language
#[derive(Debug, Clone, Default)]
pub struct Dictionaries(BTreeMap<Language, Dictionary>);

impl Dictionaries {
    pub fn new() -> Self {
        Dictionaries(BTreeMap::new())
    }

    /// Build a dictionary for every table
    pub fn from_tables(tables: BTreeMap<Language, TermTable>) -> Self {
        let mut dictionaries = Dictionaries::new();
        for table in tables.into_values() {
            dictionaries.with_table(table);
        }
        dictionaries
    }

    /// Build and add the dictionary for `table`, replacing any previous one
    pub fn with_table(&mut self, table: TermTable) -> &mut Self {
        let dictionary = Dictionary::new(table);
        info!(
            "Prepared {} dictionary: {} entries, {} forward keys, {} reverse keys",
            dictionary.language(),
            dictionary.table.len(),
            dictionary.forward.len(),
            dictionary.reverse.len()
        );
        self.0.insert(dictionary.language(), dictionary);
        self
    }

    pub fn get(&self, language: Language) -> Option<&Dictionary> {
        self.0.get(&language)
    }

    pub fn languages(&self) -> Vec<Language> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
