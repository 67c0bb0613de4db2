//! Dictionary browsing
//!
//! Filters a term table by free text and category, sorts the result by
//! headword and groups it under initial letters for display.

use crate::term::{TermEntry, TermTable};
use icu_collator::{Collator, options::CollatorOptions};
use std::collections::BTreeMap;
use tracing::warn;

/// Filters applied when browsing a term table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against terms and meanings
    pub text: Option<String>,
    /// Exact category name
    pub category: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery::default()
    }

    pub fn with_text(&mut self, text: &str) -> &mut Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_category(&mut self, category: &str) -> &mut Self {
        self.category = Some(category.to_string());
        self
    }

    fn matches(&self, entry: &TermEntry, needle: Option<&str>) -> bool {
        if let Some(category) = &self.category {
            if entry.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        match needle {
            Some(needle) => {
                entry.term.to_lowercase().contains(needle)
                    || entry
                        .meanings
                        .iter()
                        .any(|m| m.to_lowercase().contains(needle))
            }
            None => true,
        }
    }
}

/// Entries matching `query`, sorted alphabetically by headword
///
/// Headwords are collated for the table's language, so accented French
/// terms sit next to their unaccented neighbours. Empty or whitespace-only
/// text matches everything.
pub fn search<'a>(table: &'a TermTable, query: &SearchQuery) -> Vec<&'a TermEntry> {
    let needle = query
        .text
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut results: Vec<&TermEntry> = table
        .entries
        .iter()
        .filter(|entry| query.matches(entry, needle.as_deref()))
        .collect();

    match Collator::try_new(table.language.locale().into(), CollatorOptions::default()) {
        Ok(collator) => results.sort_by(|a, b| collator.compare(&a.term, &b.term)),
        Err(e) => {
            warn!("No collator for '{}', sorting by code point: {}", table.language, e);
            results.sort_by_cached_key(|entry| entry.term.to_lowercase());
        }
    }
    results
}

/// Group entries under the uppercased first character of their term
///
/// Entries keep their relative order inside each group.
pub fn group_by_initial<'a>(entries: &[&'a TermEntry]) -> BTreeMap<char, Vec<&'a TermEntry>> {
    let mut groups: BTreeMap<char, Vec<&TermEntry>> = BTreeMap::new();
    for entry in entries {
        let Some(first) = entry.term.chars().next() else {
            continue;
        };
        let initial = first.to_uppercase().next().unwrap_or(first);
        groups.entry(initial).or_default().push(entry);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn sample_table() -> TermTable {
        let mut table = TermTable::new(Language::English);
        table
            .with_entry(TermEntry::new("prig", &["A thief"], Some("People")))
            .with_entry(TermEntry::new("Ken", &["A house"], Some("Places")))
            .with_entry(TermEntry::new("cove", &["A man", "a fellow"], Some("People")))
            .with_entry(TermEntry::new("blunt", &["Money"], Some("Objects")))
            .with_entry(TermEntry::new("", &["nothing"], None));
        table
    }

    fn terms<'a>(entries: &[&'a TermEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn test_search_without_filters_sorts_everything() {
        let table = sample_table();
        let results = search(&table, &SearchQuery::new());
        assert_eq!(terms(&results), vec!["", "blunt", "cove", "Ken", "prig"]);
    }

    #[test]
    fn test_search_matches_term_or_meaning() {
        let table = sample_table();
        let results = search(&table, SearchQuery::new().with_text("KEN"));
        assert_eq!(terms(&results), vec!["Ken"]);

        let results = search(&table, SearchQuery::new().with_text("fellow"));
        assert_eq!(terms(&results), vec!["cove"]);
    }

    #[test]
    fn test_search_by_category() {
        let table = sample_table();
        let results = search(&table, SearchQuery::new().with_category("People"));
        assert_eq!(terms(&results), vec!["cove", "prig"]);

        let results = search(
            &table,
            SearchQuery::new().with_category("People").with_text("thief"),
        );
        assert_eq!(terms(&results), vec!["prig"]);
    }

    #[test]
    fn test_search_blank_text_matches_all() {
        let table = sample_table();
        let results = search(&table, SearchQuery::new().with_text("   "));
        assert_eq!(results.len(), table.len());
    }

    #[test]
    fn test_search_collates_accented_terms() {
        let mut table = TermTable::new(Language::French);
        table
            .with_entry(TermEntry::new("zinc", &["comptoir"], None))
            .with_entry(TermEntry::new("élan", &["course"], None))
            .with_entry(TermEntry::new("écrou", &["registre d'écrou"], None))
            .with_entry(TermEntry::new("ecu", &["pièce"], None))
            .with_entry(TermEntry::new("fric", &["argent"], None));

        let results = search(&table, &SearchQuery::new());
        assert_eq!(terms(&results), vec!["écrou", "ecu", "élan", "fric", "zinc"]);
    }

    #[test]
    fn test_group_by_initial() {
        let table = sample_table();
        let results = search(&table, &SearchQuery::new());
        let groups = group_by_initial(&results);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!['B', 'C', 'K', 'P']);
        assert_eq!(terms(&groups[&'C']), vec!["cove"]);
    }
}
