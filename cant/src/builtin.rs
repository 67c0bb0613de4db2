//! Term tables and the symbol catalogue compiled into the binary
//!
//! Used whenever no data directory is configured.

use crate::error::{CantError, CantResult};
use crate::language::Language;
use crate::symbols::SymbolCatalogue;
use crate::term::TermTable;
use std::collections::BTreeMap;

const ENGLISH_TABLE: &str = include_str!("../data/en.json");
const FRENCH_TABLE: &str = include_str!("../data/fr.json");
const SYMBOLS: &str = include_str!("../data/symbols.json");

/// The built-in table for `language`
pub fn builtin_table(language: Language) -> CantResult<TermTable> {
    let json = match language {
        Language::English => ENGLISH_TABLE,
        Language::French => FRENCH_TABLE,
    };

    let table = TermTable::from_json_str(json)?;
    if table.language != language {
        return Err(CantError::Other(format!(
            "Built-in table for '{}' declares language '{}'",
            language, table.language
        )));
    }
    Ok(table)
}

/// Built-in tables for every supported language
pub fn builtin_tables() -> CantResult<BTreeMap<Language, TermTable>> {
    Language::ALL
        .iter()
        .map(|&language| builtin_table(language).map(|table| (language, table)))
        .collect()
}

/// The built-in guild and hobo symbols
pub fn builtin_symbols() -> CantResult<SymbolCatalogue> {
    SymbolCatalogue::from_json_str(SYMBOLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{SymbolSet, categories};

    #[test]
    fn test_builtin_tables_parse() {
        let tables = builtin_tables().unwrap();
        assert_eq!(tables.len(), Language::ALL.len());
        for (language, table) in &tables {
            assert_eq!(table.language, *language);
            assert!(!table.is_empty());
            assert!(!table.explicit.is_empty());
        }
    }

    #[test]
    fn test_builtin_entries_have_meanings() {
        for language in Language::ALL {
            let table = builtin_table(language).unwrap();
            assert!(table.entries.iter().all(|e| !e.meanings.is_empty()));
        }
    }

    #[test]
    fn test_builtin_french_terms_split() {
        let table = builtin_table(Language::French).unwrap();
        let argent = table.explicit.iter().find(|e| e.word == "argent").unwrap();
        assert_eq!(argent.terms, vec!["fric", "pognon", "thune"]);
    }

    #[test]
    fn test_builtin_symbols() {
        let catalogue = builtin_symbols().unwrap();
        for set in SymbolSet::ALL {
            let symbols = catalogue.symbols(set);
            assert!(!symbols.is_empty());
            assert!(symbols.iter().all(|s| s.name_fr.is_some() && s.meaning_fr.is_some()));
        }
        assert_eq!(
            categories(catalogue.symbols(SymbolSet::Hobo)),
            vec!["Warning", "Info", "Resource", "Safe", "Direction"]
        );
    }
}
