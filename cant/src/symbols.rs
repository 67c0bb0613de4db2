//! Chalk marks left for fellow travellers
//!
//! Two sets are catalogued: the marks a thieves' guild scratches on walls
//! and doorframes, and the signs hoboes chalked on fences. Each symbol
//! carries an English name and meaning, optionally a French one, and a
//! category used for filtering.

use crate::error::{CantError, CantResult};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which catalogue a symbol belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolSet {
    #[default]
    #[serde(rename = "guild")]
    Guild,
    #[serde(rename = "hobo")]
    Hobo,
}

impl SymbolSet {
    pub const ALL: [SymbolSet; 2] = [SymbolSet::Guild, SymbolSet::Hobo];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolSet::Guild => "guild",
            SymbolSet::Hobo => "hobo",
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolSet {
    type Err = CantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guild" => Ok(SymbolSet::Guild),
            "hobo" => Ok(SymbolSet::Hobo),
            other => Err(CantError::Other(format!(
                "Unknown symbol set '{}' (expected 'guild' or 'hobo')",
                other
            ))),
        }
    }
}

/// One chalk mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub name: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_fr: Option<String>,
    /// The glyph itself
    pub symbol: String,
    pub category: String,
}

/// A symbol with its name and meaning resolved for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSymbol {
    pub name: String,
    pub meaning: String,
    pub symbol: String,
    pub category: String,
}

impl Symbol {
    pub fn new(name: &str, meaning: &str, symbol: &str, category: &str) -> Self {
        Symbol {
            name: name.to_string(),
            meaning: meaning.to_string(),
            name_fr: None,
            meaning_fr: None,
            symbol: symbol.to_string(),
            category: category.to_string(),
        }
    }

    pub fn with_french(mut self, name: &str, meaning: &str) -> Self {
        self.name_fr = Some(name.to_string());
        self.meaning_fr = Some(meaning.to_string());
        self
    }

    /// Name and meaning in `language`
    ///
    /// French falls back to the English text for any field without a
    /// French version.
    pub fn localized(&self, language: Language) -> LocalizedSymbol {
        let (name, meaning) = match language {
            Language::French => (
                self.name_fr.as_deref().unwrap_or(&self.name),
                self.meaning_fr.as_deref().unwrap_or(&self.meaning),
            ),
            Language::English => (self.name.as_str(), self.meaning.as_str()),
        };

        LocalizedSymbol {
            name: name.to_string(),
            meaning: meaning.to_string(),
            symbol: self.symbol.clone(),
            category: self.category.clone(),
        }
    }
}

/// Both symbol sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalogue {
    #[serde(default)]
    pub guild: Vec<Symbol>,
    #[serde(default)]
    pub hobo: Vec<Symbol>,
}

impl SymbolCatalogue {
    /// Decode a catalogue from its JSON form
    pub fn from_json_str(json: &str) -> CantResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CantError::Parse(format!("Invalid symbol catalogue JSON: {}", e)))
    }

    pub fn symbols(&self, set: SymbolSet) -> &[Symbol] {
        match set {
            SymbolSet::Guild => &self.guild,
            SymbolSet::Hobo => &self.hobo,
        }
    }
}

/// Distinct categories in the order they first appear
pub fn categories(symbols: &[Symbol]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for symbol in symbols {
        if !categories.contains(&symbol.category.as_str()) {
            categories.push(&symbol.category);
        }
    }
    categories
}

/// Symbols whose category is exactly `category`, or all of them for `None`
pub fn filter_by_category<'a>(symbols: &'a [Symbol], category: Option<&str>) -> Vec<&'a Symbol> {
    symbols
        .iter()
        .filter(|symbol| category.is_none_or(|c| symbol.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild_marks() -> Vec<Symbol> {
        vec![
            Symbol::new("Safe House", "A hideout", "⌂", "Safe")
                .with_french("Maison Sûre", "Refuge sécurisé disponible ici"),
            Symbol::new("Guard Patrol", "Guards about", "⚔", "Warning"),
            Symbol::new("Trap Warning", "Trap or alarm", "⚠", "Warning"),
            Symbol::new("Escape Route", "Quick getaway", "↯", "Escape"),
        ]
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories(&guild_marks()), vec!["Safe", "Warning", "Escape"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let marks = guild_marks();
        let warnings: Vec<&str> = filter_by_category(&marks, Some("Warning"))
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(warnings, vec!["Guard Patrol", "Trap Warning"]);

        assert_eq!(filter_by_category(&marks, None).len(), marks.len());
        // Exact match only
        assert!(filter_by_category(&marks, Some("warning")).is_empty());
    }

    #[test]
    fn test_localized_french_and_fallback() {
        let marks = guild_marks();

        let safe_house = marks[0].localized(Language::French);
        assert_eq!(safe_house.name, "Maison Sûre");
        assert_eq!(safe_house.meaning, "Refuge sécurisé disponible ici");
        assert_eq!(safe_house.symbol, "⌂");

        let patrol = marks[1].localized(Language::French);
        assert_eq!(patrol.name, "Guard Patrol");

        assert_eq!(marks[0].localized(Language::English).name, "Safe House");
    }

    #[test]
    fn test_symbol_json_field_names() {
        let symbol: Symbol = serde_json::from_str(
            r#"{ "name": "Danger", "meaning": "Keep away", "nameFr": "Danger",
                 "meaningFr": "Endroit dangereux, évitez", "symbol": "✕", "category": "Warning" }"#,
        )
        .unwrap();
        assert_eq!(symbol.meaning_fr.as_deref(), Some("Endroit dangereux, évitez"));

        let bare: Symbol = serde_json::from_str(
            r#"{ "name": "Danger", "meaning": "Keep away", "symbol": "✕", "category": "Warning" }"#,
        )
        .unwrap();
        assert_eq!(bare.name_fr, None);
    }

    #[test]
    fn test_symbol_set_parse() {
        assert_eq!("hobo".parse::<SymbolSet>().unwrap(), SymbolSet::Hobo);
        assert_eq!(" Guild ".parse::<SymbolSet>().unwrap(), SymbolSet::Guild);
        assert!("runes".parse::<SymbolSet>().is_err());
        assert_eq!(SymbolSet::default(), SymbolSet::Guild);
    }

    #[test]
    fn test_catalogue_selects_set() {
        let catalogue = SymbolCatalogue {
            guild: guild_marks(),
            hobo: vec![Symbol::new("Fresh Water", "Drinking water", "≈", "Resource")],
        };
        assert_eq!(catalogue.symbols(SymbolSet::Guild).len(), 4);
        assert_eq!(catalogue.symbols(SymbolSet::Hobo)[0].name, "Fresh Water");
    }
}
