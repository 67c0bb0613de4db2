//! Term tables for Thieves' Cant and French argot
//!
//! This crate holds the data side of the translator: the supported
//! languages, term table records and their JSON loading, the stop-word
//! sets, dictionary search and the catalogue of guild and hobo symbols. The translation engine itself lives in
//! `cant-translate`.
//!
//! # Example
//!
//! ```ignore
//! use cant::{Language, SearchQuery, builtin_table, search};
//!
//! let table = builtin_table(Language::English)?;
//! for entry in search(&table, SearchQuery::new().with_text("thief")) {
//!     println!("{}: {}", entry.term, entry.definition());
//! }
//! ```

pub mod builtin;
pub mod error;
pub mod language;
pub mod loader;
pub mod logging;
pub mod search;
pub mod stopwords;
pub mod symbols;
pub mod term;

pub use builtin::{builtin_symbols, builtin_table, builtin_tables};
pub use error::{CantError, CantResult};
pub use language::Language;
pub use loader::{
    DATA_DIR_ENV, SYMBOLS_FILE_STEM, load_symbols, load_symbols_from_file, load_table_from_file,
    load_tables, load_tables_from_dir,
};
pub use search::{SearchQuery, group_by_initial, search};
pub use stopwords::{StopWords, is_stop_word, stop_words};
pub use symbols::{LocalizedSymbol, Symbol, SymbolCatalogue, SymbolSet};
pub use term::{ExplicitEntry, TermEntry, TermTable, split_meanings, split_terms};
