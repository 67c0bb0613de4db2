use crate::builtin::{builtin_symbols, builtin_tables};
use crate::error::{CantError, CantResult};
use crate::language::Language;
use crate::symbols::SymbolCatalogue;
use crate::term::TermTable;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the term table directory
pub const DATA_DIR_ENV: &str = "CANT_DATA_DIR";

/// File stem of the symbol catalogue inside a data directory
pub const SYMBOLS_FILE_STEM: &str = "symbols";

/// Load a term table from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "language": "en",
///     "entries": [ { "term": "prig", "definition": "A thief", "category": "People" } ],
///     "explicit": [ { "word": "thief", "terms": ["prig"] } ]
/// }
/// ```
///
/// # Errors
/// - File not found
/// - Invalid JSON
/// - File read errors
pub fn load_table_from_file(path: &Path) -> CantResult<TermTable> {
    let content = fs::read_to_string(path).map_err(|e| {
        CantError::Load(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    let table: TermTable = serde_json::from_str(&content).map_err(|e| {
        CantError::Parse(format!(
            "Failed to parse term table from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let skipped = table.entries.iter().filter(|e| e.term.trim().is_empty()).count();
    if skipped > 0 {
        warn!(
            "{} entries in '{}' have an empty term and will be ignored",
            skipped,
            path.display()
        );
    }

    debug!(
        "Loaded {} entries and {} explicit rows for '{}' from {}",
        table.entries.len(),
        table.explicit.len(),
        table.language,
        path.display()
    );

    Ok(table)
}

/// Load all term tables from a directory of JSON files
///
/// Scans the directory for `*.json` files. The filename (without extension)
/// names the language: `en.json` -> English, `fr.json` -> French. Files whose
/// stem is not a supported language are skipped.
///
/// # Errors
/// - Directory not found
/// - File read/parse errors
/// - A file's `language` field disagrees with its file name
/// - Two files name the same language (`en.json` and `en-US.json`)
pub fn load_tables_from_dir(dir: &Path) -> CantResult<BTreeMap<Language, TermTable>> {
    if !dir.exists() {
        return Err(CantError::Load(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(CantError::Load(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        CantError::Load(format!("Failed to read directory '{}': {}", dir.display(), e))
    })?;

    let mut tables = BTreeMap::new();

    for entry in entries {
        let entry =
            entry.map_err(|e| CantError::Load(format!("Error reading directory entry: {}", e)))?;
        let path = entry.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| CantError::Load(format!("Invalid filename: {}", path.display())))?;
        if stem == SYMBOLS_FILE_STEM {
            continue;
        }

        let language = match Language::from_locale(stem) {
            Ok(language) => language,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let table = load_table_from_file(&path)?;
        if table.language != language {
            return Err(CantError::Parse(format!(
                "'{}' declares language '{}' but is named for '{}'",
                path.display(),
                table.language,
                language
            )));
        }

        if tables.insert(language, table).is_some() {
            return Err(CantError::Load(format!(
                "More than one term table for '{}' in {} (second one: {})",
                language,
                dir.display(),
                path.display()
            )));
        }
    }

    if tables.is_empty() {
        warn!("No term tables found in directory {}", dir.display());
    }

    Ok(tables)
}

/// Load the term tables the binaries run with
///
/// Uses `data_dir` when given, otherwise the directory named by
/// `CANT_DATA_DIR`, otherwise the built-in tables.
pub fn load_tables(data_dir: Option<&Path>) -> CantResult<BTreeMap<Language, TermTable>> {
    let dir = data_dir
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from));

    match dir {
        Some(dir) => {
            info!("Loading term tables from {}", dir.display());
            load_tables_from_dir(&dir)
        }
        None => {
            debug!("No data directory configured, using built-in term tables");
            builtin_tables()
        }
    }
}

/// Load a symbol catalogue from a single JSON file
///
/// ```json
/// {
///     "guild": [ { "name": "Safe House", "meaning": "A hideout", "nameFr": "Maison Sûre",
///                  "meaningFr": "Refuge", "symbol": "⌂", "category": "Safe" } ],
///     "hobo": []
/// }
/// ```
pub fn load_symbols_from_file(path: &Path) -> CantResult<SymbolCatalogue> {
    let content = fs::read_to_string(path).map_err(|e| {
        CantError::Load(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    let catalogue: SymbolCatalogue = serde_json::from_str(&content).map_err(|e| {
        CantError::Parse(format!(
            "Failed to parse symbol catalogue from '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(
        "Loaded {} guild and {} hobo symbols from {}",
        catalogue.guild.len(),
        catalogue.hobo.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Load the symbol catalogue the binaries run with
///
/// Reads `symbols.json` from `data_dir` (or `CANT_DATA_DIR`) when that file
/// exists, otherwise falls back to the built-in catalogue.
pub fn load_symbols(data_dir: Option<&Path>) -> CantResult<SymbolCatalogue> {
    let file = data_dir
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .map(|dir| dir.join(format!("{}.json", SYMBOLS_FILE_STEM)))
        .filter(|file| file.is_file());

    match file {
        Some(file) => load_symbols_from_file(&file),
        None => builtin_symbols(),
    }
}
