use cant::logging::env_filter;
use cant::symbols::{categories, filter_by_category};
use cant::{
    CantError, Language, SearchQuery, SymbolSet, group_by_initial, load_symbols, load_tables,
    search,
};
use clap::{Arg, ArgAction, Command};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("cant-dict")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse the Thieves' Cant and argot dictionaries")
        .arg(
            Arg::new("query")
                .help("Text to look for in terms and definitions")
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Dictionary language (en, fr or a locale such as fr-FR)")
                .default_value("en"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("Only show entries in this category"),
        )
        .arg(
            Arg::new("categories")
                .long("categories")
                .help("List the categories instead of entries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("symbols")
                .long("symbols")
                .short('s')
                .help("Browse the guild marks or hobo signs instead of the dictionary")
                .value_name("SET")
                .num_args(0..=1)
                .default_missing_value("guild")
                .value_parser(["guild", "hobo"]),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .help("Directory of term tables (default: $CANT_DATA_DIR or built-in)"),
        )
        .get_matches();

    let language = Language::from_locale(
        matches
            .get_one::<String>("language")
            .map(String::as_str)
            .unwrap_or("en"),
    )?;
    let data_dir = matches.get_one::<String>("data").map(Path::new);
    let category = matches.get_one::<String>("category").map(String::as_str);

    if let Some(set) = matches.get_one::<String>("symbols") {
        let set: SymbolSet = set.parse()?;
        let catalogue = load_symbols(data_dir)?;
        let symbols = catalogue.symbols(set);

        if matches.get_flag("categories") {
            for category in categories(symbols) {
                println!("{}", category);
            }
            return Ok(());
        }

        let shown = filter_by_category(symbols, category);
        for symbol in &shown {
            let text = symbol.localized(language);
            println!("{}  {} [{}]: {}", text.symbol, text.name, text.category, text.meaning);
        }
        println!();
        println!("Showing {} of {} {} symbols", shown.len(), symbols.len(), set);
        return Ok(());
    }

    let mut tables = load_tables(data_dir)?;
    let table = tables.remove(&language).ok_or_else(|| {
        CantError::UnsupportedLanguage(format!("No term table loaded for '{}'", language))
    })?;

    if matches.get_flag("categories") {
        for category in table.categories() {
            println!("{}", category);
        }
        return Ok(());
    }

    let mut query = SearchQuery::new();
    if let Some(text) = matches.get_one::<String>("query") {
        query.with_text(text);
    }
    if let Some(category) = category {
        query.with_category(category);
    }

    let results = search(&table, &query);
    for (initial, entries) in group_by_initial(&results) {
        println!("{}", initial);
        for entry in entries {
            match &entry.category {
                Some(category) => {
                    println!("  {} [{}]: {}", entry.term, category, entry.definition())
                }
                None => println!("  {}: {}", entry.term, entry.definition()),
            }
        }
    }
    println!();
    println!(
        "Showing {} of {} {} entries",
        results.len(),
        table.len(),
        language.argot_name()
    );

    Ok(())
}
