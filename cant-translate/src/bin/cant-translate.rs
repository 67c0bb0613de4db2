use cant::logging::env_filter;
use cant::{CantError, Language, load_tables};
use cant_translate::{Dictionary, Direction};
use clap::{Arg, ArgAction, Command};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("cant-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate phrases into Thieves' Cant or French argot, and back")
        .arg(
            Arg::new("text")
                .help("Phrase to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Natural language of the phrase (en, fr or a locale such as fr-FR)")
                .default_value("en"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .help("Translate from argot back to the natural language")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .help("Directory of term tables (default: $CANT_DATA_DIR or built-in)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("List every substituted word and its alternatives")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches
        .get_one::<String>("text")
        .map(String::as_str)
        .unwrap_or_default();
    let language = Language::from_locale(
        matches
            .get_one::<String>("language")
            .map(String::as_str)
            .unwrap_or("en"),
    )?;
    let direction = if matches.get_flag("reverse") {
        Direction::ToNatural
    } else {
        Direction::ToArgot
    };
    let verbose = matches.get_flag("verbose");

    let mut tables = load_tables(matches.get_one::<String>("data").map(Path::new))?;
    let table = tables.remove(&language).ok_or_else(|| {
        CantError::UnsupportedLanguage(format!("No term table loaded for '{}'", language))
    })?;
    let dictionary = Dictionary::new(table);

    if verbose {
        match direction {
            Direction::ToArgot => println!("{} → {}", language, language.argot_name()),
            Direction::ToNatural => println!("{} → {}", language.argot_name(), language),
        }
        println!("Source: \"{}\"", text);
        println!();
    }

    let translation = dictionary.translate(text, direction);

    if verbose {
        for token in translation.tokens.iter().filter(|t| t.is_translated) {
            match &token.alternatives {
                Some(alternatives) => println!(
                    "  {} → {} (also: {})",
                    token.original.trim(),
                    token.translated.trim(),
                    alternatives.join(", ")
                ),
                None => println!("  {} → {}", token.original.trim(), token.translated.trim()),
            }
        }
        println!("{} words translated", translation.translated_count());
        println!();
    }

    println!("{}", translation.output);

    Ok(())
}
