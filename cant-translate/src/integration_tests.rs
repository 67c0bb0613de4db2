//! End-to-end tests over the built-in term tables
//!
//! These run the whole pipeline (map building, tokenizing, matching and
//! rendering) the way the CLI and web server drive it.

#[cfg(test)]
mod tests {
    use super::super::*;
    use cant::{Language, builtin_table, stop_words};

    fn dictionary(language: Language) -> Dictionary {
        Dictionary::new(builtin_table(language).unwrap())
    }

    // ============================================================================
    // English → Thieves' Cant
    // ============================================================================

    #[test]
    fn test_e2e_english_sentence() {
        let translation =
            dictionary(Language::English).translate("The thief stole money at night", Direction::ToArgot);

        assert_eq!(translation.output, "The prig stole blunt at darkmans");
        assert_eq!(translation.translated_count(), 3);

        let thief = &translation.tokens[2];
        assert_eq!(thief.original, "thief");
        assert_eq!(
            thief.alternatives,
            Some(vec!["foist".to_string(), "bowman".to_string()])
        );
    }

    #[test]
    fn test_e2e_capitalized_word() {
        let translation = dictionary(Language::English).translate("Thief!", Direction::ToArgot);
        assert_eq!(translation.output, "Prig!");
    }

    #[test]
    fn test_e2e_gloss_derived_word() {
        // "fence: a receiver of stolen goods" makes "receiver" translatable
        let translation = dictionary(Language::English).translate("receiver", Direction::ToArgot);
        assert_eq!(translation.output, "fence");
    }

    #[test]
    fn test_e2e_token_count_preserved_towards_argot() {
        let text = "  Good friend,\tthe constable  saw our house!\n";
        let translation = dictionary(Language::English).translate(text, Direction::ToArgot);
        assert_eq!(translation.tokens.len(), tokenize(text).len());
        assert_eq!(
            translation.output,
            "  Bene cove,\tthe harman-beck  saw our ken!\n"
        );
    }

    #[test]
    fn test_e2e_shape_preserved_without_matches() {
        let text = "The  cat, and\tthe dog!\n";
        let translation = dictionary(Language::English).translate(text, Direction::ToArgot);
        assert_eq!(translation.output, text);
        assert_eq!(translation.translated_count(), 0);
    }

    #[test]
    fn test_e2e_empty_input() {
        let translation = dictionary(Language::English).translate("", Direction::ToArgot);
        assert!(translation.is_empty());
        assert_eq!(translation.output, "");

        let translation = dictionary(Language::English).translate("   ", Direction::ToNatural);
        assert_eq!(translation.output, "   ");
    }

    // ============================================================================
    // Thieves' Cant → English
    // ============================================================================

    #[test]
    fn test_e2e_cant_phrase() {
        let translation =
            dictionary(Language::English).translate("Bene darkmans, cove", Direction::ToNatural);

        assert_eq!(translation.output, "Good night, friend");
        assert_eq!(translation.tokens.len(), 3);
        assert_eq!(translation.tokens[0].original, "Bene darkmans,");
        assert_eq!(
            translation.tokens[2].alternatives,
            Some(vec!["a man".to_string(), "a fellow".to_string()])
        );
    }

    #[test]
    fn test_e2e_three_word_phrase_beats_parts() {
        let translation =
            dictionary(Language::English).translate("stop hole abbey ken", Direction::ToNatural);
        assert_eq!(
            translation.output,
            "the chief rendezvous of thieves a house"
        );
        assert_eq!(translation.translated_count(), 2);
    }

    #[test]
    fn test_e2e_hyphenated_term() {
        let translation =
            dictionary(Language::English).translate("Harman-beck!", Direction::ToNatural);
        assert_eq!(translation.output, "A constable!");
    }

    // ============================================================================
    // French ↔ argot
    // ============================================================================

    #[test]
    fn test_e2e_french_sentence() {
        let translation = dictionary(Language::French)
            .translate("Le voleur a pris l'argent la nuit", Direction::ToArgot);

        assert_eq!(translation.output, "Le larron a pris fric la sorgue");
        assert_eq!(
            translation.tokens[2].alternatives,
            Some(vec!["tire-laine".to_string(), "cambrioleur".to_string()])
        );
    }

    #[test]
    fn test_e2e_french_accented_gloss_word() {
        let translation = dictionary(Language::French).translate("Dérober", Direction::ToArgot);
        assert_eq!(translation.output, "Chouraver");
    }

    #[test]
    fn test_e2e_argot_phrase() {
        let translation = dictionary(Language::French)
            .translate("Le flic et la maison poulaga", Direction::ToNatural);
        assert_eq!(translation.output, "Le policier et la police");
    }

    // ============================================================================
    // Free-function entry point
    // ============================================================================

    #[test]
    fn test_translate_text_matches_dictionary() {
        let table = builtin_table(Language::English).unwrap();
        let forward = build_forward_map(&table);
        let reverse = build_reverse_map(&table);

        let translation = translate_text(
            "rum diver",
            Direction::ToNatural,
            &forward,
            &reverse,
            stop_words(Language::English),
        );
        assert_eq!(
            translation,
            Dictionary::new(table).translate("rum diver", Direction::ToNatural)
        );
        assert_eq!(translation.output, "a skilled pickpocket");
    }
}
