//! Reassembly of translated tokens into display text

use crate::data::Token;

/// Join every token's translated text in order
///
/// Untranslated tokens carry their original text, so the output keeps the
/// input's whitespace runs and punctuation wherever nothing was substituted.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.translated.as_str()).collect()
}
