/// Error types for loading and resolving term tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CantError {
    /// Locale is malformed or names a language without a term table
    UnsupportedLanguage(String),
    /// A term table file or directory could not be read
    Load(String),
    /// A term table could not be decoded
    Parse(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for CantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CantError::UnsupportedLanguage(msg) => write!(f, "Unsupported language: {}", msg),
            CantError::Load(msg) => write!(f, "Load error: {}", msg),
            CantError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CantError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CantError {}

/// Result type for term table operations
pub type CantResult<T> = Result<T, CantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            CantError::UnsupportedLanguage("de".to_string()).to_string(),
            "Unsupported language: de"
        );
        assert_eq!(
            CantError::Load("missing".to_string()).to_string(),
            "Load error: missing"
        );
        assert_eq!(CantError::Other("plain".to_string()).to_string(), "plain");
    }
}
