//! Spelling correction over a frequency dictionary.

use std::fmt;
use std::path::Path;

use symspell::{AsciiStringStrategy, SymSpell, Verbosity};

use crate::error::CollaboratorError;
use crate::pipeline::traits::SpellCorrector;

/// Symmetric-delete spelling correction.
///
/// Wraps a `symspell` engine fed by a `term count` frequency dictionary.
/// Until a dictionary is loaded the corrector is the identity. Only
/// all-lowercase alphabetic tokens are candidates for correction: mixed
/// case usually marks names and acronyms, and this corrector already
/// errs on the aggressive side for plain words.
pub struct SymSpellCorrector {
    engine: SymSpell<AsciiStringStrategy>,
    max_edit_distance: i64,
}

impl Default for SymSpellCorrector {
    fn default() -> Self {
        Self {
            engine: SymSpell::default(),
            max_edit_distance: 2,
        }
    }
}

impl fmt::Debug for SymSpellCorrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymSpellCorrector")
            .field("max_edit_distance", &self.max_edit_distance)
            .finish()
    }
}

impl SymSpellCorrector {
    /// Corrector with no dictionary loaded; corrects nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corrector from a frequency dictionary file with
    /// space-separated `term count` lines.
    pub fn with_dictionary(path: impl AsRef<Path>) -> Result<Self, CollaboratorError> {
        let mut corrector = Self::default();
        corrector.load_dictionary(path)?;
        Ok(corrector)
    }

    /// Load (or extend with) a frequency dictionary file.
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>) -> Result<(), CollaboratorError> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            CollaboratorError::backend(format!("non-UTF-8 dictionary path: {}", path.display()))
        })?;
        if !self.engine.load_dictionary(path_str, 0, 1, " ") {
            return Err(CollaboratorError::backend(format!(
                "failed to load frequency dictionary from {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn correct_token(&self, token: &str) -> String {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_lowercase()) {
            return token.to_string();
        }
        let suggestions = self.engine.lookup(token, Verbosity::Top, self.max_edit_distance);
        suggestions
            .into_iter()
            .next()
            .map(|suggestion| suggestion.term)
            .unwrap_or_else(|| token.to_string())
    }
}

impl SpellCorrector for SymSpellCorrector {
    fn correct(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(text
            .split_whitespace()
            .map(|token| self.correct_token(token))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dictionary() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello 100").unwrap();
        writeln!(file, "world 80").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_no_dictionary_is_identity() {
        let corrector = SymSpellCorrector::new();
        assert_eq!(corrector.correct("helo wrld").unwrap(), "helo wrld");
    }

    #[test]
    fn test_corrects_close_misspellings() {
        let file = dictionary();
        let corrector = SymSpellCorrector::with_dictionary(file.path()).unwrap();
        assert_eq!(corrector.correct("helo wrld").unwrap(), "hello world");
    }

    #[test]
    fn test_dictionary_terms_untouched() {
        let file = dictionary();
        let corrector = SymSpellCorrector::with_dictionary(file.path()).unwrap();
        assert_eq!(corrector.correct("hello world").unwrap(), "hello world");
    }

    #[test]
    fn test_skips_capitalized_tokens() {
        let file = dictionary();
        let corrector = SymSpellCorrector::with_dictionary(file.path()).unwrap();
        assert_eq!(corrector.correct("Helo").unwrap(), "Helo");
    }

    #[test]
    fn test_missing_dictionary_file_fails() {
        let result = SymSpellCorrector::with_dictionary("/nonexistent/dictionary.txt");
        assert!(result.is_err());
    }
}
