//! Snowball stemming.

use rust_stemmers::{Algorithm, Stemmer as Snowball};

use crate::error::CollaboratorError;
use crate::pipeline::traits::Stemmer;

/// Rule-based suffix stripping via the Snowball English stemmer.
///
/// Tokens are folded to lowercase before stemming; the Snowball rules
/// assume lowercase input and the reference stemmer folds case the same
/// way.
pub struct SnowballStemmer {
    inner: Snowball,
}

impl SnowballStemmer {
    /// English-language stemmer.
    pub fn english() -> Self {
        Self {
            inner: Snowball::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> Result<String, CollaboratorError> {
        Ok(self.inner.stem(&token.to_lowercase()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(token: &str) -> String {
        SnowballStemmer::english().stem(token).unwrap()
    }

    #[test]
    fn test_suffix_stripping() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("fruitlessly"), "fruitless");
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(stem("Running"), "run");
        assert_eq!(stem("SHE"), "she");
    }

    #[test]
    fn test_short_tokens_untouched() {
        assert_eq!(stem("run"), "run");
        assert_eq!(stem("a"), "a");
    }
}
