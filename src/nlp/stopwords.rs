//! Stopword filtering backed by the `stop-words` lexicons.
//!
//! [`StopwordFilter`] holds the word set; [`LexiconStopwordRemover`] is
//! the text-level collaborator the pipeline drives. Matching is always
//! case-insensitive: the lexicons are lowercase and tokens are folded
//! before lookup.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::CollaboratorError;
use crate::pipeline::traits::StopwordRemover;

/// A set of stopwords for one language, plus any custom additions.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Load the lexicon for a language code or name. Unknown languages
    /// fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).into_iter().collect(),
        }
    }

    /// Filter with no stopwords at all.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add custom words to the filter.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Text-level stopword removal over whitespace-delimited tokens.
///
/// Surviving tokens keep their relative order and are re-joined with
/// single spaces.
#[derive(Debug, Clone, Default)]
pub struct LexiconStopwordRemover {
    filter: StopwordFilter,
}

impl LexiconStopwordRemover {
    /// Remover backed by the English lexicon.
    pub fn english() -> Self {
        Self::default()
    }

    /// Remover backed by an arbitrary filter.
    pub fn with_filter(filter: StopwordFilter) -> Self {
        Self { filter }
    }
}

impl StopwordRemover for LexiconStopwordRemover {
    fn remove_stopwords(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(text
            .split_whitespace()
            .filter(|token| !self.filter.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lexicon() {
        let filter = StopwordFilter::new("en");
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("pipeline"));
    }

    #[test]
    fn test_german_lexicon() {
        let filter = StopwordFilter::new("de");
        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("pipeline"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("tlh");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_words() {
        let mut filter = StopwordFilter::from_words(["Foo", "bar"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("BAR"));
        assert!(!filter.is_stopword("baz"));

        filter.add_words(["baz"]);
        assert!(filter.is_stopword("baz"));
    }

    #[test]
    fn test_empty_filter_removes_nothing() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_remover_drops_stopwords_in_place() {
        let remover = LexiconStopwordRemover::english();
        let out = remover.remove_stopwords("this is a cleaning test").unwrap();
        assert_eq!(out, "cleaning test");
    }

    #[test]
    fn test_remover_with_custom_filter() {
        let remover =
            LexiconStopwordRemover::with_filter(StopwordFilter::from_words(["noise"]));
        let out = remover.remove_stopwords("signal noise signal").unwrap();
        assert_eq!(out, "signal signal");
    }
}
