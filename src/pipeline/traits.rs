//! Collaborator trait definitions for the pipeline.
//!
//! Each trait is the seam to one external text operation the orchestrator
//! sequences but does not implement itself. Implementations are statically
//! dispatched; trait objects also work for dynamic composition.
//!
//! All methods take `&self` and are pure with respect to the record
//! collection: a collaborator may hold lookup tables or a parsing engine,
//! but it must not retain state across invocations on different records.
//! Implementations are `Send + Sync` so a shared pipeline can drive
//! per-record application from parallel workers.
//!
//! Every text-producing method returns `Result`: a failing collaborator
//! aborts the whole run, by design. Built-in adapters are infallible and
//! always return `Ok`.

use crate::error::CollaboratorError;

/// Expands informal contractions to their full forms.
///
/// # Contract
///
/// Must be idempotent: expanding twice yields the same text as expanding
/// once. The orchestrator deliberately applies this stage two times, once
/// on either side of the optional casing stage.
pub trait ContractionExpander: Send + Sync {
    fn expand(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Replaces accented and diacritic characters with their nearest ASCII
/// equivalent ("Málaga" becomes "Malaga").
pub trait Transliterator: Send + Sync {
    fn to_ascii(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Removes non-textual pictographic symbols (emoji).
pub trait SymbolStripper: Send + Sync {
    fn strip_symbols(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Removes stopwords, preserving the relative order of surviving tokens.
pub trait StopwordRemover: Send + Sync {
    fn remove_stopwords(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Extracts the visible text content from markup, joining tag-adjacent
/// segments with a single space.
pub trait MarkupStripper: Send + Sync {
    fn extract_text(&self, markup: &str) -> Result<String, CollaboratorError>;
}

/// Corrects misspelled tokens.
///
/// Correction is heuristic and can alter tokens it misjudges as typos;
/// the pipeline exposes it behind an opt-in flag for that reason.
pub trait SpellCorrector: Send + Sync {
    fn correct(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Reduces a single whitespace-delimited token to its verb root.
///
/// The orchestrator tokenizes on whitespace, lemmatizes each token, and
/// re-joins with single spaces.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String, CollaboratorError>;
}

/// Reduces a single whitespace-delimited token by rule-based suffix
/// stripping. Tokenization and re-joining are the orchestrator's job,
/// as with [`Lemmatizer`].
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> Result<String, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shouter;

    impl Transliterator for Shouter {
        fn to_ascii(&self, text: &str) -> Result<String, CollaboratorError> {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn test_collaborator_as_trait_object() {
        let translit: Box<dyn Transliterator> = Box::new(Shouter);
        assert_eq!(translit.to_ascii("ok").unwrap(), "OK");
    }

    #[test]
    fn test_failing_collaborator_surfaces_error() {
        struct Broken;
        impl SpellCorrector for Broken {
            fn correct(&self, _text: &str) -> Result<String, CollaboratorError> {
                Err(CollaboratorError::backend("dictionary unavailable"))
            }
        }

        let err = Broken.correct("whatever").unwrap_err();
        assert!(err.to_string().contains("dictionary unavailable"));
    }
}
