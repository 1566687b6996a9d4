//! Core record and configuration types.

use serde::{Deserialize, Serialize};

/// One unit of pipeline input: free-form text plus an opaque label.
///
/// `text` is optional because real-world corpora carry missing values;
/// records without text are dropped by the entry filter, never treated as
/// errors. The label is carried through the pipeline untouched and is never
/// inspected by any stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<L> {
    pub text: Option<String>,
    pub label: L,
}

impl<L> RawRecord<L> {
    /// Build a record with text present.
    pub fn new(text: impl Into<String>, label: L) -> Self {
        Self {
            text: Some(text.into()),
            label,
        }
    }
}

/// A record that survived the entry filter.
///
/// Text is always present here; the output collection additionally
/// guarantees it is non-empty and pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<L> {
    pub text: String,
    pub label: L,
}

/// Lexical normal-form choice for the final reduction stage.
///
/// Lemmatization and stemming are alternatives; the enum makes applying
/// both in one run unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeForm {
    /// Leave token forms as they are.
    #[default]
    None,
    /// Reduce each whitespace-delimited token to its verb root.
    Lemmatize,
    /// Reduce each whitespace-delimited token by suffix stripping.
    Stem,
}

/// Flags selecting which optional stages run.
///
/// The configuration is read-only for the duration of a run. Flags only
/// gate whether an optional stage executes; they never reorder stages.
/// `Default` disables every optional stage, leaving only the mandatory
/// cleanup (contraction expansion, markup stripping, structural and
/// whitespace normalization, de-duplication, trim).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Lowercase every whitespace-delimited token.
    pub lowercase: bool,
    /// Remove social-media artifacts (retweet markers, URLs, mentions).
    pub platform_cleanup: bool,
    /// Delete every character that is neither alphanumeric nor whitespace.
    pub strip_punctuation: bool,
    /// Remove pictographic symbols (emoji).
    pub strip_symbols: bool,
    /// Remove stopwords.
    pub strip_stopwords: bool,
    /// Transliterate accented characters to ASCII.
    pub normalize_accents: bool,
    /// Run the spell corrector. Use with caution: it can alter tokens it
    /// misjudges as typos.
    pub correct_spelling: bool,
    /// Final lexical reduction, if any.
    pub normalize_form: NormalizeForm,
}

impl ScrubConfig {
    /// Configuration with every optional stage disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable token-wise lowercasing.
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Enable or disable platform artifact removal.
    pub fn with_platform_cleanup(mut self, enabled: bool) -> Self {
        self.platform_cleanup = enabled;
        self
    }

    /// Enable or disable punctuation stripping.
    pub fn with_strip_punctuation(mut self, enabled: bool) -> Self {
        self.strip_punctuation = enabled;
        self
    }

    /// Enable or disable symbol (emoji) stripping.
    pub fn with_strip_symbols(mut self, enabled: bool) -> Self {
        self.strip_symbols = enabled;
        self
    }

    /// Enable or disable stopword removal.
    pub fn with_strip_stopwords(mut self, enabled: bool) -> Self {
        self.strip_stopwords = enabled;
        self
    }

    /// Enable or disable accent transliteration.
    pub fn with_normalize_accents(mut self, enabled: bool) -> Self {
        self.normalize_accents = enabled;
        self
    }

    /// Enable or disable spelling correction.
    pub fn with_correct_spelling(mut self, enabled: bool) -> Self {
        self.correct_spelling = enabled;
        self
    }

    /// Select the final lexical reduction.
    pub fn with_normalize_form(mut self, form: NormalizeForm) -> Self {
        self.normalize_form = form;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_disables_optional_stages() {
        let cfg = ScrubConfig::default();
        assert!(!cfg.lowercase);
        assert!(!cfg.platform_cleanup);
        assert!(!cfg.strip_punctuation);
        assert!(!cfg.strip_symbols);
        assert!(!cfg.strip_stopwords);
        assert!(!cfg.normalize_accents);
        assert!(!cfg.correct_spelling);
        assert_eq!(cfg.normalize_form, NormalizeForm::None);
    }

    #[test]
    fn test_builder_style_flags() {
        let cfg = ScrubConfig::new()
            .with_lowercase(true)
            .with_platform_cleanup(true)
            .with_normalize_form(NormalizeForm::Stem);
        assert!(cfg.lowercase);
        assert!(cfg.platform_cleanup);
        assert_eq!(cfg.normalize_form, NormalizeForm::Stem);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{ "lowercase": true, "normalize_form": "stem" }"#;
        let cfg: ScrubConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.lowercase);
        assert_eq!(cfg.normalize_form, NormalizeForm::Stem);
        // Omitted flags fall back to their defaults.
        assert!(!cfg.strip_punctuation);
        assert_eq!(cfg, ScrubConfig::new().with_lowercase(true).with_normalize_form(NormalizeForm::Stem));
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = ScrubConfig::new()
            .with_strip_stopwords(true)
            .with_normalize_form(NormalizeForm::Lemmatize);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["normalize_form"], "lemmatize");
        let back: ScrubConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_raw_record_new_has_text() {
        let record = RawRecord::new("hello", 7u32);
        assert_eq!(record.text.as_deref(), Some("hello"));
        assert_eq!(record.label, 7);
    }
}
