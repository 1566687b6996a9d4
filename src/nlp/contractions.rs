//! Contraction expansion via an ordered regex table.
//!
//! Specific irregular forms run before the generic suffix rules so that
//! "can't" becomes "cannot" rather than "ca not". Expanded output
//! contains none of the apostrophe forms the table matches, which makes
//! the expansion idempotent; the pipeline relies on that when it applies
//! this stage a second time after casing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CollaboratorError;
use crate::pipeline::traits::ContractionExpander;

static RE_CANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bcan't\b").unwrap());
static RE_WONT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bwon't\b").unwrap());
static RE_SHANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bshan't\b").unwrap());
static RE_AINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bain't\b").unwrap());
static RE_LETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blet's\b").unwrap());
static RE_ITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bit's\b").unwrap());
static RE_NT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)n't\b").unwrap());
static RE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)'re\b").unwrap());
static RE_VE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)'ve\b").unwrap());
static RE_LL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)'ll\b").unwrap());
static RE_D: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)'d\b").unwrap());
static RE_M: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\w+)'m\b").unwrap());

/// Regex-table contraction expander for informal English.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexContractionExpander;

impl RegexContractionExpander {
    pub fn new() -> Self {
        Self
    }
}

impl ContractionExpander for RegexContractionExpander {
    fn expand(&self, text: &str) -> Result<String, CollaboratorError> {
        let text = RE_CANT.replace_all(text, "cannot").into_owned();
        let text = RE_WONT.replace_all(&text, "will not").into_owned();
        let text = RE_SHANT.replace_all(&text, "shall not").into_owned();
        let text = RE_AINT.replace_all(&text, "is not").into_owned();
        let text = RE_LETS.replace_all(&text, "let us").into_owned();
        let text = RE_ITS.replace_all(&text, "it is").into_owned();
        let text = RE_NT.replace_all(&text, "$1 not").into_owned();
        let text = RE_RE.replace_all(&text, "$1 are").into_owned();
        let text = RE_VE.replace_all(&text, "$1 have").into_owned();
        let text = RE_LL.replace_all(&text, "$1 will").into_owned();
        let text = RE_D.replace_all(&text, "$1 would").into_owned();
        Ok(RE_M.replace_all(&text, "$1 am").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> String {
        RegexContractionExpander::new().expand(text).unwrap()
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(expand("can't"), "cannot");
        assert_eq!(expand("won't"), "will not");
        assert_eq!(expand("let's go"), "let us go");
    }

    #[test]
    fn test_generic_suffix_forms() {
        assert_eq!(expand("don't stop"), "do not stop");
        assert_eq!(expand("we're here"), "we are here");
        assert_eq!(expand("I'm sure you'll see"), "I am sure you will see");
        assert_eq!(expand("they'd seen what we've done"), "they would seen what we have done");
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(expand("It's fine"), "it is fine");
        assert_eq!(expand("DON'T"), "DO not");
    }

    #[test]
    fn test_idempotent() {
        let once = expand("can't won't don't it's I'm");
        let twice = expand(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(expand("nothing contracted here"), "nothing contracted here");
    }
}
