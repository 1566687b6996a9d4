//! Rule-based reduction of verbs to their root form.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::error::CollaboratorError;
use crate::pipeline::traits::Lemmatizer;

/// Irregular verb forms that no suffix rule can reach.
static IRREGULAR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("are", "be"),
        ("is", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("began", "begin"),
        ("begun", "begin"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("built", "build"),
        ("came", "come"),
        ("chose", "choose"),
        ("did", "do"),
        ("does", "do"),
        ("done", "do"),
        ("drank", "drink"),
        ("drove", "drive"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("felt", "feel"),
        ("flew", "fly"),
        ("forgot", "forget"),
        ("found", "find"),
        ("gave", "give"),
        ("given", "give"),
        ("goes", "go"),
        ("gone", "go"),
        ("got", "get"),
        ("gotten", "get"),
        ("had", "have"),
        ("has", "have"),
        ("heard", "hear"),
        ("held", "hold"),
        ("kept", "keep"),
        ("knew", "know"),
        ("known", "know"),
        ("left", "leave"),
        ("lost", "lose"),
        ("made", "make"),
        ("meant", "mean"),
        ("met", "meet"),
        ("paid", "pay"),
        ("ran", "run"),
        ("rose", "rise"),
        ("said", "say"),
        ("sang", "sing"),
        ("sat", "sit"),
        ("saw", "see"),
        ("seen", "see"),
        ("sent", "send"),
        ("slept", "sleep"),
        ("sold", "sell"),
        ("spent", "spend"),
        ("spoke", "speak"),
        ("stood", "stand"),
        ("taken", "take"),
        ("taught", "teach"),
        ("thought", "think"),
        ("threw", "throw"),
        ("told", "tell"),
        ("took", "take"),
        ("understood", "understand"),
        ("went", "go"),
        ("won", "win"),
        ("wore", "wear"),
        ("wrote", "write"),
    ]
    .into_iter()
    .collect()
});

/// Reduces whitespace-delimited tokens toward their verb root: an
/// irregular-form table first, then ordered suffix rules (`ies`, `ing`,
/// `ed`, trailing `s`) with final-consonant undoubling.
///
/// The rules are a dictionary-free approximation. They handle regular
/// inflection well (running, stopped, studies, walks) and leave anything
/// they cannot classify untouched rather than guessing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleVerbLemmatizer;

impl RuleVerbLemmatizer {
    pub fn new() -> Self {
        Self
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Consonants that English doubles before `-ing`/`-ed` (stopped,
/// planned, grabbed). `l`, `s`, and `z` are excluded: their doubles are
/// usually part of the root (call, pass, buzz).
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 {
        let last = bytes[bytes.len() - 1];
        if last == bytes[bytes.len() - 2]
            && matches!(last, b'b' | b'd' | b'g' | b'm' | b'n' | b'p' | b'r' | b't')
        {
            return &stem[..stem.len() - 1];
        }
    }
    stem
}

/// A three-letter consonant-vowel-consonant stem usually dropped a final
/// `e` during inflection (mak-ing, lov-ed, hop-ing).
fn needs_final_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    bytes.len() == 3
        && !is_vowel(bytes[0])
        && is_vowel(bytes[1])
        && !is_vowel(bytes[2])
        && !matches!(bytes[2], b'w' | b'x' | b'y')
}

fn reduce(token: &str) -> String {
    if !token.is_ascii() || token.len() < 4 {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if stem.len() >= 3 {
                let undoubled = undouble(stem);
                if undoubled.len() < stem.len() {
                    return undoubled.to_string();
                }
                if needs_final_e(stem) {
                    return format!("{stem}e");
                }
                return stem.to_string();
            }
        }
    }
    if let Some(stem) = token.strip_suffix('s') {
        if stem.len() >= 3 && !stem.ends_with('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

impl Lemmatizer for RuleVerbLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String, CollaboratorError> {
        let lowered = token.to_lowercase();
        if let Some(root) = IRREGULAR.get(lowered.as_str()) {
            return Ok((*root).to_string());
        }
        Ok(reduce(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(token: &str) -> String {
        RuleVerbLemmatizer::new().lemmatize(token).unwrap()
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemma("was"), "be");
        assert_eq!(lemma("went"), "go");
        assert_eq!(lemma("thought"), "think");
        assert_eq!(lemma("Went"), "go");
    }

    #[test]
    fn test_progressive_forms() {
        assert_eq!(lemma("running"), "run");
        assert_eq!(lemma("walking"), "walk");
        assert_eq!(lemma("making"), "make");
    }

    #[test]
    fn test_past_forms() {
        assert_eq!(lemma("stopped"), "stop");
        assert_eq!(lemma("walked"), "walk");
        assert_eq!(lemma("loved"), "love");
    }

    #[test]
    fn test_third_person_and_plural_s() {
        assert_eq!(lemma("runs"), "run");
        assert_eq!(lemma("walks"), "walk");
        assert_eq!(lemma("studies"), "study");
    }

    #[test]
    fn test_roots_left_alone() {
        assert_eq!(lemma("run"), "run");
        assert_eq!(lemma("bring"), "bring");
        assert_eq!(lemma("pass"), "pass");
    }

    #[test]
    fn test_idempotent_on_roots() {
        for word in ["run", "walk", "study", "be"] {
            assert_eq!(lemma(&lemma(word)), lemma(word));
        }
    }
}
