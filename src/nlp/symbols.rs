//! Pictographic symbol removal.

use crate::error::CollaboratorError;
use crate::pipeline::traits::SymbolStripper;

/// Removes emoji and related pictographic characters.
///
/// Coverage is by Unicode block: emoticons, miscellaneous symbols and
/// pictographs, dingbats, transport, supplemental and extended symbols,
/// regional indicator (flag) pairs, plus the zero-width joiner, keycap
/// combiner, and variation selectors that travel with emoji sequences.
/// Ordinary letters, digits, and punctuation are untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PictographStripper;

impl PictographStripper {
    pub fn new() -> Self {
        Self
    }
}

fn is_pictograph(c: char) -> bool {
    matches!(c,
        '\u{1F1E6}'..='\u{1F1FF}'   // regional indicators (flags)
        | '\u{1F300}'..='\u{1F5FF}' // misc symbols and pictographs
        | '\u{1F600}'..='\u{1F64F}' // emoticons
        | '\u{1F680}'..='\u{1F6FF}' // transport and map symbols
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols
        | '\u{1FA70}'..='\u{1FAFF}' // extended-A symbols
        | '\u{2600}'..='\u{27BF}'   // misc symbols + dingbats
        | '\u{2B00}'..='\u{2BFF}'   // misc symbols and arrows
        | '\u{FE00}'..='\u{FE0F}'   // variation selectors
        | '\u{200D}'                // zero-width joiner
        | '\u{20E3}'                // combining keycap
    )
}

impl SymbolStripper for PictographStripper {
    fn strip_symbols(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(text.chars().filter(|c| !is_pictograph(*c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_emoji() {
        let stripper = PictographStripper::new();
        let out = stripper.strip_symbols("Hello 👋 World 🌍").unwrap();
        assert_eq!(out, "Hello  World ");
    }

    #[test]
    fn test_removes_zwj_sequences() {
        let stripper = PictographStripper::new();
        // Family emoji built from people joined with zero-width joiners.
        let out = stripper.strip_symbols("a👨‍👩‍👧b").unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_keeps_text_and_punctuation() {
        let stripper = PictographStripper::new();
        let input = "keep: words, digits 42, and (parens)!";
        assert_eq!(stripper.strip_symbols(input).unwrap(), input);
    }
}
