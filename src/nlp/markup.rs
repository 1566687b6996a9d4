//! Markup stripping — extract visible text from HTML.

use scraper::Html;

use crate::error::CollaboratorError;
use crate::pipeline::traits::MarkupStripper;

/// Extracts the visible text content of an HTML fragment, joining
/// tag-adjacent text segments with a separator (a single space by
/// default). Parsing is delegated to `scraper`; plain text without any
/// markup passes through unchanged, and character entities are decoded
/// the way a browser would decode them.
#[derive(Debug, Clone)]
pub struct HtmlMarkupStripper {
    separator: String,
}

impl Default for HtmlMarkupStripper {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }
}

impl HtmlMarkupStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom separator between tag-adjacent text segments.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl MarkupStripper for HtmlMarkupStripper {
    fn extract_text(&self, markup: &str) -> Result<String, CollaboratorError> {
        let fragment = Html::parse_fragment(markup);
        let segments: Vec<&str> = fragment.root_element().text().collect();
        Ok(segments.join(&self.separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_simple_tags() {
        let stripper = HtmlMarkupStripper::new();
        assert_eq!(stripper.extract_text("<p>Hi there</p>").unwrap(), "Hi there");
    }

    #[test]
    fn test_joins_adjacent_segments_with_space() {
        let stripper = HtmlMarkupStripper::new();
        assert_eq!(stripper.extract_text("Hi<br>there").unwrap(), "Hi there");
    }

    #[test]
    fn test_nested_markup() {
        let stripper = HtmlMarkupStripper::new();
        let out = stripper
            .extract_text("<div><b>bold</b><i>italic</i></div>")
            .unwrap();
        assert_eq!(out, "bold italic");
    }

    #[test]
    fn test_plain_text_passthrough() {
        let stripper = HtmlMarkupStripper::new();
        assert_eq!(stripper.extract_text("no tags at all").unwrap(), "no tags at all");
    }

    #[test]
    fn test_empty_input() {
        let stripper = HtmlMarkupStripper::new();
        assert_eq!(stripper.extract_text("").unwrap(), "");
    }

    #[test]
    fn test_custom_separator() {
        let stripper = HtmlMarkupStripper::with_separator("|");
        assert_eq!(stripper.extract_text("a<br>b").unwrap(), "a|b");
    }
}
