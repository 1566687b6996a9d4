//! Platform cleanup — removal of social-media artifacts.
//!
//! Handles the five artifact categories common in tweet-like corpora:
//! retweet prefixes, the HTML ampersand entity, URLs, dangling domain
//! fragments, and mentions. Each category is a sequential independent
//! pass, so overlapping matches resolve by pass order: a mention inside
//! an already-removed URL is simply a no-op for the mention pass.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_RETWEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"RT @\w+ ").unwrap());
static RE_HTTP_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static RE_WWW_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\S+").unwrap());
static RE_DOMAIN_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r" [A-Za-z]*\.com").unwrap());
static RE_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\S+").unwrap());

/// Remove retweet markers, `&amp;` entities, URLs, space-prefixed `.com`
/// fragments, and `@mentions`, in that order.
pub fn scrub_platform_artifacts(text: &str) -> String {
    let text = RE_RETWEET.replace_all(text, " ");
    let text = text.replace("&amp;", "");
    let text = RE_HTTP_URL.replace_all(&text, "");
    let text = RE_WWW_URL.replace_all(&text, "");
    let text = RE_DOMAIN_FRAGMENT.replace_all(&text, "");
    RE_MENTION.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_retweet_prefix() {
        let out = scrub_platform_artifacts("RT @bob hello world");
        assert!(!out.contains("RT"));
        assert!(!out.contains("@bob"));
        assert!(out.contains("hello world"));
    }

    #[test]
    fn test_removes_ampersand_entity() {
        assert_eq!(scrub_platform_artifacts("salt &amp; pepper"), "salt  pepper");
    }

    #[test]
    fn test_removes_http_and_www_urls() {
        let out = scrub_platform_artifacts("go to http://example.com/x now");
        assert!(!out.contains("http"));
        assert!(!out.contains("example.com"));

        let out = scrub_platform_artifacts("see www.example.org please");
        assert!(!out.contains("www"));
    }

    #[test]
    fn test_removes_trailing_domain_fragment() {
        let out = scrub_platform_artifacts("buy it at shop.com today");
        assert!(!out.contains("shop.com"));
        assert!(out.contains("buy it at"));
    }

    #[test]
    fn test_removes_mentions() {
        let out = scrub_platform_artifacts("thanks @alice for the tip");
        assert!(!out.contains("@alice"));
        assert!(out.contains("thanks"));
        assert!(out.contains("for the tip"));
    }

    #[test]
    fn test_mention_inside_url_is_noop() {
        // The URL pass removes the whole token; the later mention pass
        // finds nothing left to match.
        let out = scrub_platform_artifacts("see http://a.com/@user now");
        assert!(!out.contains("@user"));
        assert!(out.contains("see"));
        assert!(out.contains("now"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(scrub_platform_artifacts("nothing to do here"), "nothing to do here");
    }
}
