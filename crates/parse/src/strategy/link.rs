//! `<a>` — fixed link styling plus lightweight href validation.

use super::TagStrategy;
use crate::ParseIssue;
use vellum_style::{LINK_COLOR, TextDecoration, TextStyle, attr_value};

pub struct LinkStrategy;

/// Accepts absolute http(s) URLs, relative paths, other schemes, and
/// fragment/query references. Rejects empty values and anything containing
/// whitespace.
fn is_url_like(href: &str) -> bool {
    if href.is_empty() || href.chars().any(char::is_whitespace) {
        return false;
    }
    if href.starts_with('#')
        || href.starts_with('?')
        || href.starts_with('/')
        || href.starts_with("./")
        || href.starts_with("../")
    {
        return true;
    }
    if let Some(colon) = href.find(':') {
        let scheme = &href[..colon];
        return scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    }
    // Bare relative reference like "page.html" or "docs/intro".
    href.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

impl TagStrategy for LinkStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["a"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            color: LINK_COLOR,
            text_decoration: TextDecoration::Underline,
            ..style.clone()
        }
    }

    fn validate_attributes(&self, attrs: &str, _tag: &str) -> Vec<ParseIssue> {
        // A missing href is fine; a present but empty or malformed one is not.
        match attr_value(attrs, "href") {
            Some(href) if !is_url_like(href) => {
                vec![ParseIssue::InvalidHref(href.to_string())]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::Color;

    #[test]
    fn link_style_is_blue_and_underlined() {
        let style = LinkStrategy.apply_style(&TextStyle::default(), "", "a");
        assert_eq!(style.color, Color::rgb(0x00, 0x66, 0xCC));
        assert_eq!(style.text_decoration, TextDecoration::Underline);
    }

    #[test]
    fn href_shapes() {
        for ok in [
            "https://example.com",
            "http://example.com/a?b=c",
            "/docs",
            "./here",
            "../up",
            "#section",
            "?query=1",
            "mailto:a@b.c",
            "page.html",
        ] {
            assert!(is_url_like(ok), "{ok}");
        }
        for bad in ["", "not a url", "://x", " https://x"] {
            assert!(!is_url_like(bad), "{bad:?}");
        }
    }

    #[test]
    fn missing_href_is_not_an_error() {
        assert!(LinkStrategy.validate_attributes("", "a").is_empty());
        assert!(
            LinkStrategy
                .validate_attributes(r#" name="anchor""#, "a")
                .is_empty()
        );
    }

    #[test]
    fn empty_href_is_an_error() {
        let issues = LinkStrategy.validate_attributes(r#" href="""#, "a");
        assert_eq!(issues, vec![ParseIssue::InvalidHref(String::new())]);
    }
}
