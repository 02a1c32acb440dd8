//! Structural validation: a separate pass over the token stream that checks
//! tag balance and vocabulary before the main scan runs. Its issues are
//! merged into the parse output; they never stop anything.

use crate::ParseIssue;
use crate::registry::StrategyRegistry;
use crate::token::{Token, tokenize};

/// Tags exempt from open/close tracking.
pub const SELF_CLOSING_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

pub fn validate_structure(html: &str, registry: &StrategyRegistry) -> Vec<ParseIssue> {
    let mut issues = Vec::new();
    let mut open: Vec<String> = Vec::new();

    for token in tokenize(html) {
        match token {
            Token::Text(_) => {}
            Token::Open { name, .. } => {
                let name = name.to_ascii_lowercase();
                if !registry.contains(&name) {
                    issues.push(ParseIssue::UnsupportedTag(name.clone()));
                }
                if !SELF_CLOSING_TAGS.contains(&name.as_str()) {
                    open.push(name);
                }
            }
            Token::Close { name } => {
                let name = name.to_ascii_lowercase();
                if SELF_CLOSING_TAGS.contains(&name.as_str()) {
                    continue;
                }
                match open.last() {
                    Some(top) if *top == name => {
                        open.pop();
                    }
                    Some(top) => issues.push(ParseIssue::MismatchedClosingTag {
                        found: name,
                        expected: top.clone(),
                    }),
                    None => issues.push(ParseIssue::UnexpectedClosingTag(name)),
                }
            }
        }
    }

    issues.extend(open.into_iter().map(ParseIssue::UnclosedTag));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(html: &str) -> Vec<ParseIssue> {
        validate_structure(html, &StrategyRegistry::with_defaults())
    }

    #[test]
    fn well_formed_input_is_clean() {
        assert!(validate("<b>Hello</b> <i>World</i>").is_empty());
        assert!(validate("<ul><li>a</li></ul>").is_empty());
    }

    #[test]
    fn unclosed_tag_is_reported() {
        assert_eq!(
            validate("<b>Unclosed bold"),
            vec![ParseIssue::UnclosedTag("b".to_string())]
        );
    }

    #[test]
    fn mismatched_close_is_reported() {
        let issues = validate("<b><i>x</b></i>");
        assert!(issues.contains(&ParseIssue::MismatchedClosingTag {
            found: "b".to_string(),
            expected: "i".to_string(),
        }));
    }

    #[test]
    fn self_closing_tags_are_exempt() {
        assert!(validate("line<br>break").is_empty());
        assert!(validate("a<br/>b").is_empty());
    }

    #[test]
    fn unknown_opening_tag_is_reported() {
        let issues = validate("<table>x</table>");
        assert!(issues.contains(&ParseIssue::UnsupportedTag("table".to_string())));
    }

    #[test]
    fn stray_close_is_reported() {
        assert_eq!(
            validate("text</b>"),
            vec![ParseIssue::UnexpectedClosingTag("b".to_string())]
        );
    }
}
