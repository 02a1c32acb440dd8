//! The scan loop: drives the token stream through the strategy registry,
//! maintains the style stack, and accumulates segments and issues.

use crate::ParseIssue;
use crate::family::FamilyState;
use crate::registry::StrategyRegistry;
use crate::spacing::analyze_spacing;
use crate::strategy::{StackEffect, TagContext};
use crate::token::{Token, tokenize};
use crate::validate::validate_structure;
use log::{debug, warn};
use vellum_style::{TextSegment, TextStyle};

#[derive(Debug)]
pub struct ParseOutput {
    pub segments: Vec<TextSegment>,
    pub errors: Vec<ParseIssue>,
}

pub struct HtmlParser {
    registry: StrategyRegistry,
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlParser {
    pub fn new() -> Self {
        Self {
            registry: StrategyRegistry::with_defaults(),
        }
    }

    pub fn with_registry(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    pub fn parse(&self, html: &str) -> ParseOutput {
        let mut families = FamilyState::new();
        self.parse_with_state(html, &mut families)
    }

    /// Parse with a caller-owned family state. The state is reset first, so
    /// no nesting context leaks between unrelated inputs.
    pub fn parse_with_state(&self, html: &str, families: &mut FamilyState) -> ParseOutput {
        families.reset();
        let mut errors = validate_structure(html, &self.registry);

        let segments = match self.scan(html, families, &mut errors) {
            Ok(segments) => segments,
            Err(issue) => {
                // Sole recovery path: hand back the whole input under the
                // default style rather than losing it.
                warn!("scan failed, degrading to pass-through output: {issue}");
                errors.push(issue);
                vec![TextSegment::new(html, TextStyle::default())]
            }
        };

        let segments = analyze_spacing(segments, html);
        ParseOutput { segments, errors }
    }

    fn scan(
        &self,
        html: &str,
        families: &mut FamilyState,
        errors: &mut Vec<ParseIssue>,
    ) -> Result<Vec<TextSegment>, ParseIssue> {
        let tokens = tokenize(html);
        let mut stack = vec![TextStyle::default()];
        let mut segments: Vec<TextSegment> = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            match *token {
                Token::Text(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    let style = current_style(&stack)?.clone();
                    segments.push(TextSegment::new(text, style));
                }
                Token::Open { name, attrs } => {
                    self.handle_tag(
                        name,
                        attrs,
                        false,
                        &tokens[index + 1..],
                        &mut stack,
                        &mut segments,
                        families,
                        errors,
                    )?;
                }
                Token::Close { name } => {
                    self.handle_tag(
                        name,
                        "",
                        true,
                        &tokens[index + 1..],
                        &mut stack,
                        &mut segments,
                        families,
                        errors,
                    )?;
                }
            }
        }
        Ok(segments)
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_tag(
        &self,
        name: &str,
        attrs: &str,
        is_closing: bool,
        rest: &[Token<'_>],
        stack: &mut Vec<TextStyle>,
        segments: &mut Vec<TextSegment>,
        families: &mut FamilyState,
        errors: &mut Vec<ParseIssue>,
    ) -> Result<(), ParseIssue> {
        let tag = name.to_ascii_lowercase();
        let Some(strategy) = self.registry.resolve(&tag) else {
            debug!("no strategy for <{}{tag}>", if is_closing { "/" } else { "" });
            if is_closing {
                // Unknown opening tags were already reported by the
                // structural validation pass.
                errors.push(ParseIssue::UnsupportedTag(tag));
            }
            return Ok(());
        };

        let current = current_style(stack)?.clone();
        let outcome = {
            let mut ctx = TagContext {
                tag: &tag,
                attrs,
                is_closing,
                style: &current,
                stack,
                segments,
                more_content: has_more_content(rest),
                families,
            };
            strategy.parse(&mut ctx)
        };

        errors.extend(outcome.errors);
        segments.extend(outcome.segments);
        match outcome.effect {
            StackEffect::Push(style) => stack.push(style),
            StackEffect::Pop => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            StackEffect::None => {}
        }
        Ok(())
    }
}

fn current_style(stack: &[TextStyle]) -> Result<&TextStyle, ParseIssue> {
    stack
        .last()
        .ok_or_else(|| ParseIssue::Recovered("style stack underflow".to_string()))
}

fn has_more_content(rest: &[Token<'_>]) -> bool {
    rest.iter().any(|token| match token {
        Token::Text(text) => !text.trim().is_empty(),
        Token::Open { .. } => true,
        Token::Close { .. } => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_style::{FontStyle, FontWeight, SpacingContext, TextDecoration};
    use vellum_types::Color;

    fn parse(html: &str) -> ParseOutput {
        HtmlParser::new().parse(html)
    }

    #[test]
    fn plain_text_is_one_default_segment() {
        let out = parse("Just some text");
        assert!(out.errors.is_empty());
        assert_eq!(out.segments.len(), 1);
        let segment = &out.segments[0];
        assert_eq!(segment.text, "Just some text");
        assert_eq!(segment.style.font_weight, FontWeight::Normal);
        assert_eq!(segment.style.font_style, FontStyle::Normal);
        assert_eq!(segment.style.color, Color::default());
        assert_eq!(segment.style.text_decoration, TextDecoration::None);
    }

    #[test]
    fn styles_unwind_after_close() {
        let out = parse("<b><i>both</i></b>after");
        let both = &out.segments[0];
        assert_eq!(both.style.font_weight, FontWeight::Bold);
        assert_eq!(both.style.font_style, FontStyle::Italic);
        // The stack is back to the default style once every tag closed.
        let after = &out.segments[1];
        assert!(!after.style.is_styled());
        assert!(out.errors.is_empty());
    }

    #[test]
    fn nested_styles_accumulate() {
        let out = parse("<b>bold <i>bi</i> bold</b>");
        assert_eq!(out.segments[1].style.font_weight, FontWeight::Bold);
        assert_eq!(out.segments[1].style.font_style, FontStyle::Italic);
        assert_eq!(out.segments[2].style.font_style, FontStyle::Normal);
    }

    #[test]
    fn unclosed_tag_still_yields_styled_segment() {
        let out = parse("<b>Unclosed bold");
        assert!(!out.errors.is_empty());
        assert_eq!(out.segments.len(), 1);
        assert_eq!(out.segments[0].text, "Unclosed bold");
        assert_eq!(out.segments[0].style.font_weight, FontWeight::Bold);
    }

    #[test]
    fn unknown_tags_are_skipped_not_fatal() {
        let out = parse("<widget>inside</widget> out");
        assert!(
            out.errors
                .iter()
                .any(|e| matches!(e, ParseIssue::UnsupportedTag(t) if t == "widget"))
        );
        assert_eq!(out.segments[0].text, "inside");
        assert!(!out.segments[0].style.is_styled());
    }

    #[test]
    fn br_emits_sentinel_without_touching_the_stack() {
        let out = parse("<b>a<br>b</b>");
        assert_eq!(out.segments.len(), 3);
        assert!(out.segments[1].is_line_break());
        assert_eq!(out.segments[2].style.font_weight, FontWeight::Bold);
    }

    #[test]
    fn closing_br_is_an_error() {
        let out = parse("a</br>b");
        assert!(
            out.errors
                .iter()
                .any(|e| matches!(e, ParseIssue::UnexpectedClosingTag(t) if t == "br"))
        );
    }

    #[test]
    fn bold_then_italic_with_space() {
        let out = parse("<b>Hello</b> <i>World</i>");
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.segments[0].text, "Hello");
        assert_eq!(out.segments[0].style.font_weight, FontWeight::Bold);
        assert_eq!(out.segments[1].text, "World");
        assert_eq!(out.segments[1].style.font_style, FontStyle::Italic);
        assert!(out.segments[0].has_space_after);
        assert_eq!(out.segments[0].spacing, Some(SpacingContext::TagToTag));
    }

    #[test]
    fn heading_brackets_with_line_breaks() {
        let out = parse("intro<h2>Head</h2>tail");
        let texts: Vec<&str> = out.segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["intro", "\n", "Head", "\n", "tail"]);
        assert_eq!(out.segments[2].style.font_size, Some(24.0));
        assert_eq!(out.segments[2].style.font_weight, FontWeight::Bold);
    }

    #[test]
    fn trailing_heading_has_no_trailing_break() {
        let out = parse("<h1>Title</h1>");
        let texts: Vec<&str> = out.segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Title"]);
    }

    #[test]
    fn list_items_get_prefixes_and_breaks() {
        let out = parse("<ul><li>Item 1</li><li>Item 2</li></ul>");
        let texts: Vec<&str> = out
            .segments
            .iter()
            .filter(|s| !s.is_line_break())
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, vec!["\u{2022}", "Item 1", "\u{2022}", "Item 2"]);
        for prefix in out.segments.iter().filter(|s| s.text == "\u{2022}") {
            assert_eq!(prefix.style.font_weight, FontWeight::Normal);
            assert_eq!(prefix.style.color, Color::default());
            assert_eq!(prefix.spacing, Some(SpacingContext::ListPrefix));
            assert!(prefix.has_space_after);
        }
    }

    #[test]
    fn sibling_ordered_lists_restart_numbering() {
        let out = parse("<ol><li>a</li></ol><ol><li>b</li></ol>");
        let prefixes: Vec<&str> = out
            .segments
            .iter()
            .filter(|s| s.spacing == Some(SpacingContext::ListPrefix))
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(prefixes, vec!["1.", "1."]);
    }

    #[test]
    fn nested_ordered_lists_have_scoped_counters() {
        let out = parse("<ol><li>outer<ol><li>inner</li></ol></li></ol>");
        let prefixes: Vec<&str> = out
            .segments
            .iter()
            .filter(|s| s.spacing == Some(SpacingContext::ListPrefix))
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(prefixes, vec!["1.", "1."]);
    }

    #[test]
    fn parse_passes_are_isolated() {
        let parser = HtmlParser::new();
        let mut families = FamilyState::new();
        parser.parse_with_state("<ol><li>a</li>", &mut families);
        // The unclosed list must not leak numbering into the next parse.
        let out = parser.parse_with_state("<ol><li>b</li></ol>", &mut families);
        let prefixes: Vec<&str> = out
            .segments
            .iter()
            .filter(|s| s.spacing == Some(SpacingContext::ListPrefix))
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(prefixes, vec!["1."]);
    }

    #[test]
    fn span_style_attribute_applies() {
        let out = parse(r#"<span style="color: #FF0000; font-weight: bold">red</span>"#);
        assert_eq!(out.segments[0].style.color, Color::rgb(255, 0, 0));
        assert_eq!(out.segments[0].style.font_weight, FontWeight::Bold);
    }

    #[test]
    fn link_styling_and_href_validation() {
        let out = parse(r#"<a href="https://example.com">ok</a>"#);
        assert!(out.errors.is_empty());
        assert_eq!(out.segments[0].style.color, Color::rgb(0x00, 0x66, 0xCC));
        assert_eq!(
            out.segments[0].style.text_decoration,
            TextDecoration::Underline
        );

        let out = parse(r#"<a href="">bad</a>"#);
        assert!(
            out.errors
                .iter()
                .any(|e| matches!(e, ParseIssue::InvalidHref(_)))
        );
        assert_eq!(out.segments[0].text, "bad");
    }
}
