//! Smaller fixed-effect strategies: line breaks, code, small text with
//! sub/sup shifts, highlight, strikethrough, and color-shortcut tags.

use super::{TagContext, TagOutcome, TagStrategy};
use crate::ParseIssue;
use vellum_style::{
    CODE_COLOR, DEFAULT_FONT_SIZE, MARK_COLOR, MUTED_COLOR, TextDecoration, TextSegment, TextStyle,
};
use vellum_types::Color;

/// `<br>` is self-closing: it emits exactly one line-break sentinel and
/// leaves the style stack alone. A closing `</br>` is itself an error.
pub struct LineBreakStrategy;

impl TagStrategy for LineBreakStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["br"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        style.clone()
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            return TagOutcome::error(ParseIssue::UnexpectedClosingTag(ctx.tag.to_string()));
        }
        TagOutcome::none().with_segments(vec![TextSegment::line_break(ctx.style.clone())])
    }
}

pub struct CodeStrategy;

impl TagStrategy for CodeStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["code", "pre", "kbd", "samp"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            color: CODE_COLOR,
            ..style.clone()
        }
    }
}

/// `small`, `sub` and `sup` scale the font to 75% of the ambient size.
/// Subscript shifts down by 0.15x the ambient size, superscript up by 0.35x;
/// `small` keeps the baseline but mutes the color.
pub struct SmallTextStrategy;

impl TagStrategy for SmallTextStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["small", "sub", "sup"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, tag: &str) -> TextStyle {
        let base = style.effective_font_size(DEFAULT_FONT_SIZE);
        let mut next = style.clone();
        next.font_size = Some(base * 0.75);
        match tag {
            "sub" => next.baseline_shift = Some(0.15 * base),
            "sup" => next.baseline_shift = Some(-0.35 * base),
            _ => next.color = MUTED_COLOR,
        }
        next
    }
}

pub struct MarkStrategy;

impl TagStrategy for MarkStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["mark"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            color: MARK_COLOR,
            ..style.clone()
        }
    }
}

pub struct StrikethroughStrategy;

impl TagStrategy for StrikethroughStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["s", "strike", "del"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            color: MUTED_COLOR,
            text_decoration: TextDecoration::LineThrough,
            ..style.clone()
        }
    }
}

/// Shortcut tags whose name is itself a color key (`<red>`, `<teal>`, ...).
/// Not part of the default registry; intended for dynamic registration.
pub struct ColorTagStrategy;

impl TagStrategy for ColorTagStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &[
            "red", "green", "blue", "yellow", "orange", "purple", "pink", "brown", "gray", "teal",
            "navy",
        ]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, tag: &str) -> TextStyle {
        let mut next = style.clone();
        if let Ok(color) = Color::from_css(tag) {
            next.color = color;
        }
        next
    }
}
