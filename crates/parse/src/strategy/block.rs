//! Block-level tags: headings and paragraphs.
//!
//! Both bracket their content with line-break sentinels: a leading break when
//! the output already holds content, a trailing break on close only when more
//! content follows.

use super::{TagContext, TagOutcome, TagStrategy};
use vellum_style::{FontWeight, TextSegment, TextStyle, heading_font_size};

pub(super) fn open_block(ctx: &TagContext<'_>, style: TextStyle) -> TagOutcome {
    let mut segments = Vec::new();
    if ctx.needs_leading_break() {
        segments.push(TextSegment::line_break(ctx.style.clone()));
    }
    TagOutcome::push(style).with_segments(segments)
}

pub(super) fn close_block(ctx: &TagContext<'_>) -> TagOutcome {
    let mut segments = Vec::new();
    if ctx.more_content {
        segments.push(TextSegment::line_break(ctx.style.clone()));
    }
    TagOutcome::pop().with_segments(segments)
}

pub struct HeadingStrategy;

fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h').and_then(|digits| digits.parse().ok())
}

impl TagStrategy for HeadingStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["h1", "h2", "h3", "h4", "h5", "h6"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, tag: &str) -> TextStyle {
        let mut next = style.clone();
        next.font_weight = FontWeight::Bold;
        if let Some(size) = heading_level(tag).and_then(heading_font_size) {
            next.font_size = Some(size);
        }
        next
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            close_block(ctx)
        } else {
            open_block(ctx, self.apply_style(ctx.style, ctx.attrs, ctx.tag))
        }
    }
}

pub struct ParagraphStrategy;

impl TagStrategy for ParagraphStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["p"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        style.clone()
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            close_block(ctx)
        } else {
            open_block(ctx, ctx.style.clone())
        }
    }
}
