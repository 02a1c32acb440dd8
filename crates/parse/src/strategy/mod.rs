//! Pluggable per-tag behavior.
//!
//! Each strategy knows which tag names it serves, how a tag transforms the
//! ambient style, and what segments (if any) an occurrence of the tag emits.
//! The default [`TagStrategy::parse`] covers the common inline case: opening
//! tags validate attributes, derive a style and push it; closing tags pop.

use crate::ParseIssue;
use crate::family::FamilyState;
use vellum_style::{TextSegment, TextStyle};

pub mod block;
pub mod composite;
pub mod inline;
pub mod link;
pub mod list;
pub mod misc;
pub mod span;

pub use block::{HeadingStrategy, ParagraphStrategy};
pub use composite::CompositeStrategy;
pub use inline::{BoldStrategy, ItalicStrategy, UnderlineStrategy};
pub use link::LinkStrategy;
pub use list::list_strategy;
pub use misc::{
    CodeStrategy, ColorTagStrategy, LineBreakStrategy, MarkStrategy, SmallTextStrategy,
    StrikethroughStrategy,
};
pub use span::SpanStrategy;

/// What a strategy asks the parser to do with the style stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackEffect {
    None,
    Push(TextStyle),
    Pop,
}

/// A strategy's response to one tag occurrence.
#[derive(Debug)]
pub struct TagOutcome {
    pub segments: Vec<TextSegment>,
    pub effect: StackEffect,
    pub errors: Vec<ParseIssue>,
}

impl TagOutcome {
    pub fn none() -> Self {
        Self {
            segments: Vec::new(),
            effect: StackEffect::None,
            errors: Vec::new(),
        }
    }

    pub fn push(style: TextStyle) -> Self {
        Self {
            effect: StackEffect::Push(style),
            ..Self::none()
        }
    }

    pub fn pop() -> Self {
        Self {
            effect: StackEffect::Pop,
            ..Self::none()
        }
    }

    pub fn error(issue: ParseIssue) -> Self {
        Self {
            errors: vec![issue],
            ..Self::none()
        }
    }

    pub fn with_segments(mut self, segments: Vec<TextSegment>) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_errors(mut self, errors: Vec<ParseIssue>) -> Self {
        self.errors = errors;
        self
    }
}

/// Everything a strategy may inspect for one tag occurrence. Ephemeral;
/// rebuilt for every tag the scanner encounters.
pub struct TagContext<'a> {
    /// Lowercased tag name.
    pub tag: &'a str,
    /// Raw attribute tail as it appeared in the source.
    pub attrs: &'a str,
    pub is_closing: bool,
    /// Style currently in effect (top of the stack).
    pub style: &'a TextStyle,
    /// Snapshot of the style stack, bottom first.
    pub stack: &'a [TextStyle],
    /// Segments accumulated so far, read-only.
    pub segments: &'a [TextSegment],
    /// Whether any renderable content (text or another opening tag) follows
    /// this occurrence in the input.
    pub more_content: bool,
    /// Shared per-parse composite family state.
    pub families: &'a mut FamilyState,
}

impl TagContext<'_> {
    /// Block-level tags emit a leading line break unless the output is empty
    /// or already ends on one.
    pub fn needs_leading_break(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|s| !s.is_line_break() && !s.text.trim().is_empty())
    }
}

pub trait TagStrategy: Send + Sync {
    /// The tag names this strategy serves.
    fn tag_names(&self) -> &'static [&'static str];

    /// Derive the style a tag establishes. Pure; must not mutate the input.
    fn apply_style(&self, style: &TextStyle, attrs: &str, tag: &str) -> TextStyle;

    /// Attribute validation; issues are collected, they never stop a parse.
    fn validate_attributes(&self, _attrs: &str, _tag: &str) -> Vec<ParseIssue> {
        Vec::new()
    }

    /// Whether this tag forces a line of its own (block-level and list tags).
    fn is_line_break(&self) -> bool {
        false
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            return TagOutcome::pop();
        }
        let errors = self.validate_attributes(ctx.attrs, ctx.tag);
        let style = self.apply_style(ctx.style, ctx.attrs, ctx.tag);
        TagOutcome::push(style).with_errors(errors)
    }
}
