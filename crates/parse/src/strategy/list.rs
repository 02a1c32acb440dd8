//! The list family: `ul`/`ol` maintain the family nesting stack, `li` reads
//! it to emit its prefix segment.

use super::block::{close_block, open_block};
use super::{CompositeStrategy, TagContext, TagOutcome, TagStrategy};
use crate::ParseIssue;
use vellum_style::{
    ListContext, ListKind, SpacingContext, TextSegment, TextStyle, parse_attributes,
};

const LIST_FAMILY: &str = "list";
const LIST_TAGS: &[&str] = &["ul", "ol", "li"];

/// Attributes accepted on list tags.
const ALLOWED_ATTRS: &[&str] = &["class", "id", "style", "type", "start"];

/// Bullet glyph for unordered items.
const BULLET: &str = "\u{2022}";

pub fn list_strategy() -> CompositeStrategy {
    CompositeStrategy::new(
        LIST_FAMILY,
        LIST_TAGS,
        vec![
            ("ul", Box::new(ListContainerStrategy { tags: &["ul"] })),
            ("ol", Box::new(ListContainerStrategy { tags: &["ol"] })),
            ("li", Box::new(ListItemStrategy)),
        ],
    )
}

fn check_attrs(attrs: &str, tag: &str) -> Vec<ParseIssue> {
    parse_attributes(attrs)
        .into_iter()
        .filter(|(name, _)| !ALLOWED_ATTRS.contains(&name.to_ascii_lowercase().as_str()))
        .map(|(name, _)| ParseIssue::InvalidAttribute {
            tag: tag.to_string(),
            message: format!("attribute '{name}' is not allowed on list tags"),
        })
        .collect()
}

struct ListContainerStrategy {
    tags: &'static [&'static str],
}

impl TagStrategy for ListContainerStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        self.tags
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        style.clone()
    }

    fn validate_attributes(&self, attrs: &str, tag: &str) -> Vec<ParseIssue> {
        check_attrs(attrs, tag)
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            ctx.families.pop(LIST_FAMILY);
            return close_block(ctx);
        }
        let errors = self.validate_attributes(ctx.attrs, ctx.tag);
        ctx.families.push(LIST_FAMILY, self.tags[0]);
        open_block(ctx, ctx.style.clone()).with_errors(errors)
    }
}

struct ListItemStrategy;

impl TagStrategy for ListItemStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["li"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        style.clone()
    }

    fn validate_attributes(&self, attrs: &str, tag: &str) -> Vec<ParseIssue> {
        check_attrs(attrs, tag)
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        if ctx.is_closing {
            return TagOutcome::pop();
        }
        let errors = self.validate_attributes(ctx.attrs, ctx.tag);

        let mut segments = Vec::new();
        if ctx.needs_leading_break() {
            segments.push(TextSegment::line_break(ctx.style.clone()));
        }

        let level = ctx.families.depth(LIST_FAMILY) as u32;
        let list = match ctx.families.top(LIST_FAMILY) {
            Some("ul") => Some((BULLET.to_string(), ListKind::Unordered)),
            Some("ol") => {
                let n = ctx.families.advance(LIST_FAMILY, "ol");
                Some((format!("{n}."), ListKind::Ordered))
            }
            _ => None,
        };

        let context = list.as_ref().map(|(_, kind)| ListContext {
            level: level.max(1),
            kind: *kind,
        });

        if let (Some((prefix, _)), Some(context)) = (list, context) {
            // The prefix never inherits ancestor emphasis; it only carries
            // the list membership needed for indentation.
            let mut segment = TextSegment::new(
                prefix,
                TextStyle {
                    list: Some(context),
                    ..TextStyle::default()
                },
            );
            segment.has_space_after = true;
            segment.spacing = Some(SpacingContext::ListPrefix);
            segments.push(segment);
        }

        let style = TextStyle {
            list: context,
            ..ctx.style.clone()
        };
        TagOutcome::push(style)
            .with_segments(segments)
            .with_errors(errors)
    }
}
