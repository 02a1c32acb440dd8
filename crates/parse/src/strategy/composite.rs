//! A generic dispatcher over a family of related tags sharing one
//! [`FamilyState`](crate::family::FamilyState) scope. The composite itself
//! owns no state; children reach the family state through the tag context.

use super::{TagContext, TagOutcome, TagStrategy};
use crate::ParseIssue;
use std::collections::HashMap;
use vellum_style::TextStyle;

pub struct CompositeStrategy {
    family: &'static str,
    tags: &'static [&'static str],
    children: HashMap<&'static str, Box<dyn TagStrategy>>,
}

impl CompositeStrategy {
    pub fn new(
        family: &'static str,
        tags: &'static [&'static str],
        children: Vec<(&'static str, Box<dyn TagStrategy>)>,
    ) -> Self {
        Self {
            family,
            tags,
            children: children.into_iter().collect(),
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    fn child(&self, tag: &str) -> Option<&dyn TagStrategy> {
        self.children.get(tag).map(Box::as_ref)
    }
}

impl TagStrategy for CompositeStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        self.tags
    }

    fn apply_style(&self, style: &TextStyle, attrs: &str, tag: &str) -> TextStyle {
        match self.child(tag) {
            Some(child) => child.apply_style(style, attrs, tag),
            None => style.clone(),
        }
    }

    fn validate_attributes(&self, attrs: &str, tag: &str) -> Vec<ParseIssue> {
        self.child(tag)
            .map(|child| child.validate_attributes(attrs, tag))
            .unwrap_or_default()
    }

    fn is_line_break(&self) -> bool {
        true
    }

    fn parse(&self, ctx: &mut TagContext<'_>) -> TagOutcome {
        match self.child(ctx.tag) {
            Some(child) => child.parse(ctx),
            None => TagOutcome::error(ParseIssue::UnknownFamilyTag {
                family: self.family.to_string(),
                tag: ctx.tag.to_string(),
            }),
        }
    }
}
