//! `<span style="...">` — the only strategy driven by CSS declarations.

use super::TagStrategy;
use crate::ParseIssue;
use vellum_style::{TextStyle, apply_declaration, attr_value, parse_declarations};

pub struct SpanStrategy;

impl TagStrategy for SpanStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["span"]
    }

    fn apply_style(&self, style: &TextStyle, attrs: &str, _tag: &str) -> TextStyle {
        let mut next = style.clone();
        if let Some(css) = attr_value(attrs, "style") {
            for (property, value) in parse_declarations(css) {
                // Declarations apply independently; a bad one does not block
                // its neighbors, and unknown properties are simply skipped.
                let _ = apply_declaration(&mut next, property, value);
            }
        }
        next
    }

    fn validate_attributes(&self, attrs: &str, tag: &str) -> Vec<ParseIssue> {
        let Some(css) = attr_value(attrs, "style") else {
            return Vec::new();
        };
        let mut scratch = TextStyle::default();
        parse_declarations(css)
            .into_iter()
            .filter_map(|(property, value)| {
                apply_declaration(&mut scratch, property, value)
                    .err()
                    .map(|e| ParseIssue::InvalidAttribute {
                        tag: tag.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}
