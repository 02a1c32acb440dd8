use crate::text::TextStyle;
use serde::{Deserialize, Serialize};

/// Classification of the boundary between a segment and its successor, based
/// on which of the two sides carries non-default styling. Drives the spacing
/// width policy in the layout engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingContext {
    TextToText,
    TextToTag,
    TagToText,
    TagToTag,
    ListPrefix,
}

/// One contiguous run of identically styled text, or a single-character
/// `"\n"` sentinel forcing a line break.
///
/// Segments are created during parsing, rewritten once by the spacing
/// analyzer (trimmed text, `has_space_after`, `spacing`), and read-only from
/// then on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub text: String,
    #[serde(flatten)]
    pub style: TextStyle,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub has_space_after: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing: Option<SpacingContext>,
}

impl TextSegment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            has_space_after: false,
            spacing: None,
        }
    }

    /// The line-break sentinel. Carries the ambient style but is never
    /// rendered as a glyph run.
    pub fn line_break(style: TextStyle) -> Self {
        Self::new("\n", style)
    }

    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}
