//! The resolved text style attached to every segment, plus the fixed metric
//! and palette tables shared between the tag strategies and the layout engine.

use crate::font::{FontStyle, FontWeight, TextDecoration};
use serde::{Deserialize, Serialize};
use vellum_types::Color;

/// Font size applied when no tag or style attribute sets one, in px.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Hyperlink text color.
pub const LINK_COLOR: Color = Color::rgb(0x00, 0x66, 0xCC);
/// Color for `code`, `pre`, `kbd` and `samp` runs.
pub const CODE_COLOR: Color = Color::rgb(0xC7, 0x25, 0x4E);
/// Color for `mark` (highlighted) runs.
pub const MARK_COLOR: Color = Color::rgb(0x85, 0x64, 0x04);
/// Muted color for `small` and struck-through runs.
pub const MUTED_COLOR: Color = Color::rgb(0x6C, 0x75, 0x7D);

/// Browser-default heading font sizes, h1 through h6, in px.
const HEADING_FONT_SIZES: [f32; 6] = [32.0, 24.0, 18.72, 16.0, 13.28, 10.72];

/// Font size for a heading level (1-6).
pub fn heading_font_size(level: u8) -> Option<f32> {
    match level {
        1..=6 => Some(HEADING_FONT_SIZES[(level - 1) as usize]),
        _ => None,
    }
}

/// Whether a font size comes from the heading table. The layout engine uses
/// this (together with bold weight) to recognize heading runs.
pub fn is_heading_font_size(size: f32) -> bool {
    HEADING_FONT_SIZES.contains(&size)
}

/// Left indentation for a list nesting level (level 1 = outermost), in px.
/// Must stay in sync with the list strategy's notion of nesting depth.
pub fn list_indent(level: u32) -> f32 {
    20.0 + (level.saturating_sub(1)) as f32 * 20.0
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    #[serde(rename = "ul")]
    Unordered,
    #[serde(rename = "ol")]
    Ordered,
}

/// List membership carried by list-item prefix and content segments so the
/// layout engine can indent them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListContext {
    /// Nesting level, 1 for the outermost list.
    pub level: u32,
    pub kind: ListKind,
}

/// The fully resolved style for one run of text.
///
/// The first four axes are always populated (defaults: normal weight, normal
/// style, black, no decoration); the remaining fields are only set by the
/// tags that need them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: Color,
    pub text_decoration: TextDecoration,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font_size: Option<f32>,
    /// Vertical glyph offset in px; negative raises (superscript), positive
    /// lowers (subscript).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub baseline_shift: Option<f32>,
    #[serde(flatten, skip_serializing_if = "Option::is_none", default)]
    pub list: Option<ListContext>,
}

impl TextStyle {
    /// True when any style axis differs from the default. Drives the
    /// "styled vs plain" side classification used for inter-segment spacing.
    pub fn is_styled(&self) -> bool {
        self.font_weight != FontWeight::default()
            || self.font_style != FontStyle::default()
            || self.color != Color::default()
            || self.text_decoration != TextDecoration::default()
            || self.font_size.is_some()
    }

    /// The effective font size given the layout-wide base size.
    pub fn effective_font_size(&self, base: f32) -> f32 {
        self.font_size.unwrap_or(base)
    }
}
