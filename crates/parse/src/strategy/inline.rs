//! Single-axis inline emphasis: bold, italic, underline.

use super::TagStrategy;
use vellum_style::{FontStyle, FontWeight, TextDecoration, TextStyle};

pub struct BoldStrategy;

impl TagStrategy for BoldStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["b", "strong"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            font_weight: FontWeight::Bold,
            ..style.clone()
        }
    }
}

pub struct ItalicStrategy;

impl TagStrategy for ItalicStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["i", "em"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            font_style: FontStyle::Italic,
            ..style.clone()
        }
    }
}

pub struct UnderlineStrategy;

impl TagStrategy for UnderlineStrategy {
    fn tag_names(&self) -> &'static [&'static str] {
        &["u"]
    }

    fn apply_style(&self, style: &TextStyle, _attrs: &str, _tag: &str) -> TextStyle {
        TextStyle {
            text_decoration: TextDecoration::Underline,
            ..style.clone()
        }
    }
}
