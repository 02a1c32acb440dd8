//! Text measurement seam. The engine only ever asks "how big is this run";
//! callers can inject a backend with real font metrics, and the arithmetic
//! fallback keeps layout usable without one.

use vellum_style::{FontWeight, TextStyle};
use vellum_types::Size;

pub trait TextMeasurer {
    /// Measured extent of `text` rendered with `style` at its effective font
    /// size (falling back to `base_font_size`).
    fn measure(&self, text: &str, style: &TextStyle, base_font_size: f32) -> Size;

    /// Width of a single space in the given style.
    fn measure_space(&self, style: &TextStyle, base_font_size: f32) -> f32 {
        self.measure(" ", style, base_font_size).width
    }
}

/// Pure-arithmetic fallback: average glyph width as a fraction of the font
/// size, slightly wider for bold runs, height equal to the font size.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, base_font_size: f32) -> Size {
        let size = style.effective_font_size(base_font_size);
        let mut width = text.chars().count() as f32 * size * 0.6;
        if style.font_weight == FontWeight::Bold {
            width *= 1.05;
        }
        Size::new(width, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_length_and_size() {
        let m = HeuristicMeasurer;
        let plain = TextStyle::default();
        let a = m.measure("ab", &plain, 14.0);
        let b = m.measure("abcd", &plain, 14.0);
        assert!(b.width > a.width);
        assert_eq!(a.height, 14.0);

        let sized = TextStyle {
            font_size: Some(28.0),
            ..Default::default()
        };
        let big = m.measure("ab", &sized, 14.0);
        assert_eq!(big.width, a.width * 2.0);
        assert_eq!(big.height, 28.0);
    }

    #[test]
    fn bold_is_wider() {
        let m = HeuristicMeasurer;
        let bold = TextStyle {
            font_weight: FontWeight::Bold,
            ..Default::default()
        };
        assert!(m.measure("x", &bold, 14.0).width > m.measure("x", &TextStyle::default(), 14.0).width);
    }

    #[test]
    fn space_width_is_nonzero() {
        let m = HeuristicMeasurer;
        assert!(m.measure_space(&TextStyle::default(), 14.0) > 0.0);
    }
}
