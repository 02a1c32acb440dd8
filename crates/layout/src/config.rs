use serde::{Deserialize, Serialize};
use vellum_style::DEFAULT_FONT_SIZE;

/// Layout configuration, fixed for the duration of one layout call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Base font size in px, applied to segments that do not set their own.
    pub font_size: f32,
    /// Passed through to the emitted output; layout itself never reads it.
    pub font_family: String,
    pub start_x: f32,
    pub start_y: f32,
    /// Line advance in px. `None` derives `font_size * 1.4`.
    pub line_height: Option<f32>,
    /// Maximum line width before wrapping, in px.
    pub wrap_width: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: "sans-serif".to_string(),
            start_x: 10.0,
            start_y: 30.0,
            line_height: None,
            wrap_width: 400.0,
        }
    }
}

impl LayoutOptions {
    pub fn resolved_line_height(&self) -> f32 {
        self.line_height.unwrap_or(self.font_size * 1.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.font_size, 14.0);
        assert_eq!(options.start_x, 10.0);
        assert_eq!(options.start_y, 30.0);
        assert_eq!(options.wrap_width, 400.0);
        assert!((options.resolved_line_height() - 19.6).abs() < 1e-4);
    }

    #[test]
    fn explicit_line_height_wins() {
        let options = LayoutOptions {
            line_height: Some(24.0),
            ..Default::default()
        };
        assert_eq!(options.resolved_line_height(), 24.0);
    }
}
