use crate::error::VellumError;
use serde::{Deserialize, Serialize};
use vellum_layout::LayoutOptions;

/// User-facing knobs; anything left `None` takes the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub start_x: Option<f32>,
    pub start_y: Option<f32>,
    pub line_height: Option<f32>,
    pub wrap_width: Option<f32>,
}

impl RenderOptions {
    /// Merge over the defaults into concrete layout options.
    pub fn resolve(&self) -> Result<LayoutOptions, VellumError> {
        let defaults = LayoutOptions::default();
        let options = LayoutOptions {
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_family: self
                .font_family
                .clone()
                .unwrap_or(defaults.font_family),
            start_x: self.start_x.unwrap_or(defaults.start_x),
            start_y: self.start_y.unwrap_or(defaults.start_y),
            line_height: self.line_height.or(defaults.line_height),
            wrap_width: self.wrap_width.unwrap_or(defaults.wrap_width),
        };
        if !(options.font_size > 0.0) {
            return Err(VellumError::InvalidOptions(format!(
                "fontSize must be positive, got {}",
                options.font_size
            )));
        }
        if !(options.wrap_width > 0.0) {
            return Err(VellumError::InvalidOptions(format!(
                "wrapWidth must be positive, got {}",
                options.wrap_width
            )));
        }
        if let Some(line_height) = options.line_height
            && !(line_height > 0.0)
        {
            return Err(VellumError::InvalidOptions(format!(
                "lineHeight must be positive, got {line_height}"
            )));
        }
        Ok(options)
    }
}
