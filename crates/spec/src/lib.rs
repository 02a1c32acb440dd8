//! Visualization-spec emitter: turns positioned segments into a declarative
//! chart-grammar value with one text layer per distinct style, plus rule
//! layers for underline and strike-through decorations.

use itertools::Itertools;
use log::debug;
use serde_json::{Value, json};
use thiserror::Error;
use vellum_layout::{LayoutOptions, LayoutResult, PositionedSegment};
use vellum_style::{FontStyle, FontWeight, TextDecoration, TextStyle};

const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to serialize spec: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Build the full spec value. Pure function of its input; layer order follows
/// first appearance of each style in reading order.
pub fn emit(result: &LayoutResult, options: &LayoutOptions) -> Value {
    let groups = style_groups(&result.segments);
    let mut layers = Vec::with_capacity(groups.len());
    for (style, boxes) in &groups {
        layers.push(text_layer(style, boxes, options));
        if style.text_decoration != TextDecoration::None {
            layers.push(rule_layer(style, boxes));
        }
    }
    debug!(
        "emitted {} layers from {} boxes",
        layers.len(),
        result.segments.len()
    );
    json!({
        "$schema": SCHEMA_URL,
        "width": result.bounds.width,
        "height": result.bounds.height,
        "background": "transparent",
        "layer": layers,
    })
}

/// Pretty-printed spec document.
pub fn emit_string(result: &LayoutResult, options: &LayoutOptions) -> Result<String, SpecError> {
    Ok(serde_json::to_string_pretty(&emit(result, options))?)
}

/// Adjacent same-style runs collapse first, then runs with an already-seen
/// style merge into its group so each style yields exactly one text layer.
fn style_groups(segments: &[PositionedSegment]) -> Vec<(TextStyle, Vec<&PositionedSegment>)> {
    let mut groups: Vec<(TextStyle, Vec<&PositionedSegment>)> = Vec::new();
    let runs = segments.iter().chunk_by(|boxed| boxed.segment.style.clone());
    for (style, run) in &runs {
        if let Some((_, boxes)) = groups.iter_mut().find(|(seen, _)| *seen == style) {
            boxes.extend(run);
        } else {
            groups.push((style, run.collect()));
        }
    }
    groups
}

fn text_layer(style: &TextStyle, boxes: &[&PositionedSegment], options: &LayoutOptions) -> Value {
    let values: Vec<Value> = boxes
        .iter()
        .map(|boxed| json!({ "x": boxed.x, "y": boxed.y, "text": boxed.segment.text }))
        .collect();
    json!({
        "data": { "values": values },
        "mark": {
            "type": "text",
            "align": "left",
            "baseline": "top",
            "font": options.font_family,
            "fontSize": style.effective_font_size(options.font_size),
            "fontWeight": font_weight(style),
            "fontStyle": font_style(style),
            "color": style.color.to_css(),
        },
        "encoding": {
            "x": { "field": "x", "type": "quantitative", "axis": null, "scale": null },
            "y": { "field": "y", "type": "quantitative", "axis": null, "scale": null },
            "text": { "field": "text", "type": "nominal" },
        },
    })
}

/// One horizontal rule per decorated box: under the box for underline, across
/// its middle for strike-through.
fn rule_layer(style: &TextStyle, boxes: &[&PositionedSegment]) -> Value {
    let values: Vec<Value> = boxes
        .iter()
        .map(|boxed| {
            let y = match style.text_decoration {
                TextDecoration::LineThrough => boxed.y + boxed.height * 0.5,
                _ => boxed.bottom() + 1.0,
            };
            json!({ "x": boxed.x, "x2": boxed.right(), "y": y })
        })
        .collect();
    json!({
        "data": { "values": values },
        "mark": { "type": "rule", "color": style.color.to_css(), "strokeWidth": 1 },
        "encoding": {
            "x": { "field": "x", "type": "quantitative", "axis": null, "scale": null },
            "x2": { "field": "x2" },
            "y": { "field": "y", "type": "quantitative", "axis": null, "scale": null },
        },
    })
}

fn font_weight(style: &TextStyle) -> &'static str {
    match style.font_weight {
        FontWeight::Bold => "bold",
        FontWeight::Normal => "normal",
    }
}

fn font_style(style: &TextStyle) -> &'static str {
    match style.font_style {
        FontStyle::Italic => "italic",
        FontStyle::Normal => "normal",
    }
}
