//! Vellum converts a restricted subset of HTML (inline formatting, headings,
//! paragraphs, lists, links) into a declarative visualization spec of
//! positioned text and decoration layers.
//!
//! ```
//! use vellum::{RenderOptions, render};
//!
//! let rendered = render("<b>Hello</b> <i>World</i>", &RenderOptions::default()).unwrap();
//! assert!(rendered.bounds.width > 0.0);
//! ```

pub mod error;
pub mod options;

pub use error::VellumError;
pub use options::RenderOptions;

pub use vellum_layout::{
    HeuristicMeasurer, LayoutOptions, LayoutResult, PositionedSegment, TextLayout, TextMeasurer,
};
pub use vellum_parse::{FamilyState, HtmlParser, ParseIssue, ParseOutput, StrategyRegistry};
pub use vellum_spec::{emit, emit_string};
pub use vellum_style::{
    FontStyle, FontWeight, ListContext, ListKind, SpacingContext, TextDecoration, TextSegment,
    TextStyle,
};
pub use vellum_types::{Color, Rect, Size};

use log::debug;
use serde_json::Value;

/// The fully rendered output: the spec document plus everything a caller may
/// want to inspect alongside it.
#[derive(Debug, Clone)]
pub struct RenderedSpec {
    pub spec: Value,
    /// Parse problems, surfaced as data; a non-empty list does not mean the
    /// spec is unusable.
    pub errors: Vec<String>,
    pub bounds: Size,
}

/// Run the whole pipeline: parse, layout, emit.
///
/// The only rejected inputs are empty or whitespace-only strings; everything
/// else renders on a best-effort basis with problems collected in
/// [`RenderedSpec::errors`].
pub fn render(html: &str, options: &RenderOptions) -> Result<RenderedSpec, VellumError> {
    if html.trim().is_empty() {
        return Err(VellumError::EmptyInput);
    }
    let layout_options = options.resolve()?;

    let parsed = HtmlParser::new().parse(html);
    let errors: Vec<String> = parsed.errors.iter().map(ToString::to_string).collect();
    debug!(
        "parsed {} segments, {} issues",
        parsed.segments.len(),
        errors.len()
    );

    let laid_out = TextLayout::new(layout_options.clone()).layout(&parsed.segments);
    let spec = vellum_spec::emit(&laid_out, &layout_options);
    Ok(RenderedSpec {
        spec,
        errors,
        bounds: laid_out.bounds,
    })
}

/// Parse only, with the default tag vocabulary.
pub fn parse(html: &str) -> ParseOutput {
    HtmlParser::new().parse(html)
}

/// Layout only, with the arithmetic measurement fallback.
pub fn layout(segments: &[TextSegment], options: &LayoutOptions) -> LayoutResult {
    TextLayout::new(options.clone()).layout(segments)
}
