use vellum::{
    LayoutOptions, LayoutResult, ParseOutput, RenderOptions, RenderedSpec, SpacingContext,
    TextSegment,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse(html: &str) -> ParseOutput {
    vellum::parse(html)
}

pub fn render(html: &str) -> Result<RenderedSpec, vellum::VellumError> {
    vellum::render(html, &RenderOptions::default())
}

pub fn layout_default(html: &str) -> LayoutResult {
    let parsed = vellum::parse(html);
    vellum::layout(&parsed.segments, &LayoutOptions::default())
}

/// Segment texts with the line-break sentinels filtered out.
pub fn visible_texts(segments: &[TextSegment]) -> Vec<String> {
    segments
        .iter()
        .filter(|s| !s.is_line_break())
        .map(|s| s.text.clone())
        .collect()
}

pub fn prefix_texts(segments: &[TextSegment]) -> Vec<String> {
    segments
        .iter()
        .filter(|s| s.spacing == Some(SpacingContext::ListPrefix))
        .map(|s| s.text.clone())
        .collect()
}
