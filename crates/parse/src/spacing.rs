//! Post-parse spacing analysis.
//!
//! Tag stripping loses the information of whether two adjacent runs were
//! separated by whitespace in the source. This pass recovers it by locating
//! each segment's text inside a whitespace-collapsed copy of the original
//! HTML and checking the slice in between: one or more source whitespace
//! characters become exactly one rendered space, zero stay zero.

use vellum_style::{SpacingContext, TextSegment};

pub fn analyze_spacing(segments: Vec<TextSegment>, html: &str) -> Vec<TextSegment> {
    let mut segments: Vec<TextSegment> = segments.into_iter().filter_map(normalize).collect();
    let haystack = collapse_whitespace(html);
    let mut cursor = 0usize;

    for i in 0..segments.len() {
        let current_styled = segments[i].style.is_styled();
        let next_styled = segments.get(i + 1).map(|next| next.style.is_styled());

        // List prefixes keep their special context and always force a space.
        if segments[i].spacing == Some(SpacingContext::ListPrefix) {
            segments[i].has_space_after = true;
            continue;
        }
        segments[i].spacing = Some(classify(current_styled, next_styled));

        if segments[i].is_line_break() {
            segments[i].has_space_after = false;
            continue;
        }
        let Some(next_text) = segments.get(i + 1).map(|next| next.text.clone()) else {
            segments[i].has_space_after = false;
            continue;
        };

        let current = collapse_whitespace(&segments[i].text);
        let next = collapse_whitespace(&next_text);
        let (has_space, new_cursor) = locate_gap(&haystack, cursor, &current, &next);
        segments[i].has_space_after = has_space;
        cursor = new_cursor;
    }
    segments
}

/// Trim a segment's text; drop it entirely when nothing remains. Line-break
/// sentinels pass through untouched.
fn normalize(mut segment: TextSegment) -> Option<TextSegment> {
    if segment.is_line_break() {
        return Some(segment);
    }
    let trimmed = segment.text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() != segment.text.len() {
        segment.text = trimmed.to_string();
    }
    Some(segment)
}

fn classify(current_styled: bool, next_styled: Option<bool>) -> SpacingContext {
    match (current_styled, next_styled.unwrap_or(false)) {
        (true, true) => SpacingContext::TagToTag,
        (false, true) => SpacingContext::TextToTag,
        (true, false) => SpacingContext::TagToText,
        (false, false) => SpacingContext::TextToText,
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Locate `current` then `next` in the haystack, starting from `cursor`, and
/// report whether whitespace sits between them. A failed lookup reports no
/// space and leaves the cursor where it got to.
fn locate_gap(haystack: &str, cursor: usize, current: &str, next: &str) -> (bool, usize) {
    let Some(rel) = haystack[cursor..].find(current) else {
        return (false, cursor);
    };
    let current_end = cursor + rel + current.len();
    let Some(next_rel) = haystack[current_end..].find(next) else {
        return (false, current_end);
    };
    let between = &haystack[current_end..current_end + next_rel];
    (between.contains(' '), current_end)
}
