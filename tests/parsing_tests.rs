mod common;

use common::{TestResult, init_logger, parse, visible_texts};
use vellum::{Color, FontStyle, FontWeight, ParseIssue, SpacingContext, TextDecoration};

#[test]
fn plain_text_yields_one_default_segment() -> TestResult {
    init_logger();

    let out = parse("No markup at all");
    assert!(out.errors.is_empty());
    assert_eq!(out.segments.len(), 1);
    let style = &out.segments[0].style;
    assert_eq!(style.font_weight, FontWeight::Normal);
    assert_eq!(style.font_style, FontStyle::Normal);
    assert_eq!(style.color, Color::default());
    assert_eq!(style.text_decoration, TextDecoration::None);
    assert_eq!(style.font_size, None);
    Ok(())
}

#[test]
fn well_formed_input_returns_to_default_style() -> TestResult {
    init_logger();

    let out = parse("<b><i><u>deep</u></i></b> tail");
    assert!(out.errors.is_empty());
    let tail = out.segments.last().unwrap();
    assert_eq!(tail.text, "tail");
    assert!(!tail.style.is_styled());
    Ok(())
}

#[test]
fn unclosed_tag_collects_error_but_keeps_content() -> TestResult {
    init_logger();

    let out = parse("<b>Unclosed bold");
    assert!(!out.errors.is_empty());
    assert!(
        out.errors
            .iter()
            .any(|e| matches!(e, ParseIssue::UnclosedTag(t) if t == "b"))
    );
    assert_eq!(out.segments.len(), 1);
    assert_eq!(out.segments[0].text, "Unclosed bold");
    assert_eq!(out.segments[0].style.font_weight, FontWeight::Bold);
    Ok(())
}

#[test]
fn scenario_bold_hello_italic_world() -> TestResult {
    init_logger();

    let out = parse("<b>Hello</b> <i>World</i>");
    assert_eq!(visible_texts(&out.segments), vec!["Hello", "World"]);
    let hello = &out.segments[0];
    let world = &out.segments[1];
    assert_eq!(hello.style.font_weight, FontWeight::Bold);
    assert_eq!(world.style.font_style, FontStyle::Italic);
    assert!(hello.has_space_after);
    assert_eq!(hello.spacing, Some(SpacingContext::TagToTag));
    Ok(())
}

#[test]
fn headings_set_exact_sizes_and_bold() -> TestResult {
    init_logger();

    let expected = [32.0, 24.0, 18.72, 16.0, 13.28, 10.72];
    for (level, size) in expected.iter().enumerate() {
        let html = format!("<h{0}>Head</h{0}>", level + 1);
        let out = parse(&html);
        let head = out.segments.iter().find(|s| s.text == "Head").unwrap();
        assert_eq!(head.style.font_size, Some(*size), "h{}", level + 1);
        assert_eq!(head.style.font_weight, FontWeight::Bold);
    }
    Ok(())
}

#[test]
fn span_style_attribute_drives_the_style() -> TestResult {
    init_logger();

    let out = parse(
        r#"<span style="color: #FF0000; font-weight: 700; font-style: oblique">hot</span>"#,
    );
    assert!(out.errors.is_empty());
    let style = &out.segments[0].style;
    assert_eq!(style.color, Color::rgb(255, 0, 0));
    assert_eq!(style.font_weight, FontWeight::Bold);
    assert_eq!(style.font_style, FontStyle::Italic);
    Ok(())
}

#[test]
fn link_gets_color_and_underline() -> TestResult {
    init_logger();

    let out = parse(r#"<a href="/docs/guide">guide</a>"#);
    assert!(out.errors.is_empty());
    let link = &out.segments[0];
    assert_eq!(link.style.color, Color::rgb(0x00, 0x66, 0xCC));
    assert_eq!(link.style.text_decoration, TextDecoration::Underline);
    Ok(())
}

#[test]
fn empty_href_is_an_error_missing_href_is_not() -> TestResult {
    init_logger();

    let out = parse(r#"<a href="">x</a>"#);
    assert!(
        out.errors
            .iter()
            .any(|e| matches!(e, ParseIssue::InvalidHref(_)))
    );

    let out = parse("<a>x</a>");
    assert!(out.errors.is_empty());
    Ok(())
}

#[test]
fn sub_and_sup_shift_the_baseline() -> TestResult {
    init_logger();

    let out = parse("H<sub>2</sub>O and x<sup>2</sup>");
    let two = out.segments.iter().find(|s| s.text == "2").unwrap();
    assert_eq!(two.style.font_size, Some(10.5));
    assert_eq!(two.style.baseline_shift, Some(2.1));

    let squared = out.segments.iter().rfind(|s| s.text == "2").unwrap();
    assert_eq!(squared.style.baseline_shift, Some(-4.9));
    Ok(())
}

#[test]
fn mismatched_tags_are_reported_but_parsed() -> TestResult {
    init_logger();

    let out = parse("<b><i>x</b></i>");
    assert!(
        out.errors
            .iter()
            .any(|e| matches!(e, ParseIssue::MismatchedClosingTag { .. }))
    );
    assert_eq!(out.segments[0].text, "x");
    assert_eq!(out.segments[0].style.font_weight, FontWeight::Bold);
    assert_eq!(out.segments[0].style.font_style, FontStyle::Italic);
    Ok(())
}
