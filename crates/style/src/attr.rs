//! Low-level nom parsers for tag attribute strings and the CSS-like
//! declarations inside a `style="..."` attribute.
//!
//! The attribute grammar is deliberately forgiving: quoted or bare values,
//! boolean attributes, arbitrary whitespace. Anything the parsers cannot make
//! sense of simply terminates the scan rather than erroring.

use crate::font::{FontStyle, FontWeight, TextDecoration};
use crate::text::TextStyle;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::{delimited, preceded, separated_pair};
use thiserror::Error;
use vellum_types::Color;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Unsupported style property: '{0}'")]
    UnsupportedProperty(String),

    #[error("Invalid value for '{property}': '{value}'")]
    InvalidValue { property: String, value: String },
}

fn invalid(property: &str, value: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}

fn attribute(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) = preceded(multispace0, identifier).parse(input)?;
    let (input, value) = opt(preceded(
        (multispace0, char('='), multispace0),
        alt((
            delimited(char('"'), take_while(|c| c != '"'), char('"')),
            delimited(char('\''), take_while(|c| c != '\''), char('\'')),
            take_while1(|c: char| !c.is_whitespace() && c != '>' && c != '/'),
        )),
    ))
    .parse(input)?;
    Ok((input, (name, value.unwrap_or(""))))
}

/// Parse a raw attribute tail (everything between the tag name and `>`) into
/// name/value pairs. Boolean attributes yield an empty value.
pub fn parse_attributes(input: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut rest = input.trim().trim_end_matches('/');
    while !rest.trim_start().is_empty() {
        match attribute(rest) {
            Ok((remaining, pair)) => {
                pairs.push(pair);
                rest = remaining;
            }
            Err(_) => break,
        }
    }
    pairs
}

/// The value of a named attribute, if present (name match is ASCII
/// case-insensitive).
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    parse_attributes(attrs)
        .into_iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        preceded(multispace0, identifier),
        (multispace0, char(':')),
        take_while1(|c| c != ';'),
    )
    .parse(input)
}

/// Split a CSS declaration block into `(property, value)` pairs, dropping
/// anything that is not a well-formed declaration.
pub fn parse_declarations(css: &str) -> Vec<(&str, &str)> {
    css.split(';')
        .filter_map(|piece| declaration(piece).ok())
        .map(|(_, (property, value))| (property, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            take_while1(|c: char| c.is_ascii_digit()),
            opt((char('.'), take_while1(|c: char| c.is_ascii_digit()))),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Parse a font-size value such as `16`, `16px` or `18.72px`.
pub fn parse_font_size(value: &str) -> Result<f32, StyleParseError> {
    let trimmed = value.trim();
    let (rest, (size, _unit)) = (parse_f32, opt(alt((tag_no_case("px"), tag_no_case("pt")))))
        .parse(trimmed)
        .map_err(|_| invalid("font-size", value))?;
    if !rest.trim().is_empty() || size <= 0.0 {
        return Err(invalid("font-size", value));
    }
    Ok(size)
}

/// Apply one recognized CSS declaration to a style. Returns an error for
/// unsupported properties or malformed values; the caller decides whether
/// that error is reported or silently ignored.
pub fn apply_declaration(
    style: &mut TextStyle,
    property: &str,
    value: &str,
) -> Result<(), StyleParseError> {
    match property.to_ascii_lowercase().as_str() {
        "color" => {
            style.color = Color::from_css(value).map_err(|_| invalid(property, value))?;
        }
        "font-weight" => {
            style.font_weight =
                FontWeight::from_css(value).ok_or_else(|| invalid(property, value))?;
        }
        "font-style" => {
            style.font_style =
                FontStyle::from_css(value).ok_or_else(|| invalid(property, value))?;
        }
        "text-decoration" => {
            style.text_decoration = TextDecoration::from_css(value);
        }
        "font-size" => {
            style.font_size = Some(parse_font_size(value)?);
        }
        other => return Err(StyleParseError::UnsupportedProperty(other.to_string())),
    }
    Ok(())
}
