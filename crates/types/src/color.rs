use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}': expected #RGB or #RRGGBB")]
    InvalidHex(String),

    #[error("Invalid color component in '{color}': {source_msg}")]
    InvalidComponent { color: String, source_msg: String },

    #[error("Unknown color name: '{0}'")]
    UnknownName(String),
}

/// An opaque RGB color.
///
/// Parses from `#RGB`/`#RRGGBB` hex notation or a small table of CSS color
/// names, and renders back as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS color names accepted by [`Color::from_css`].
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("pink", Color::rgb(0xFF, 0xC0, 0xCB)),
    ("brown", Color::rgb(0xA5, 0x2A, 0x2A)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-like color value: `#RGB`, `#RRGGBB`, or a known name.
    pub fn from_css(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(s, hex);
        }
        let lower = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }

    fn parse_hex(original: &str, hex: &str) -> Result<Self, ColorParseError> {
        let component = |part: &str| {
            u8::from_str_radix(part, 16).map_err(|e| ColorParseError::InvalidComponent {
                color: original.to_string(),
                source_msg: e.to_string(),
            })
        };
        match hex.len() {
            3 => {
                // #RGB - expand each digit
                let r = component(&hex[0..1].repeat(2))?;
                let g = component(&hex[1..2].repeat(2))?;
                let b = component(&hex[2..3].repeat(2))?;
                Ok(Self { r, g, b })
            }
            6 => {
                let r = component(&hex[0..2])?;
                let g = component(&hex[2..4])?;
                let b = component(&hex[4..6])?;
                Ok(Self { r, g, b })
            }
            _ => Err(ColorParseError::InvalidHex(original.to_string())),
        }
    }

    /// Render as uppercase `#RRGGBB`.
    pub fn to_css(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_css(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_css("#0066CC").unwrap(), Color::rgb(0, 102, 204));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Color::from_css("#f00").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Color::from_css("Red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_css("TEAL").unwrap(), Color::rgb(0, 128, 128));
    }

    #[test]
    fn rejects_unknown_names_and_bad_hex() {
        assert!(matches!(
            Color::from_css("notacolor"),
            Err(ColorParseError::UnknownName(_))
        ));
        assert!(Color::from_css("#12345").is_err());
        assert!(Color::from_css("#gghhii").is_err());
    }

    #[test]
    fn css_round_trip_is_uppercase() {
        assert_eq!(Color::from_css("#0066cc").unwrap().to_css(), "#0066CC");
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::rgb(0, 0, 0));
    }
}
