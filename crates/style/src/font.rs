use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Interpret a CSS `font-weight` value. Numeric weights of 600 and above
    /// count as bold; everything else is normal.
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "bold" => Some(FontWeight::Bold),
            "normal" => Some(FontWeight::Normal),
            other => other.parse::<u16>().ok().map(|n| {
                if n >= 600 {
                    FontWeight::Bold
                } else {
                    FontWeight::Normal
                }
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// Interpret a CSS `font-style` value. `oblique` is folded into italic.
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "italic" | "oblique" => Some(FontStyle::Italic),
            "normal" => Some(FontStyle::Normal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

impl TextDecoration {
    /// Interpret a CSS `text-decoration` value: underline wins if the value
    /// mentions it anywhere, otherwise none.
    pub fn from_css(value: &str) -> Self {
        if value.contains("underline") {
            TextDecoration::Underline
        } else {
            TextDecoration::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_weights_split_at_600() {
        assert_eq!(FontWeight::from_css("599"), Some(FontWeight::Normal));
        assert_eq!(FontWeight::from_css("600"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::from_css("900"), Some(FontWeight::Bold));
    }

    #[test]
    fn bold_keyword() {
        assert_eq!(FontWeight::from_css("bold"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::from_css("bolder"), None);
    }

    #[test]
    fn oblique_is_italic() {
        assert_eq!(FontStyle::from_css("oblique"), Some(FontStyle::Italic));
    }

    #[test]
    fn decoration_substring_match() {
        assert_eq!(
            TextDecoration::from_css("underline dotted"),
            TextDecoration::Underline
        );
        assert_eq!(TextDecoration::from_css("overline"), TextDecoration::None);
    }
}
