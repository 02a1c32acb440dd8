//! A small forgiving tokenizer for HTML-like markup.
//!
//! The input is decoded into an explicit token stream rather than positional
//! regex captures. Anything that does not look like a tag (a stray `<`, a
//! missing `>`, a name that does not start with a letter) stays part of the
//! surrounding text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    /// Opening tag; `attrs` is the raw tail between the name and `>`,
    /// including a trailing `/` for self-closed forms.
    Open { name: &'a str, attrs: &'a str },
    Close { name: &'a str },
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut text_start = 0;

    while pos < input.len() {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }
        let Some(gt) = input[pos..].find('>').map(|rel| pos + rel) else {
            // No closing '>' anywhere ahead; the rest is text.
            break;
        };
        match parse_tag(&input[pos + 1..gt]) {
            Some(tag) => {
                if text_start < pos {
                    tokens.push(Token::Text(&input[text_start..pos]));
                }
                tokens.push(tag);
                pos = gt + 1;
                text_start = pos;
            }
            None => pos += 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

fn parse_tag(inner: &str) -> Option<Token<'_>> {
    let (is_closing, rest) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let name_len = tag_name_len(rest)?;
    let name = &rest[..name_len];
    let tail = &rest[name_len..];

    // The name must end at the tag boundary or before whitespace/attributes.
    match tail.chars().next() {
        None => {}
        Some(c) if c.is_whitespace() || c == '/' => {}
        Some(_) => return None,
    }

    if is_closing {
        if !tail.trim().is_empty() {
            return None;
        }
        Some(Token::Close { name })
    } else {
        Some(Token::Open { name, attrs: tail })
    }
}

/// Byte length of a valid tag name at the start of `s`: a letter followed by
/// letters and digits.
fn tag_name_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    let mut len = 1;
    for (i, c) in chars {
        if c.is_ascii_alphanumeric() {
            len = i + 1;
        } else {
            break;
        }
    }
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_tags() {
        let tokens = tokenize("a<b>c</b>d");
        assert_eq!(
            tokens,
            vec![
                Token::Text("a"),
                Token::Open { name: "b", attrs: "" },
                Token::Text("c"),
                Token::Close { name: "b" },
                Token::Text("d"),
            ]
        );
    }

    #[test]
    fn attributes_are_captured_raw() {
        let tokens = tokenize(r#"<a href="/x" id=y>z</a>"#);
        assert_eq!(
            tokens[0],
            Token::Open {
                name: "a",
                attrs: r#" href="/x" id=y"#
            }
        );
    }

    #[test]
    fn self_closing_keeps_slash_in_attrs() {
        let tokens = tokenize("x<br/>y");
        assert_eq!(
            tokens,
            vec![
                Token::Text("x"),
                Token::Open {
                    name: "br",
                    attrs: "/"
                },
                Token::Text("y"),
            ]
        );
    }

    #[test]
    fn stray_angle_brackets_stay_in_text() {
        assert_eq!(tokenize("a < b > c"), vec![Token::Text("a < b > c")]);
        assert_eq!(tokenize("1 < 2"), vec![Token::Text("1 < 2")]);
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(tokenize("a <b"), vec![Token::Text("a <b")]);
    }

    #[test]
    fn numbered_names() {
        let tokens = tokenize("<h1>T</h1>");
        assert_eq!(
            tokens,
            vec![
                Token::Open {
                    name: "h1",
                    attrs: ""
                },
                Token::Text("T"),
                Token::Close { name: "h1" },
            ]
        );
    }

    #[test]
    fn adjacent_text_around_invalid_tag_is_one_token() {
        assert_eq!(tokenize("a <> b"), vec![Token::Text("a <> b")]);
    }
}
