pub mod attr;
pub mod font;
pub mod segment;
pub mod text;

pub use attr::{StyleParseError, apply_declaration, attr_value, parse_attributes, parse_declarations};
pub use font::{FontStyle, FontWeight, TextDecoration};
pub use segment::{SpacingContext, TextSegment};
pub use text::{
    CODE_COLOR, DEFAULT_FONT_SIZE, LINK_COLOR, ListContext, ListKind, MARK_COLOR, MUTED_COLOR,
    TextStyle, heading_font_size, is_heading_font_size, list_indent,
};
