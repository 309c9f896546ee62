//! Color parsing helpers.

use crate::backend::Color;

/// Parse a `#RRGGBB` or `#RRGGBBAA` hex string into a [`Color`].
///
/// Case-insensitive; the leading `#` is required. Returns `None` for any
/// other length or for non-hex digits.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(1)?;
    let b = channel(2)?;
    let a = if hex.len() == 8 { channel(3)? } else { 255 };
    Some(Color::rgba(r, g, b, a))
}
