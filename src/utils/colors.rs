//! ANSI color helper utilities for terminal output.

use ansi_term::Colour;

/// Parse a `#rrggbb` string into a terminal colour.
pub fn hex_to_colour(hex: &str) -> Option<Colour> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Colour::RGB(r, g, b))
}

/// Paint `text` on a background of the given hex colour; plain text if the hex is bad.
pub fn paint_block(hex: &str, text: &str) -> String {
    match hex_to_colour(hex) {
        Some(c) => Colour::White.on(c).paint(text).to_string(),
        None => text.to_string(),
    }
}
