//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, counting wide characters correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` so that it fits in `width` display columns.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > width {
            break;
        }
        used += cw;
        out.push(ch);
    }
    out
}

/// Hours with one decimal, as shown in the month view.
pub fn hours2readable(minutes: i64) -> String {
    format!("{:.1}", minutes as f64 / 60.0)
}
