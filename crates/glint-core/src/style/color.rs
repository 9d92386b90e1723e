//! 256-color foreground escapes.

use serde::{Deserialize, Serialize};

/// Resets all attributes back to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Index into the ANSI 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    pub const ORANGISH: Color = Color(220);
    pub const GRAY: Color = Color(250);
    pub const WHITE: Color = Color(15);
    pub const RED: Color = Color(202);
    pub const AQUA: Color = Color(122);
    pub const LIGHT_SLATE: Color = Color(75);

    /// Foreground escape selecting this color.
    pub fn open(self) -> String {
        format!("\x1b[38;5;{};m", self.0)
    }
}

/// Wraps `text` in the foreground escape for `color`, resetting right after.
pub fn colorize(text: &str, color: Color) -> String {
    let mut out = color.open();
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_wraps_text_verbatim() {
        let out = colorize("hello", Color::RED);
        assert_eq!(out, "\x1b[38;5;202;mhello\x1b[0m");
        assert!(out.starts_with(&Color::RED.open()));
        assert!(out.ends_with(RESET));
    }

    #[test]
    fn nested_colorize_stays_self_contained() {
        let inner = colorize("x", Color::AQUA);
        let outer = colorize(&inner, Color::GRAY);
        assert_eq!(outer, format!("{}{}{}", Color::GRAY.open(), inner, RESET));
    }

    #[test]
    fn empty_text_still_resets() {
        assert_eq!(colorize("", Color(0)), "\x1b[38;5;0;m\x1b[0m");
    }
}
