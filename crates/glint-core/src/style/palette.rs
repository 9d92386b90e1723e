//! Severity to color and glyph lookup.
//!
//! The palette is a plain value handed to the writer, so alternative
//! palettes can be swapped in and tested without touching the renderer.
//! Lookups are total: a level missing from the table gets the fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::issue::Level;
use crate::style::color::Color;

/// Visual treatment of one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub glyph: String,
}

impl Style {
    pub fn new(color: Color, glyph: &str) -> Self {
        Self {
            color,
            glyph: glyph.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Styles of real severities.
    pub levels: BTreeMap<Level, Style>,

    /// Ordinal reserved for group headers.
    pub container_level: Level,
    pub container: Style,

    /// Used for any level not found above.
    pub fallback: Style,

    /// Detail text below the top level.
    pub body: Color,
    /// Dot padding on top level lines.
    pub fill: Color,
    /// Section titles and dividers.
    pub title: Color,
    /// Renderer error block and its marker.
    pub error: Style,
}

impl Default for Palette {
    fn default() -> Self {
        let levels = BTreeMap::from([
            (Level::ERROR, Style::new(Color::RED, "💥")),
            (Level::WARN, Style::new(Color::ORANGISH, "😱")),
            (Level::INFO, Style::new(Color::AQUA, "🔊")),
        ]);

        Self {
            levels,
            container_level: Level::CONTAINER,
            container: Style::new(Color::AQUA, "🐳"),
            fallback: Style::new(Color::AQUA, "✅"),
            body: Color::WHITE,
            fill: Color::GRAY,
            title: Color::LIGHT_SLATE,
            error: Style::new(Color::RED, "💥"),
        }
    }
}

impl Palette {
    /// Same colors, plain ASCII markers for terminals without emoji.
    pub fn ascii() -> Self {
        let mut palette = Self::default();
        palette.use_ascii_glyphs();
        palette
    }

    /// Swaps the glyphs of the named levels, container, fallback and error
    /// markers for ASCII, keeping every color and any extra table entries.
    pub fn use_ascii_glyphs(&mut self) {
        for (level, marker) in [
            (Level::ERROR, "[X]"),
            (Level::WARN, "[!]"),
            (Level::INFO, "[i]"),
        ] {
            if let Some(style) = self.levels.get_mut(&level) {
                style.glyph = marker.to_string();
            }
        }
        self.container.glyph = "[+]".to_string();
        self.fallback.glyph = "[OK]".to_string();
        self.error.glyph = "[X]".to_string();
    }

    /// Style of an issue line. Never the group header style, even when the
    /// level shares the container ordinal.
    pub fn style_for(&self, level: Level) -> &Style {
        self.levels.get(&level).unwrap_or(&self.fallback)
    }

    /// Style of group header lines.
    pub fn header_style(&self) -> &Style {
        &self.container
    }

    pub fn color_for(&self, level: Level) -> Color {
        self.style_for(level).color
    }

    pub fn glyph_for(&self, level: Level) -> &str {
        &self.style_for(level).glyph
    }

    /// Rejects a container ordinal that would shadow a real severity.
    pub fn validate(&self) -> Result<()> {
        if self.container_level.is_real() || self.levels.contains_key(&self.container_level) {
            return Err(ReportError::Config(format!(
                "container level {} collides with a severity level",
                self.container_level.0
            )));
        }
        Ok(())
    }
}
