//! Line-level output: section frames, issue lines, error blocks.

use std::fmt::Display;
use std::io::Write;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::issue::Level;
use crate::report::wrap::wrap;
use crate::style::{Style, colorize};

/// Horizontal rule glyph under section titles.
pub const DIVIDER: &str = "┅";

/// Columns reserved for the error marker and its trailing space.
const ERROR_MARKER_WIDTH: usize = 3;

/// Columns taken by the `· ` lead and the glyph on top level lines.
const ITEM_DECORATION_WIDTH: usize = 3;

/// Writes report lines to a sink.
///
/// Every write is forwarded immediately; the first failed write is returned
/// to the caller.
pub struct ReportWriter<'a, W: Write> {
    out: &'a mut W,
    config: &'a ReportConfig,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub fn new(out: &'a mut W, config: &'a ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &ReportConfig {
        self.config
    }

    /// Blank line, title, divider, blank line.
    pub fn open_section(&mut self, title: &str) -> Result<()> {
        let color = self.config.palette.title;
        writeln!(self.out)?;
        writeln!(self.out, "{}", colorize(title, color))?;
        writeln!(
            self.out,
            "{}",
            colorize(&DIVIDER.repeat(self.config.width), color)
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn close_section(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn write_line(&mut self, level: Level, indent: usize, message: &str) -> Result<()> {
        let line = format_line(self.config, level, indent, message);
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Group header line, drawn with the container style.
    pub fn write_header(&mut self, indent: usize, label: &str) -> Result<()> {
        let line = format_styled(
            self.config,
            self.config.palette.header_style(),
            indent,
            label,
        );
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Uncolored aside under the current section.
    pub fn write_comment(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "  · {message}")?;
        Ok(())
    }

    /// Renders a renderer-side failure as a wrapped red block.
    pub fn write_error(&mut self, message: impl Display) -> Result<()> {
        let message = message.to_string();
        let width = self.config.width.saturating_sub(ERROR_MARKER_WIDTH);
        let block = wrap(&message, width).join("\n");
        let style = &self.config.palette.error;

        writeln!(self.out)?;
        writeln!(self.out, "{} {}", style.glyph, colorize(&block, style.color))?;
        Ok(())
    }
}

/// Formats one newline-terminated issue line styled by `level`.
pub fn format_line(config: &ReportConfig, level: Level, indent: usize, message: &str) -> String {
    format_styled(config, config.palette.style_for(level), indent, message)
}

/// Depth 1 is the emphasized layout: text in the style color padded with
/// dots up to the report width, glyph last. Any other depth puts the glyph
/// first and the text in the body color.
fn format_styled(config: &ReportConfig, style: &Style, indent: usize, message: &str) -> String {
    let palette = &config.palette;
    let spacer = " ".repeat(config.tab_size * indent);

    if indent == 1 {
        let dots = config
            .width
            .saturating_sub(message.chars().count())
            .saturating_sub(config.tab_size * indent)
            .saturating_sub(ITEM_DECORATION_WIDTH);
        return format!(
            "{spacer}· {}{}{}\n",
            colorize(message, style.color),
            colorize(&".".repeat(dots), palette.fill),
            style.glyph
        );
    }

    format!("{spacer}{} {}\n", style.glyph, colorize(message, palette.body))
}
