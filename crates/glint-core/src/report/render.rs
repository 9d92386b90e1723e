//! Issue layout and text rendering.
//!
//! Layout is a pure pass over the issues that decides which lines to emit;
//! writing those lines is left to [`ReportWriter`].

use std::borrow::Cow;
use std::io::Write;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::issue::{Description, Issue, Level};
use crate::report::model::{Report, Tally};
use crate::report::writer::ReportWriter;

/// Depth of standalone issues and group headers.
pub const ITEM_INDENT: usize = 2;

/// Depth of details nested under a group header.
pub const DETAIL_INDENT: usize = 3;

const EMPTY_SECTION: &str = "Nothing to report.";

/// What a planned line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Group label, carries the container pseudo-level.
    Header,
    /// Issue detail, carries the issue's own level.
    Item,
}

/// One planned report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub kind: LineKind,
    pub level: Level,
    pub indent: usize,
    pub text: Cow<'a, str>,
}

/// Moves the current group to `label`.
///
/// Returns the label when it starts a new run and needs a header.
pub fn advance_group<'a>(current: &mut Option<&'a str>, label: &'a str) -> Option<&'a str> {
    if *current == Some(label) {
        return None;
    }
    *current = Some(label);
    Some(label)
}

/// Plans the lines for `issues`, in order, dropping those below `min_level`.
///
/// A group header is emitted once per run of consecutive grouped issues
/// sharing a label. A standalone issue ends the run.
pub fn layout<'a>(
    issues: &'a [Issue],
    min_level: Level,
    container: Level,
) -> impl Iterator<Item = Line<'a>> + 'a {
    let mut current: Option<&'a str> = None;

    issues
        .iter()
        .filter(move |issue| issue.severity() >= min_level)
        .flat_map(move |issue| {
            let (header, indent) = match issue.description() {
                Description::Grouped { label, .. } => (
                    advance_group(&mut current, label).map(|label| Line {
                        kind: LineKind::Header,
                        level: container,
                        indent: ITEM_INDENT,
                        text: Cow::Borrowed(label),
                    }),
                    DETAIL_INDENT,
                ),
                Description::Standalone(_) => {
                    current = None;
                    (None, ITEM_INDENT)
                }
            };

            let detail = Line {
                kind: LineKind::Item,
                level: issue.severity(),
                indent,
                text: Cow::Owned(format!("{}.", issue.description().detail())),
            };

            header.into_iter().chain(std::iter::once(detail))
        })
}

impl<W: Write> ReportWriter<'_, W> {
    /// Writes every qualifying issue as it is planned.
    ///
    /// Returns the number of lines written.
    pub fn dump(&mut self, min_level: Level, issues: &[Issue]) -> Result<usize> {
        let container = self.config().palette.container_level;
        let mut written = 0;
        for line in layout(issues, min_level, container) {
            match line.kind {
                LineKind::Header => self.write_header(line.indent, &line.text)?,
                LineKind::Item => self.write_line(line.level, line.indent, &line.text)?,
            }
            written += 1;
        }
        log::trace!(
            "dumped {written} lines for {} issues at >= {min_level}",
            issues.len()
        );
        Ok(written)
    }
}

/// Writes the issue lines of one section straight to `out`.
pub fn dump<W: Write>(
    out: &mut W,
    config: &ReportConfig,
    min_level: Level,
    issues: &[Issue],
) -> Result<usize> {
    ReportWriter::new(out, config).dump(min_level, issues)
}

/// Writes every section of `report` as framed, colored text.
pub fn write_text<W: Write>(
    out: &mut W,
    report: &Report,
    config: &ReportConfig,
    min_level: Level,
) -> Result<Tally> {
    let tally = report.tally(min_level);
    let mut writer = ReportWriter::new(out, config);
    for section in &report.sections {
        writer.open_section(&section.title)?;
        if writer.dump(min_level, &section.issues)? == 0 {
            writer.write_line(Level::OK, ITEM_INDENT, EMPTY_SECTION)?;
        }
        writer.close_section()?;
    }
    writer.write_comment(&tally.to_string())?;

    log::debug!(
        "rendered {} sections, {} issues",
        report.sections.len(),
        tally.total
    );
    Ok(tally)
}

pub fn render_text(report: &Report, config: &ReportConfig, min_level: Level) -> Result<String> {
    let mut buf = Vec::new();
    write_text(&mut buf, report, config, min_level)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
