use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::issue::{Issue, Level, RawIssue};

/// Input document: titled sections of raw issues, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSection {
    pub title: String,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

impl Document {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid issue document")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read issues: {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }
}

/// Rendered report.
///
/// Issue order inside a section is the caller's order and is never changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub sections: Vec<Section>,
}

impl Report {
    /// Resolves raw descriptions against `delimiter`.
    pub fn from_document(tool: ToolInfo, document: Document, delimiter: &str) -> Self {
        let sections = document
            .sections
            .into_iter()
            .map(|s| Section {
                title: s.title,
                issues: s
                    .issues
                    .into_iter()
                    .map(|raw| raw.into_issue(delimiter))
                    .collect(),
            })
            .collect();

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            sections,
        }
    }

    /// Copy keeping only issues at or above `min_level`.
    pub fn filtered(&self, min_level: Level) -> Self {
        Self {
            schema_version: self.schema_version.clone(),
            tool: self.tool.clone(),
            sections: self
                .sections
                .iter()
                .map(|s| Section {
                    title: s.title.clone(),
                    issues: s
                        .issues
                        .iter()
                        .filter(|i| i.severity() >= min_level)
                        .cloned()
                        .collect(),
                })
                .collect(),
        }
    }

    /// JSON view: the filtered report with its counts.
    pub fn summarize(&self, min_level: Level) -> Summary {
        Summary {
            report: self.filtered(min_level),
            tally: self.tally(min_level),
        }
    }

    pub fn tally(&self, min_level: Level) -> Tally {
        Tally::from_issues(
            self.sections.iter().flat_map(|s| s.issues.iter()),
            min_level,
        )
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub report: Report,
    pub tally: Tally,
}

/// Per-level issue counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub counts: BTreeMap<Level, usize>,
    pub total: usize,
}

impl Tally {
    /// Counts issues at or above `min_level`.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>, min_level: Level) -> Self {
        let mut tally = Tally::default();
        for issue in issues {
            if issue.severity() >= min_level {
                *tally.counts.entry(issue.severity()).or_default() += 1;
                tally.total += 1;
            }
        }
        tally
    }

    pub fn count(&self, level: Level) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn highest(&self) -> Option<Level> {
        self.counts.keys().next_back().copied()
    }

    /// CI exit code: 1 when anything reached `fail_on`, else 0.
    pub fn exit_code(&self, fail_on: Level) -> i32 {
        match self.highest() {
            Some(level) if level >= fail_on => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "issue" } else { "issues" };
        write!(f, "{} {noun}", self.total)?;
        for (i, (level, count)) in self.counts.iter().rev().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{level} {count}")?;
        }
        Ok(())
    }
}
