use serde::{Deserialize, Serialize};

use crate::issue::level::Level;

/// What an issue says, and optionally which parent it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// Rendered under a shared group header.
    Grouped { label: String, detail: String },

    /// Rendered on its own line.
    Standalone(String),
}

impl Description {
    /// Splits a delimiter-encoded description.
    ///
    /// Only the first delimiter separates label from detail; any later
    /// occurrence stays part of the detail text. An empty delimiter never
    /// matches.
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        if delimiter.is_empty() {
            return Description::Standalone(raw.to_string());
        }

        match raw.split_once(delimiter) {
            Some((label, detail)) => Description::Grouped {
                label: label.to_string(),
                detail: detail.to_string(),
            },
            None => Description::Standalone(raw.to_string()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Description::Grouped { label, .. } => Some(label),
            Description::Standalone(_) => None,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Description::Grouped { detail, .. } => detail,
            Description::Standalone(detail) => detail,
        }
    }
}

/// A single diagnostic handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    level: Level,
    description: Description,
}

impl Issue {
    pub fn new(level: Level, description: Description) -> Self {
        Self { level, description }
    }

    pub fn standalone(level: Level, detail: impl Into<String>) -> Self {
        Self::new(level, Description::Standalone(detail.into()))
    }

    pub fn grouped(level: Level, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(
            level,
            Description::Grouped {
                label: label.into(),
                detail: detail.into(),
            },
        )
    }

    /// Builds an issue from a delimiter-encoded description string.
    pub fn from_raw(level: Level, raw: &str, delimiter: &str) -> Self {
        Self::new(level, Description::parse(raw, delimiter))
    }

    pub fn severity(&self) -> Level {
        self.level
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

/// Issue shape accepted from input documents.
///
/// An explicit `group` takes precedence over delimiter parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    pub level: Level,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl RawIssue {
    pub fn into_issue(self, delimiter: &str) -> Issue {
        match self.group {
            Some(label) => Issue::grouped(self.level, label, self.description),
            None => Issue::from_raw(self.level, &self.description, delimiter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::DEFAULT_DELIMITER;

    #[test]
    fn description_without_delimiter_is_standalone() {
        let d = Description::parse("NoLimits", DEFAULT_DELIMITER);
        assert_eq!(d, Description::Standalone("NoLimits".into()));
        assert_eq!(d.label(), None);
        assert_eq!(d.detail(), "NoLimits");
    }

    #[test]
    fn description_splits_into_label_and_detail() {
        let d = Description::parse("Container#app\u{1f}CPU unset", DEFAULT_DELIMITER);
        assert_eq!(d.label(), Some("Container#app"));
        assert_eq!(d.detail(), "CPU unset");
    }

    #[test]
    fn only_first_delimiter_splits() {
        let d = Description::parse("a\u{1f}b\u{1f}c", DEFAULT_DELIMITER);
        assert_eq!(
            d,
            Description::Grouped {
                label: "a".into(),
                detail: "b\u{1f}c".into(),
            }
        );
    }

    #[test]
    fn empty_delimiter_never_matches() {
        let d = Description::parse("a|b", "");
        assert_eq!(d, Description::Standalone("a|b".into()));
    }

    #[test]
    fn raw_issue_group_overrides_delimiter() {
        let raw = RawIssue {
            level: Level::WARN,
            description: "x|y".into(),
            group: Some("pod".into()),
        };
        let issue = raw.into_issue("|");
        assert_eq!(issue.severity(), Level::WARN);
        assert_eq!(issue.description().label(), Some("pod"));
        assert_eq!(issue.description().detail(), "x|y");
    }

    #[test]
    fn raw_issue_deserializes_with_optional_group() {
        let raw: RawIssue =
            serde_json::from_str(r#"{"level": "error", "description": "NoLimits"}"#).unwrap();
        assert!(raw.group.is_none());
        assert_eq!(
            raw.into_issue(DEFAULT_DELIMITER),
            Issue::standalone(Level::ERROR, "NoLimits")
        );
    }
}
