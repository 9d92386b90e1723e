//! Severity levels.
//!
//! A level is an ordinal: filtering compares ordinals, styling looks them up
//! in the palette. Ordinals outside the named set are legal values and are
//! styled with the palette fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReportError;

/// Ordered diagnostic rank.
///
/// Ordering is semantic: `OK < INFO < WARN < ERROR`. The container
/// pseudo-level sits far above every real severity so it never sorts
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub u8);

impl Level {
    pub const OK: Level = Level(0);
    pub const INFO: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERROR: Level = Level(3);

    /// Default ordinal of the group header marker.
    pub const CONTAINER: Level = Level(100);

    /// Real diagnostic severities, lowest first.
    pub const REAL: [Level; 4] = [Level::OK, Level::INFO, Level::WARN, Level::ERROR];

    /// Canonical name for the named severities.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Level::OK => Some("ok"),
            Level::INFO => Some("info"),
            Level::WARN => Some("warn"),
            Level::ERROR => Some("error"),
            _ => None,
        }
    }

    pub fn is_real(self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "ok" => Ok(Level::OK),
            "info" => Ok(Level::INFO),
            "warn" | "warning" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => other
                .parse::<u8>()
                .map(Level)
                .map_err(|_| ReportError::UnknownLevel(trimmed.to_string())),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u8(self.0),
        }
    }
}

/// Accepts either a level name or a bare ordinal.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Ordinal(u8),
    Name(String),
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Ordinal(n) => Ok(Level(n)),
            LevelRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
