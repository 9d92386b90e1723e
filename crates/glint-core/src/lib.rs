pub mod config;
pub mod error;
pub mod issue;
pub mod report;
pub mod style;

pub use config::ReportConfig;
pub use error::ReportError;
pub use issue::{Description, Issue, Level};

pub const TOOL_NAME: &str = "glint";

/// JSON schema version of rendered reports.
/// This must be bumped only when the JSON output changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";
